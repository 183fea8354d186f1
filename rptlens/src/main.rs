use anyhow::{Context, Result};
use clap::Parser;
use rptlens_core::cli::{self, AnalyzeOptions, LogCmd, RangeRequest};
use rptlens_core::logging::{self, OutputMode, init_logging};
use rptlens_core::settings::AnalysisSettings;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rptlens",
    version,
    about = "rptlens: dedicated server log analyzer"
)]
struct Cli {
    /// Emit diagnostics as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: LogCmd,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("rptlens error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: LogCmd) -> Result<ExitCode> {
    match command {
        LogCmd::Analyze {
            source,
            all,
            json,
            plain,
            low_fps,
            low_fps_ratio,
            window,
        } => {
            let output = if json {
                OutputMode::Json
            } else if plain {
                OutputMode::Plain
            } else {
                logging::default_output_mode()
            };

            let defaults = AnalysisSettings::default();
            let settings = AnalysisSettings {
                low_fps_threshold: low_fps.unwrap_or(defaults.low_fps_threshold),
                low_fps_ratio: low_fps_ratio.unwrap_or(defaults.low_fps_ratio),
                default_window: window.unwrap_or(defaults.default_window),
            };

            let opts = AnalyzeOptions {
                range: RangeRequest::from_args(&source, all),
                source,
                output,
                settings,
            };

            let has_errors = cli::run_analyze(&opts).context("analyze failed")?;
            Ok(if has_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }

        LogCmd::Samples { source } => {
            cli::run_samples(&source).context("samples failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
