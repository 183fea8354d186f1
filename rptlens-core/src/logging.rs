use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics logging on stderr
///
/// - Level filtering comes from `RUST_LOG` (defaults to "warn" so reports stay readable)
/// - `json` switches to flattened JSON events for machine consumption
///
/// stdout is reserved for the report itself.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    if json {
        builder.json().flatten_event(true).init();
    } else {
        builder.with_target(false).init();
    }
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Pretty,
    Json,
}
