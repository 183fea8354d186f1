use crate::analysis::{analyze_with, derive_issues};
use crate::cli::input::read_log;
use crate::cli::render::{ReportView, render_json, render_text};
use crate::cli::SourceArgs;
use crate::error::SelectionError;
use crate::logging::OutputMode;
use crate::selection::RangeSelector;
use crate::settings::AnalysisSettings;
use anyhow::Result;

/// Which samples the caller wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    /// Keep the initial window.
    Default,
    /// Every sample.
    All,
    /// `from` defaults to 0, `to` to one window past `from`.
    Explicit { from: Option<usize>, to: Option<usize> },
}

impl RangeRequest {
    pub fn from_args(source: &SourceArgs, all: bool) -> Self {
        match (all, source.from, source.to) {
            (true, _, _) => RangeRequest::All,
            (false, None, None) => RangeRequest::Default,
            (false, from, to) => RangeRequest::Explicit { from, to },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub source: SourceArgs,
    pub range: RangeRequest,
    pub output: OutputMode,
    pub settings: AnalysisSettings,
}

pub struct Rendered {
    pub output: String,
    pub has_errors: bool,
}

/// Move the selector to the requested range and apply it.
///
/// An empty selector has nothing to select and is left alone.
pub fn apply_range(selector: &mut RangeSelector, request: RangeRequest) -> Result<(), SelectionError> {
    if !selector.is_loaded() {
        return Ok(());
    }

    let len = selector.samples().len();
    let (start, end) = match request {
        RangeRequest::Default => return Ok(()),
        RangeRequest::All => (0, len),
        RangeRequest::Explicit { from, to } => {
            let start = from.unwrap_or(0);
            let end = to.unwrap_or_else(|| start.saturating_add(selector.window()).min(len));
            (start, end)
        }
    };

    selector.set_pending(start, end)?;
    selector.apply();
    Ok(())
}

/// Analyze in-memory log text and render the report.
pub fn analyze_text(source_name: &str, text: &str, opts: &AnalyzeOptions) -> Result<Rendered> {
    let analysis = analyze_with(text, &opts.settings);
    let issues = derive_issues(&analysis);

    let mut selector = analysis.range_selector();
    apply_range(&mut selector, opts.range)?;

    let view = ReportView {
        source: source_name,
        analysis: &analysis,
        issues: &issues,
        selector: &selector,
    };

    let output = match opts.output {
        OutputMode::Json => render_json(&view)?,
        OutputMode::Plain => render_text(&view, false),
        OutputMode::Pretty => render_text(&view, true),
    };

    Ok(Rendered {
        output,
        has_errors: issues.has_errors(),
    })
}

/// `rptlens analyze`: returns whether any error-level issue was found.
pub fn run_analyze(opts: &AnalyzeOptions) -> Result<bool> {
    let text = read_log(&opts.source.path)?;
    let rendered = analyze_text(&opts.source.path.display().to_string(), &text, opts)?;

    print!("{}", rendered.output);

    Ok(rendered.has_errors)
}
