use crate::analysis::analyze;
use crate::cli::analyze::{RangeRequest, apply_range};
use crate::cli::input::read_log;
use crate::cli::SourceArgs;
use crate::performance::PerformanceSample;
use anyhow::Result;

/// One JSON object per line, in sample order.
pub fn render_sample_lines(samples: &[PerformanceSample]) -> serde_json::Result<String> {
    let mut out = String::new();
    for sample in samples {
        out.push_str(&serde_json::to_string(sample)?);
        out.push('\n');
    }
    Ok(out)
}

/// `rptlens samples`: the selected window as JSON lines.
pub fn run_samples(source: &SourceArgs) -> Result<()> {
    let text = read_log(&source.path)?;
    let analysis = analyze(&text);

    if let Err(err) = &analysis.performance {
        anyhow::bail!("{err}");
    }

    let mut selector = analysis.range_selector();
    apply_range(&mut selector, RangeRequest::from_args(source, false))?;

    print!("{}", render_sample_lines(selector.visible())?);
    Ok(())
}
