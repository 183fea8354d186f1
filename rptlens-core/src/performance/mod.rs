//! Server performance analysis
//!
//! The dedicated server writes a `Server load` line at a fixed interval once
//! an administrator enables `#monitords`. Each line looks like:
//!
//! ```text
//! 12:00:00 Server load: FPS 47, memory used: 1830 MB, out: 412 Kbps, in: 96 Kbps, NG:0, G:12, BE-NG:0, BE-G:0, Players: 24
//! ```
//!
//! The data flow is:
//!
//! LogLines
//! extract_samples
//! PerformanceSample
//! assess_low_fps / summarize / fps_histogram
//! PerformanceReport
//!

mod constants;
mod histogram;
mod parse;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use parse::{extract_samples, parse_server_load};
pub use stats::{assess_low_fps, fps_histogram, summarize};
pub use types::*;

use crate::error::PerformanceError;
use crate::lines::LogLines;
use crate::settings::AnalysisSettings;

/// Run the performance analyzer over a whole log.
///
/// Fails with [`PerformanceError::NoServerLoad`] when not a single line matches;
/// there is nothing to chart in that case.
pub fn analyze_performance(
    lines: &LogLines,
    settings: &AnalysisSettings,
) -> Result<PerformanceReport, PerformanceError> {
    let samples = extract_samples(lines);

    let Some(summary) = summarize(&samples) else {
        let marker_lines = lines
            .iter()
            .filter(|ln| ln.contains(SERVER_LOAD_MARKER))
            .count();
        tracing::info!(marker_lines, "no server load samples found");
        return Err(PerformanceError::NoServerLoad { marker_lines });
    };

    let low_fps = assess_low_fps(&samples, settings.low_fps_threshold, settings.low_fps_ratio);
    let fps_histogram = fps_histogram(&samples);

    tracing::info!(
        samples = samples.len(),
        low_fps_samples = low_fps.low_samples,
        first = %summary.first_time,
        last = %summary.last_time,
        "extracted server load samples"
    );

    Ok(PerformanceReport {
        samples,
        low_fps,
        summary,
        fps_histogram,
    })
}
