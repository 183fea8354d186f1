//! Two-stage analysis pipeline.
//!
//! ```text
//! text ─ LogLines::from_text ─┬─ analyze_performance ─┐
//!                             └─ analyze_mission ─────┴─ LogAnalysis ─ derive_issues ─ IssueReport
//! ```
//!
//! Both stages are pure. Callers re-run them on every new upload and throw the
//! previous results away.

use crate::error::PerformanceError;
use crate::issues::IssueReport;
use crate::lines::LogLines;
use crate::mission::{MissionReport, analyze_mission};
use crate::performance::{PerformanceReport, analyze_performance};
use crate::selection::RangeSelector;
use crate::settings::AnalysisSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct LogAnalysis {
    pub line_count: usize,
    pub settings: AnalysisSettings,
    pub performance: Result<PerformanceReport, PerformanceError>,
    pub mission: MissionReport,
}

impl LogAnalysis {
    /// A selector loaded with this log's samples at the default window.
    pub fn range_selector(&self) -> RangeSelector {
        let mut selector = RangeSelector::new(self.settings.default_window);
        if let Ok(report) = &self.performance {
            selector.load(report.samples.as_slice());
        }
        selector
    }
}

pub fn analyze(text: &str) -> LogAnalysis {
    analyze_with(text, &AnalysisSettings::default())
}

pub fn analyze_with(text: &str, settings: &AnalysisSettings) -> LogAnalysis {
    analyze_lines(&LogLines::from_text(text), settings)
}

/// Run every analyzer over already-split lines.
///
/// A failing performance analyzer never prevents the mission analyzer from
/// running, and vice versa.
pub fn analyze_lines(lines: &LogLines, settings: &AnalysisSettings) -> LogAnalysis {
    LogAnalysis {
        line_count: lines.len(),
        settings: *settings,
        performance: analyze_performance(lines, settings),
        mission: analyze_mission(lines),
    }
}

/// Issue list and health flags for an analysis.
pub fn derive_issues(analysis: &LogAnalysis) -> IssueReport {
    let mut report = IssueReport::default();

    match &analysis.performance {
        Err(PerformanceError::NoServerLoad { .. }) => report.no_server_load(),
        Ok(perf) if perf.low_fps.sustained => report.sustained_low_fps(
            perf.low_fps.threshold,
            perf.low_fps.low_samples,
            perf.low_fps.total_samples,
        ),
        Ok(_) => {}
    }

    if !analysis.mission.missing_addons.is_empty() {
        report.missing_addons(&analysis.mission.missing_addons);
    }

    report
}
