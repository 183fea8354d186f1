use crate::analysis::LogAnalysis;
use crate::issues::{AnalysisIssues, Analyzer, Issue, IssueReport, Severity};
use crate::mission::MissionReport;
use crate::performance::{LowFpsAssessment, MetricSummary, PerformanceSample, PerformanceSummary, summarize};
use crate::selection::{RangeSelector, SelectionRange};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Everything a renderer needs for one report.
pub struct ReportView<'a> {
    pub source: &'a str,
    pub analysis: &'a LogAnalysis,
    pub issues: &'a IssueReport,
    pub selector: &'a RangeSelector,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson<'a> {
    source: &'a str,
    lines: usize,
    issues: IssuesJson<'a>,
    mission: &'a MissionReport,
    performance: Option<PerformanceJson<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuesJson<'a> {
    performance: AnalysisIssues,
    mission: AnalysisIssues,
    list: &'a [Issue],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceJson<'a> {
    total_samples: usize,
    summary: &'a PerformanceSummary,
    low_fps: &'a LowFpsAssessment,
    fps_histogram: &'a [(String, u64)],
    range: Option<SelectionRange>,
    visible_summary: Option<PerformanceSummary>,
    samples: &'a [PerformanceSample],
}

pub fn render_json(view: &ReportView<'_>) -> serde_json::Result<String> {
    let performance = view.analysis.performance.as_ref().ok().map(|perf| {
        let visible = view.selector.visible();
        PerformanceJson {
            total_samples: perf.samples.len(),
            summary: &perf.summary,
            low_fps: &perf.low_fps,
            fps_histogram: &perf.fps_histogram,
            range: view.selector.applied(),
            visible_summary: summarize(visible),
            samples: visible,
        }
    });

    let json = ReportJson {
        source: view.source,
        lines: view.analysis.line_count,
        issues: IssuesJson {
            performance: view.issues.flags(Analyzer::Performance),
            mission: view.issues.flags(Analyzer::Mission),
            list: &view.issues.issues,
        },
        mission: &view.analysis.mission,
        performance,
    };

    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}

fn heading(title: &str, color: bool) -> String {
    if color {
        title.bold().underline().to_string()
    } else {
        format!("{title}\n{}", "=".repeat(title.chars().count()))
    }
}

fn severity_label(severity: Severity, color: bool) -> String {
    match (severity, color) {
        (Severity::Error, true) => "error".red().bold().to_string(),
        (Severity::Warning, true) => "warning".yellow().bold().to_string(),
        (Severity::Error, false) => "error".to_string(),
        (Severity::Warning, false) => "warning".to_string(),
    }
}

fn or_unknown(line: &str) -> &str {
    if line.is_empty() { "<unknown>" } else { line }
}

/// Human-readable report; `color` switches on ANSI styling.
pub fn render_text(view: &ReportView<'_>, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({} lines)\n\n", view.source, view.analysis.line_count));

    render_issues(&mut out, view.issues, color);
    render_mission(&mut out, &view.analysis.mission, color);
    if let Ok(perf) = &view.analysis.performance {
        render_performance(&mut out, perf.samples.len(), &perf.fps_histogram, view.selector, color);
    }

    out
}

fn render_issues(out: &mut String, issues: &IssueReport, color: bool) {
    out.push_str(&heading("Issues", color));
    out.push('\n');

    if issues.issues.is_empty() {
        let ok = if color { "✔".green().to_string() } else { "ok".to_string() };
        out.push_str(&format!("  {ok} no issues found\n\n"));
        return;
    }

    let errors = issues.errors().count();
    let warnings = issues.warnings().count();
    out.push_str(&format!("  {errors} errors, {warnings} warnings\n\n"));

    for issue in issues.errors().chain(issues.warnings()) {
        out.push_str(&format!(
            "  {} [{}]: {}\n",
            severity_label(issue.severity, color),
            issue.analyzer,
            issue.message
        ));
        for detail in &issue.details {
            out.push_str(&format!("    - {detail}\n"));
        }
        if let Some(help) = &issue.help {
            out.push_str(&format!("    help: {help}\n"));
        }
        out.push('\n');
    }
}

fn render_mission(out: &mut String, mission: &MissionReport, color: bool) {
    out.push_str(&heading("Mission", color));
    out.push('\n');
    out.push_str(&format!("  file:      {}\n", or_unknown(&mission.info.mission_file)));
    out.push_str(&format!("  world:     {}\n", or_unknown(&mission.info.mission_world)));
    out.push_str(&format!("  directory: {}\n", or_unknown(&mission.info.mission_directory)));

    if mission.missing_addons.is_empty() {
        out.push_str("  missing addons: none\n\n");
    } else {
        out.push_str(&format!("  missing addons: {}\n", mission.missing_addons.len()));
        for addon in &mission.missing_addons {
            out.push_str(&format!("    - {addon}\n"));
        }
        out.push('\n');
    }
}

fn metric_row(out: &mut String, name: &str, m: &MetricSummary) {
    out.push_str(&format!("  {:<12} {:>8} {:>10.1} {:>8}\n", name, m.min, m.mean, m.max));
}

fn render_performance(
    out: &mut String,
    total: usize,
    histogram: &[(String, u64)],
    selector: &RangeSelector,
    color: bool,
) {
    out.push_str(&heading("Performance", color));
    out.push('\n');

    let visible = selector.visible();
    match (selector.applied(), summarize(visible)) {
        (Some(range), Some(summary)) => {
            out.push_str(&format!(
                "  showing samples {}..{} of {} ({} – {})\n\n",
                range.start(),
                range.end(),
                total,
                summary.first_time,
                summary.last_time
            ));
            out.push_str(&format!("  {:<12} {:>8} {:>10} {:>8}\n", "metric", "min", "mean", "max"));
            metric_row(out, "fps", &summary.fps);
            metric_row(out, "memory MB", &summary.memory_mb);
            metric_row(out, "out Kbps", &summary.transfer_out_kbps);
            metric_row(out, "in Kbps", &summary.transfer_in_kbps);
            metric_row(out, "players", &summary.players);
            out.push('\n');
        }
        _ => {
            out.push_str(&format!("  showing 0 of {total} samples\n\n"));
        }
    }

    // Distribution covers the whole log, not just the visible window.
    let counted: u64 = histogram.iter().map(|(_, c)| *c).sum();
    if counted > 0 {
        out.push_str("  FPS distribution:\n");
        for (label, count) in histogram {
            let pct = (*count as f64 / counted as f64) * 100.0;
            let bars = (pct / 5.0).floor() as usize;
            out.push_str(&format!("    {:<10} {:<20} {:>5.1}%\n", label, "█".repeat(bars), pct));
        }
        out.push('\n');
    }

    if visible.is_empty() {
        return;
    }

    out.push_str(&format!(
        "  {:>6} {:>8} {:>5} {:>8} {:>8} {:>8} {:>6} {:>6} {:>7}\n",
        "#", "time", "fps", "mem MB", "out", "in", "NG", "G", "players"
    ));
    for s in visible {
        out.push_str(&format!(
            "  {:>6} {:>8} {:>5} {:>8} {:>8} {:>8} {:>6} {:>6} {:>7}\n",
            s.order,
            s.time,
            s.fps,
            s.memory_mb,
            s.transfer_out_kbps,
            s.transfer_in_kbps,
            s.non_guaranteed_msgs,
            s.guaranteed_msgs,
            s.players
        ));
    }
}
