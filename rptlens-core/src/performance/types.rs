use serde::Serialize;

/// One decoded `Server load` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    /// Position among matched samples, not the source line number.
    pub order: usize,
    /// `HH:MM:SS` verbatim from the log. Logs can wrap past midnight, so this
    /// is never converted to a numeric time.
    pub time: String,
    pub fps: u32,
    pub memory_mb: u32,
    pub transfer_out_kbps: u32,
    pub transfer_in_kbps: u32,
    pub non_guaranteed_msgs: u32,
    pub guaranteed_msgs: u32,
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowFpsAssessment {
    pub threshold: u32,
    pub max_ratio: f64,
    pub low_samples: usize,
    pub total_samples: usize,
    pub ratio: f64,
    /// True when `ratio > max_ratio`.
    pub sustained: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub samples: usize,
    pub first_time: String,
    pub last_time: String,
    pub fps: MetricSummary,
    pub memory_mb: MetricSummary,
    pub transfer_out_kbps: MetricSummary,
    pub transfer_in_kbps: MetricSummary,
    pub players: MetricSummary,
}

/// Everything the performance analyzer produces for one log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub samples: Vec<PerformanceSample>,
    pub low_fps: LowFpsAssessment,
    pub summary: PerformanceSummary,
    pub fps_histogram: Vec<(String, u64)>,
}
