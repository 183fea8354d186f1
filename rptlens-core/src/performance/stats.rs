use crate::performance::constants::FPS_BUCKETS;
use crate::performance::histogram::Histogram;
use crate::performance::types::{LowFpsAssessment, MetricSummary, PerformanceSample, PerformanceSummary};

/// Share of samples at or below `threshold`, and whether it exceeds `max_ratio`.
///
/// An empty slice is never sustained.
pub fn assess_low_fps(samples: &[PerformanceSample], threshold: u32, max_ratio: f64) -> LowFpsAssessment {
    let total_samples = samples.len();
    let low_samples = samples.iter().filter(|s| s.fps <= threshold).count();

    let ratio = if total_samples == 0 {
        0.0
    } else {
        low_samples as f64 / total_samples as f64
    };

    LowFpsAssessment {
        threshold,
        max_ratio,
        low_samples,
        total_samples,
        ratio,
        sustained: total_samples > 0 && ratio > max_ratio,
    }
}

fn metric(samples: &[PerformanceSample], field: impl Fn(&PerformanceSample) -> u32) -> MetricSummary {
    let mut min = u32::MAX;
    let mut max = 0;
    let mut sum: u64 = 0;

    for value in samples.iter().map(&field) {
        min = min.min(value);
        max = max.max(value);
        sum += u64::from(value);
    }

    MetricSummary {
        min,
        max,
        mean: sum as f64 / samples.len() as f64,
    }
}

/// Min/max/mean of the headline metrics. `None` for an empty slice.
pub fn summarize(samples: &[PerformanceSample]) -> Option<PerformanceSummary> {
    let (first, last) = (samples.first()?, samples.last()?);

    Some(PerformanceSummary {
        samples: samples.len(),
        first_time: first.time.clone(),
        last_time: last.time.clone(),
        fps: metric(samples, |s| s.fps),
        memory_mb: metric(samples, |s| s.memory_mb),
        transfer_out_kbps: metric(samples, |s| s.transfer_out_kbps),
        transfer_in_kbps: metric(samples, |s| s.transfer_in_kbps),
        players: metric(samples, |s| s.players),
    })
}

/// Sample counts per FPS bucket, labelled for display.
pub fn fps_histogram(samples: &[PerformanceSample]) -> Vec<(String, u64)> {
    let mut histogram = Histogram::new(FPS_BUCKETS);
    for sample in samples {
        histogram.record(sample.fps);
    }
    histogram.snapshot()
}
