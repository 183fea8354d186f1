
use crate::performance::PerformanceSample;

pub(crate) fn samples(n: usize) -> Vec<PerformanceSample> {
    (0..n)
        .map(|order| PerformanceSample {
            order,
            time: format!("{:02}:{:02}:{:02}", order / 3600, (order / 60) % 60, order % 60),
            fps: 40,
            memory_mb: 1024,
            transfer_out_kbps: 200,
            transfer_in_kbps: 40,
            non_guaranteed_msgs: 0,
            guaranteed_msgs: 2,
            players: 8,
        })
        .collect()
}
