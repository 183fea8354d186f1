mod parse_tests;

use crate::performance::PerformanceSample;

pub(crate) fn server_load(time: &str, fps: u32, players: u32) -> String {
    format!(
        "{time} Server load: FPS {fps}, memory used: 1500 MB, out: 250 Kbps, in: 60 Kbps, NG:0, G:3, BE-NG:0, BE-G:0, Players: {players}"
    )
}

pub(crate) fn sample(order: usize, fps: u32) -> PerformanceSample {
    PerformanceSample {
        order,
        time: format!("12:00:{:02}", order % 60),
        fps,
        memory_mb: 1000 + order as u32,
        transfer_out_kbps: 100,
        transfer_in_kbps: 50,
        non_guaranteed_msgs: 0,
        guaranteed_msgs: 1,
        players: 10,
    }
}
