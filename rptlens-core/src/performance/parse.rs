use crate::lines::LogLines;
use crate::performance::constants::SERVER_LOAD_MARKER;
use crate::performance::types::PerformanceSample;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware.
static SERVER_LOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([0-9]+:[0-9]+:[0-9]+) Server load: FPS ([0-9]+), memory used: ([0-9]+) MB, ",
        r"out: ([0-9]+) Kbps, in: ([0-9]+) Kbps, NG:([0-9]+), G:([0-9]+), ",
        r"BE-NG:[0-9]+, BE-G:[0-9]+, Players: ([0-9]+)",
    ))
    .expect("server load pattern compiles")
});

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Decode a single line. `None` when the line is not a well-formed server load
/// report or one of its counters does not fit in a `u32`.
pub fn parse_server_load(line: &str, order: usize) -> Option<PerformanceSample> {
    let caps = SERVER_LOAD.captures(line)?;

    Some(PerformanceSample {
        order,
        time: caps.get(1)?.as_str().to_string(),
        fps: number(&caps, 2)?,
        memory_mb: number(&caps, 3)?,
        transfer_out_kbps: number(&caps, 4)?,
        transfer_in_kbps: number(&caps, 5)?,
        non_guaranteed_msgs: number(&caps, 6)?,
        guaranteed_msgs: number(&caps, 7)?,
        players: number(&caps, 8)?,
    })
}

/// All well-formed server load samples, in log order, numbered densely from 0.
///
/// Lines that carry the marker but do not match the full shape are noise and
/// are skipped without affecting the numbering.
pub fn extract_samples(lines: &LogLines) -> Vec<PerformanceSample> {
    let mut samples = Vec::new();
    let mut dropped = 0usize;

    for line in lines.iter().filter(|ln| ln.contains(SERVER_LOAD_MARKER)) {
        match parse_server_load(line, samples.len()) {
            Some(sample) => samples.push(sample),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "skipped malformed server load lines");
    }

    samples
}
