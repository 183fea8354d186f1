use super::server_load;
use crate::error::PerformanceError;
use crate::lines::LogLines;
use crate::performance::*;
use crate::settings::AnalysisSettings;
use pretty_assertions::assert_eq;

#[test]
fn parses_a_server_load_line() {
    // Arrange
    let lines: LogLines = [
        "12:00:00 Server load: FPS 19, memory used: 500 MB, out: 10 Kbps, in: 5 Kbps, NG:1, G:2, BE-NG:0, BE-G:0, Players: 3",
    ]
    .into_iter()
    .collect();

    // Act
    let samples = extract_samples(&lines);

    // Assert
    assert_eq!(
        samples,
        vec![PerformanceSample {
            order: 0,
            time: "12:00:00".to_string(),
            fps: 19,
            memory_mb: 500,
            transfer_out_kbps: 10,
            transfer_in_kbps: 5,
            non_guaranteed_msgs: 1,
            guaranteed_msgs: 2,
            players: 3,
        }]
    );
}

#[test]
fn order_is_dense_across_noise_and_gaps() {
    // Arrange
    let lines: LogLines = [
        "11:59:58 BattlEye Server: Initialized",
        server_load("12:00:00", 50, 1).as_str(),
        "12:00:05 Server load: FPS unknown",
        "12:00:06 Player joined",
        server_load("12:00:10", 48, 2).as_str(),
        "Server load: FPS 40, memory used: 1 MB, out: 1 Kbps, in: 1 Kbps, NG:0, G:0, BE-NG:0, BE-G:0, Players: 2",
        server_load("12:00:20", 47, 3).as_str(),
    ]
    .into_iter()
    .collect();

    // Act
    let samples = extract_samples(&lines);

    // Assert
    let orders: Vec<usize> = samples.iter().map(|s| s.order).collect();
    let times: Vec<&str> = samples.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert_eq!(times, vec!["12:00:00", "12:00:10", "12:00:20"]);
}

#[test]
fn marker_must_follow_the_timestamp_at_line_start() {
    let indented = format!(" {}", server_load("12:00:00", 50, 1));

    assert_eq!(parse_server_load(&indented, 0), None);
}

#[test]
fn trailing_text_after_players_is_accepted() {
    let line = format!("{} (peak)", server_load("23:59:59", 30, 64));

    let sample = parse_server_load(&line, 7).expect("line should parse");

    assert_eq!(sample.order, 7);
    assert_eq!(sample.players, 64);
}

#[test]
fn counters_overflowing_u32_are_dropped() {
    let line = "12:00:00 Server load: FPS 99999999999, memory used: 500 MB, out: 10 Kbps, in: 5 Kbps, NG:1, G:2, BE-NG:0, BE-G:0, Players: 3";

    assert_eq!(parse_server_load(line, 0), None);
}

#[test]
fn non_ascii_digits_are_rejected() {
    let line = "12:00:00 Server load: FPS ٤٥, memory used: 500 MB, out: 10 Kbps, in: 5 Kbps, NG:1, G:2, BE-NG:0, BE-G:0, Players: 3";

    assert_eq!(parse_server_load(line, 0), None);
}

#[test]
fn timestamps_are_kept_verbatim() {
    let lines: LogLines = [server_load("25:03:07", 40, 1)].into_iter().collect();

    let samples = extract_samples(&lines);

    assert_eq!(samples[0].time, "25:03:07");
}

#[test]
fn no_markers_is_reported_as_no_server_load() {
    // Arrange
    let lines = LogLines::from_text("12:00:00 Mission file: x\n12:00:01 Game started.");

    // Act
    let result = analyze_performance(&lines, &AnalysisSettings::default());

    // Assert
    assert_eq!(result, Err(PerformanceError::NoServerLoad { marker_lines: 0 }));
}

#[test]
fn only_malformed_markers_is_reported_as_no_server_load() {
    let lines = LogLines::from_text("12:00:05 Server load: FPS unknown\n12:00:06 Server load: garbage");

    let result = analyze_performance(&lines, &AnalysisSettings::default());

    assert_eq!(result, Err(PerformanceError::NoServerLoad { marker_lines: 2 }));
}

#[test]
fn empty_log_yields_no_samples() {
    let lines = LogLines::from_text("");

    assert!(extract_samples(&lines).is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let text = [server_load("12:00:00", 50, 1), server_load("12:00:10", 12, 2)].join("\r\n");
    let lines = LogLines::from_text(&text);

    assert_eq!(extract_samples(&lines), extract_samples(&lines));
}
