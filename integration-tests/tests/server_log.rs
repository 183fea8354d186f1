use integration_tests::harness::load_fixture;
use pretty_assertions::assert_eq;
use rptlens_core::analysis::{analyze, derive_issues};
use rptlens_core::issues::{AnalysisIssues, Analyzer, Severity};
use rptlens_core::lines::LogLines;
use rptlens_core::performance::extract_samples;
use rptlens_core::selection::{DEFAULT_WINDOW, SelectionRange, select};

const SAMPLES: usize = 620;
const LOW_FPS_SAMPLES: usize = 93;

#[test]
fn fixture_is_split_on_crlf() {
    let text = load_fixture("server.rpt");

    let lines = LogLines::from_text(&text);

    assert_eq!(lines.len(), 657);
    assert!(lines.iter().all(|ln| !ln.ends_with('\r')));
}

#[test]
fn every_well_formed_server_load_line_becomes_a_sample() {
    // Arrange
    let lines = LogLines::from_text(&load_fixture("server.rpt"));
    let marker_lines = lines.iter().filter(|ln| ln.contains("Server load")).count();

    // Act
    let samples = extract_samples(&lines);

    // Assert
    assert_eq!(marker_lines, SAMPLES + 3);
    assert_eq!(samples.len(), SAMPLES);
    assert!(samples.iter().enumerate().all(|(i, s)| s.order == i));
    assert_eq!(samples.first().map(|s| s.time.as_str()), Some("18:03:00"));
    assert_eq!(samples.last().map(|s| s.time.as_str()), Some("19:46:10"));
}

#[test]
fn full_analysis_of_a_failing_mission() {
    // Arrange
    let text = load_fixture("server.rpt");

    // Act
    let analysis = analyze(&text);
    let issues = derive_issues(&analysis);

    // Assert
    let perf = analysis.performance.as_ref().expect("fixture has samples");
    assert_eq!(perf.low_fps.low_samples, LOW_FPS_SAMPLES);
    assert!(perf.low_fps.sustained);
    assert_eq!(perf.summary.fps.min, 14);
    assert_eq!(perf.summary.fps.max, 48);

    assert_eq!(
        analysis.mission.info.mission_file,
        "18:02:11 Mission file: co10_escape (__cur_mp)"
    );
    assert_eq!(analysis.mission.info.mission_world, "18:02:11 Mission world: Altis");
    assert_eq!(analysis.mission.missing_addons, vec!["ace_main", "cba_main", "rhsusf_main"]);

    assert_eq!(
        issues.flags(Analyzer::Performance),
        AnalysisIssues {
            has_errors: false,
            has_warnings: true
        }
    );
    assert_eq!(
        issues.flags(Analyzer::Mission),
        AnalysisIssues {
            has_errors: true,
            has_warnings: false
        }
    );
    let severities: Vec<Severity> = issues.issues.iter().map(|i| i.severity).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Error]);
}

#[test]
fn initial_window_then_user_range() {
    // Arrange
    let analysis = analyze(&load_fixture("server.rpt"));
    let mut selector = analysis.range_selector();

    // Act + Assert: initial window
    assert_eq!(selector.visible().len(), DEFAULT_WINDOW);

    // Act + Assert: dragging does not change what is shown
    selector.set_pending(550, SAMPLES).expect("valid range");
    assert_eq!(selector.visible().len(), DEFAULT_WINDOW);
    let bounds = selector.pending_bounds().expect("non-empty range");
    assert_eq!((bounds.from, bounds.to), ("19:34:40", "19:46:10"));

    // Act + Assert: apply
    let visible = selector.apply().to_vec();
    let samples = &analysis.performance.as_ref().expect("samples").samples;
    let expected = select(samples, SelectionRange::new(550, SAMPLES, samples.len()).expect("valid"))
        .expect("in bounds");
    assert_eq!(visible.as_slice(), expected);
}

#[test]
fn reanalysis_is_identical() {
    let text = load_fixture("server.rpt");

    let first = analyze(&text);
    let second = analyze(&text);

    assert_eq!(first, second);
    assert_eq!(derive_issues(&first), derive_issues(&second));
}
