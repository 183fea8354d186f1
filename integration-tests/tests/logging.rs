use integration_tests::harness::{capture_events, load_fixture};
use rptlens_core::analysis::{analyze, derive_issues};
use tracing::Level;

#[test]
fn issues_are_logged_as_warnings() {
    // Arrange
    let text = load_fixture("server.rpt");

    // Act
    let (issues, events) = capture_events(|| derive_issues(&analyze(&text)));

    // Assert
    let logged: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::WARN && e.message() == Some("analysis issue"))
        .collect();
    assert_eq!(logged.len(), issues.issues.len());
    assert!(logged.iter().any(|e| e.field("analyzer") == Some("mission")));
    assert!(logged.iter().any(|e| e.field("analyzer") == Some("performance")));
}

#[test]
fn dropped_server_load_lines_are_only_debug_noise() {
    let text = load_fixture("server.rpt");

    let (_, events) = capture_events(|| analyze(&text));

    let dropped = events
        .iter()
        .find(|e| e.message() == Some("skipped malformed server load lines"))
        .expect("dropped lines are traced");
    assert_eq!(dropped.level, Level::DEBUG);
    assert_eq!(dropped.field("dropped"), Some("3"));
    assert!(events.iter().all(|e| e.level != Level::ERROR));
}

#[test]
fn extraction_results_are_logged() {
    let text = load_fixture("server.rpt");

    let (_, events) = capture_events(|| analyze(&text));

    let extracted = events
        .iter()
        .find(|e| e.message() == Some("extracted server load samples"))
        .expect("extraction is traced");
    assert_eq!(extracted.level, Level::INFO);
    assert_eq!(extracted.field("samples"), Some("620"));
    assert!(extracted.target.starts_with("rptlens_core::performance"));
}
