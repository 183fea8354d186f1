use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Analyzer {
    Performance,
    Mission,
}

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analyzer::Performance => f.write_str("performance"),
            Analyzer::Mission => f.write_str("mission"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub analyzer: Analyzer,
    pub severity: Severity,
    pub message: String,
    pub help: Option<String>,
    /// Extra lines shown under the message, e.g. addon names.
    pub details: Vec<String>,
}

/// Health indicator flags for one analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisIssues {
    pub has_errors: bool,
    pub has_warnings: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
}

impl IssueReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn flags(&self, analyzer: Analyzer) -> AnalysisIssues {
        let mut flags = AnalysisIssues::default();
        for issue in self.issues.iter().filter(|i| i.analyzer == analyzer) {
            match issue.severity {
                Severity::Error => flags.has_errors = true,
                Severity::Warning => flags.has_warnings = true,
            }
        }
        flags
    }

    pub fn for_analyzer(&self, analyzer: Analyzer) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.analyzer == analyzer)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    fn push(
        &mut self,
        analyzer: Analyzer,
        severity: Severity,
        message: String,
        help: Option<String>,
        details: Vec<String>,
    ) {
        tracing::warn!(%analyzer, ?severity, text = %message, "analysis issue");

        self.issues.push(Issue {
            analyzer,
            severity,
            message,
            help,
            details,
        });
    }
}

/// Performance analyzer issues
impl IssueReport {
    pub fn no_server_load(&mut self) {
        self.push(
            Analyzer::Performance,
            Severity::Error,
            "Could not locate any \"Server load\" messages. Please run #monitords as server administrator after mission selection."
                .to_string(),
            None,
            Vec::new(),
        );
    }

    pub fn sustained_low_fps(&mut self, threshold: u32, low_samples: usize, total_samples: usize) {
        self.push(
            Analyzer::Performance,
            Severity::Warning,
            format!(
                "Sustained low Server FPS. Keep Server FPS equal or above {threshold} to prevent discarded message queues."
            ),
            Some(format!("Read more: {}", super::LOW_FPS_HELP_URL)),
            vec![format!("{low_samples} of {total_samples} samples at or below {threshold} FPS")],
        );
    }
}

/// Mission analyzer issues
impl IssueReport {
    pub fn missing_addons(&mut self, addons: &[String]) {
        self.push(
            Analyzer::Mission,
            Severity::Error,
            "The mission you are trying to run depends on addons which are not present on the server! Ensure all required mods are installed & loaded on the server."
                .to_string(),
            None,
            addons.to_vec(),
        );
    }
}
