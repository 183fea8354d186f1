use serde::Serialize;
use std::ops::Index;

/// Physical lines of a server log, in file order.
///
/// Built once per upload and never mutated afterwards. Both extractors walk the
/// same `LogLines`, so ordering is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogLines {
    lines: Vec<String>,
}

impl LogLines {
    /// Normalize `\r\n` to `\n` and split on `\n`.
    ///
    /// Empty input yields a single empty line and a trailing newline yields a
    /// trailing empty line. A lone `\r` is left untouched.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::to_owned)
            .collect();

        tracing::debug!(lines = lines.len(), bytes = text.len(), "normalized log text");

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl<S: Into<String>> FromIterator<S> for LogLines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Index<usize> for LogLines {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}
