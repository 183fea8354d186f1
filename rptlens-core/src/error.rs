use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum PerformanceError {
    #[error("could not locate any \"Server load\" messages ({marker_lines} marker lines, none well-formed)")]
    NoServerLoad { marker_lines: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("range {start}..{end} is out of bounds for {len} samples")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("no samples are loaded")]
    Empty,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read log file {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }
}
