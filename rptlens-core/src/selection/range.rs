use crate::error::SelectionError;
use crate::performance::PerformanceSample;
use serde::Serialize;

/// Half-open `[start, end)` index range into a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Checked constructor: requires `start <= end <= len`.
    pub fn new(start: usize, end: usize, len: usize) -> Result<Self, SelectionError> {
        if start > end || end > len {
            return Err(SelectionError::OutOfBounds { start, end, len });
        }
        Ok(Self { start, end })
    }

    /// `[0, min(len, window))`.
    pub fn initial(len: usize, window: usize) -> Self {
        Self {
            start: 0,
            end: len.min(window),
        }
    }

    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The samples inside `range`. Never copies or reorders.
pub fn select(
    samples: &[PerformanceSample],
    range: SelectionRange,
) -> Result<&[PerformanceSample], SelectionError> {
    samples
        .get(range.start..range.end)
        .ok_or(SelectionError::OutOfBounds {
            start: range.start,
            end: range.end,
            len: samples.len(),
        })
}
