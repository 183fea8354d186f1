use crate::error::SelectionError;
use crate::performance::PerformanceSample;
use crate::selection::range::{SelectionRange, select};
use crate::selection::DEFAULT_WINDOW;
use std::sync::Arc;

/// First and last timestamps covered by a range, for the `From:`/`To:` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

#[derive(Debug, Clone)]
enum State {
    Empty,
    Loaded {
        samples: Arc<[PerformanceSample]>,
        pending: SelectionRange,
        applied: SelectionRange,
    },
}

/// Pending/applied range state for one loaded log.
///
/// `Empty → Loaded(default range) → Loaded(user range)`. Loading a new log
/// always starts over from the default range.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    window: usize,
    state: State,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl RangeSelector {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            state: State::Empty,
        }
    }

    /// Replace everything with `samples`. An empty sequence leaves the selector empty.
    pub fn load(&mut self, samples: impl Into<Arc<[PerformanceSample]>>) {
        let samples = samples.into();

        if samples.is_empty() {
            self.state = State::Empty;
            return;
        }

        let initial = SelectionRange::initial(samples.len(), self.window);
        tracing::debug!(samples = samples.len(), end = initial.end(), "loaded samples into range selector");

        self.state = State::Loaded {
            samples,
            pending: initial,
            applied: initial,
        };
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn clear(&mut self) {
        self.state = State::Empty;
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded { .. })
    }

    pub fn samples(&self) -> &[PerformanceSample] {
        match &self.state {
            State::Empty => &[],
            State::Loaded { samples, .. } => samples,
        }
    }

    /// Record a slider movement. The visible slice does not change until [`apply`](Self::apply).
    pub fn set_pending(&mut self, start: usize, end: usize) -> Result<SelectionRange, SelectionError> {
        let State::Loaded {
            samples, pending, ..
        } = &mut self.state
        else {
            return Err(SelectionError::Empty);
        };

        *pending = SelectionRange::new(start, end, samples.len())?;
        Ok(*pending)
    }

    pub fn pending(&self) -> Option<SelectionRange> {
        match &self.state {
            State::Empty => None,
            State::Loaded { pending, .. } => Some(*pending),
        }
    }

    pub fn applied(&self) -> Option<SelectionRange> {
        match &self.state {
            State::Empty => None,
            State::Loaded { applied, .. } => Some(*applied),
        }
    }

    /// Commit the pending range and return the new visible slice.
    pub fn apply(&mut self) -> &[PerformanceSample] {
        if let State::Loaded {
            pending, applied, ..
        } = &mut self.state
        {
            *applied = *pending;
            tracing::debug!(start = applied.start(), end = applied.end(), "applied sample range");
        }
        self.visible()
    }

    pub fn visible(&self) -> &[PerformanceSample] {
        match &self.state {
            State::Empty => &[],
            // Ranges are validated against this very sequence on the way in.
            State::Loaded {
                samples, applied, ..
            } => select(samples, *applied).unwrap_or_default(),
        }
    }

    /// Timestamps of the first and last sample in the pending range.
    pub fn pending_bounds(&self) -> Option<RangeBounds<'_>> {
        let State::Loaded {
            samples, pending, ..
        } = &self.state
        else {
            return None;
        };

        if pending.is_empty() {
            return None;
        }

        Some(RangeBounds {
            from: &samples[pending.start()].time,
            to: &samples[pending.end() - 1].time,
        })
    }
}
