//! Visible window over the performance samples.
//!
//! Charts only ever render a slice of the full sample sequence. Moving the range
//! slider records a *pending* range; the visible slice is recomputed only when
//! the caller applies it, so dragging never triggers a recomputation per step.

mod range;
mod selector;

#[cfg(test)]
mod tests;

pub use range::{SelectionRange, select};
pub use selector::{RangeBounds, RangeSelector};

/// Initial window size; bounds the first render of very long logs.
pub const DEFAULT_WINDOW: usize = 500;
