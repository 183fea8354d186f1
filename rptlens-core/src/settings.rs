use crate::performance::{LOW_FPS_RATIO, LOW_FPS_THRESHOLD};
use crate::selection::DEFAULT_WINDOW;
use serde::Serialize;

/// Tunables for one analysis run.
///
/// Defaults come from the module constants; the CLI overrides them per flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisSettings {
    /// Samples at or below this FPS count as low.
    pub low_fps_threshold: u32,
    /// Fraction of low samples above which the warning fires.
    pub low_fps_ratio: f64,
    /// Size of the initial visible window.
    pub default_window: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            low_fps_threshold: LOW_FPS_THRESHOLD,
            low_fps_ratio: LOW_FPS_RATIO,
            default_window: DEFAULT_WINDOW,
        }
    }
}
