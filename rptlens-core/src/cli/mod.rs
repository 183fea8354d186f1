mod analyze;
mod input;
mod render;
mod samples;

#[cfg(test)]
mod tests;

pub use analyze::*;
pub use input::read_log;
pub use render::*;
pub use samples::*;

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum LogCmd {
    /// Analyze a server log and print a health report
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Show every sample instead of the initial window
        #[arg(long, conflicts_with_all = ["from", "to"])]
        all: bool,

        /// Output as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Plain text output without colors
        #[arg(long)]
        plain: bool,

        /// FPS at or below which a sample counts as low
        #[arg(long)]
        low_fps: Option<u32>,

        /// Fraction of low samples that triggers the sustained low FPS warning
        #[arg(long)]
        low_fps_ratio: Option<f64>,

        /// Number of samples shown when no range is given
        #[arg(long)]
        window: Option<usize>,
    },

    /// Print the selected samples as JSON lines
    Samples {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the server log (.rpt)
    pub path: PathBuf,

    /// First sample index to show (inclusive)
    #[arg(long)]
    pub from: Option<usize>,

    /// Last sample index to show (exclusive)
    #[arg(long)]
    pub to: Option<usize>,
}
