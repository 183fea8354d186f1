//! Mission load diagnostics
//!
//! Pulls the selected mission's identity out of the log, plus the block of
//! addons the server refused to load the mission without:
//!
//! ```text
//! 18:02:11 Mission file: co10_escape (__cur_mp)
//! 18:02:11 Mission world: Altis
//! 18:02:11 Mission directory: mpmissions\__cur_mp.Altis\
//! 18:02:12 Missing addons detected:
//! 18:02:12   ace_main
//! 18:02:12   cba_main
//! ```

mod constants;
mod parse;
mod types;


pub use constants::*;
pub use parse::{extract_missing_addons, extract_mission_info};
pub use types::*;

use crate::lines::LogLines;

/// Run both mission extractors. Never fails: absent metadata stays empty.
pub fn analyze_mission(lines: &LogLines) -> MissionReport {
    let report = MissionReport {
        info: extract_mission_info(lines),
        missing_addons: extract_missing_addons(lines),
    };

    tracing::info!(
        known = !report.info.is_unknown(),
        missing_addons = report.missing_addons.len(),
        "extracted mission diagnostics"
    );

    report
}
