use crate::lines::LogLines;
use crate::mission::constants::*;
use crate::mission::types::MissionInfo;
use once_cell::sync::Lazy;
use regex::Regex;

// Timestamp, exactly three spaces, then the addon name. Not anchored: the
// server may prefix the timestamp with padding. The name never spans a line
// terminator, so a stray `\r` ends it.
static MISSING_ADDON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+:[0-9]+:[0-9]+   ([^\r\n\x{2028}\x{2029}]+)").expect("missing addon pattern compiles")
});

fn first_containing(lines: &LogLines, marker: &str) -> String {
    lines
        .iter()
        .find(|ln| ln.contains(marker))
        .map(str::to_string)
        .unwrap_or_default()
}

/// First line for each mission marker; later duplicates are ignored.
pub fn extract_mission_info(lines: &LogLines) -> MissionInfo {
    MissionInfo {
        mission_file: first_containing(lines, MISSION_FILE_MARKER),
        mission_world: first_containing(lines, MISSION_WORLD_MARKER),
        mission_directory: first_containing(lines, MISSION_DIRECTORY_MARKER),
    }
}

/// Addon names listed under the first `Missing addons detected` line.
///
/// The block is the run of lines directly after the sentinel that match the
/// `<timestamp>   <name>` shape; it ends at the first line that does not, or at
/// end of input. The sentinel line is never part of the result.
pub fn extract_missing_addons(lines: &LogLines) -> Vec<String> {
    let Some(sentinel) = lines
        .iter()
        .position(|ln| ln.contains(MISSING_ADDONS_SENTINEL))
    else {
        return Vec::new();
    };

    let addons: Vec<String> = lines
        .iter()
        .skip(sentinel + 1)
        .map_while(|ln| {
            MISSING_ADDON
                .captures(ln)
                .and_then(|caps| caps.get(1))
                .map(|name| name.as_str().to_string())
        })
        .collect();

    tracing::debug!(sentinel_line = sentinel, addons = addons.len(), "scanned missing addons block");

    addons
}
