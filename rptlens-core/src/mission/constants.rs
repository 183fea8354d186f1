// The leading space anchors each marker to the gap after the timestamp.
pub const MISSION_FILE_MARKER: &str = " Mission file:";
pub const MISSION_WORLD_MARKER: &str = " Mission world:";
pub const MISSION_DIRECTORY_MARKER: &str = " Mission directory:";

pub const MISSING_ADDONS_SENTINEL: &str = "Missing addons detected";
