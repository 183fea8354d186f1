use serde::Serialize;

/// Raw log lines describing the selected mission.
///
/// Each field carries the whole matching line (timestamp included) so it can be
/// shown as-is; an empty string means the server never logged it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionInfo {
    pub mission_file: String,
    pub mission_world: String,
    pub mission_directory: String,
}

impl MissionInfo {
    pub fn is_unknown(&self) -> bool {
        self.mission_file.is_empty()
            && self.mission_world.is_empty()
            && self.mission_directory.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionReport {
    pub info: MissionInfo,
    /// Addons the server reported as missing; empty when the mission loaded cleanly.
    pub missing_addons: Vec<String>,
}
