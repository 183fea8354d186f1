mod report;


pub use report::*;

/// Where admins are pointed when the server FPS stays low.
pub const LOW_FPS_HELP_URL: &str =
    "https://forums.bohemia.net/forums/topic/209091-server-fps-recommendation/?do=findComment&comment=3222350";
