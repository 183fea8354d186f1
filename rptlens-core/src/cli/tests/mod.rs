
use crate::cli::{AnalyzeOptions, RangeRequest, SourceArgs};
use crate::logging::OutputMode;
use crate::settings::AnalysisSettings;

pub(crate) const LOG: &str = "\
9:59:58 Dedicated host created.\r\n\
9:59:59 Mission file: co10_escape (__cur_mp)\r\n\
9:59:59 Mission world: Altis\r\n\
9:59:59 Mission directory: mpmissions\\__cur_mp.Altis\\\r\n\
10:00:00 Server load: FPS 49, memory used: 1210 MB, out: 120 Kbps, in: 40 Kbps, NG:0, G:3, BE-NG:0, BE-G:0, Players: 4\r\n\
10:00:10 Server load: FPS 18, memory used: 1300 MB, out: 480 Kbps, in: 90 Kbps, NG:2, G:40, BE-NG:0, BE-G:0, Players: 9\r\n\
10:00:20 Server load: FPS 47, memory used: 1320 MB, out: 510 Kbps, in: 95 Kbps, NG:0, G:12, BE-NG:0, BE-G:0, Players: 9\r\n";

pub(crate) fn options(output: OutputMode, range: RangeRequest) -> AnalyzeOptions {
    AnalyzeOptions {
        source: SourceArgs {
            path: "server.rpt".into(),
            from: None,
            to: None,
        },
        range,
        output,
        settings: AnalysisSettings::default(),
    }
}
