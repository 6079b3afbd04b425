use std::io::Write;

use serde::Serialize;

use crate::control::flight::FlightReport;
use crate::control::rocket::Snapshot;

/// Report plus the sampled trace, as written by [`write_report`].
#[derive(Debug, Serialize)]
pub struct FlightDocument<'a> {
    #[serde(flatten)]
    pub report: &'a FlightReport,
    pub trace: &'a [Snapshot],
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &FlightReport,
    trace: &[Snapshot],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &FlightDocument { report, trace })
}
