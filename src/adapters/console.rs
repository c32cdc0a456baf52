//! Console Report Sink
//!
//! The bundled `ReportSink`: prints each rendered report to stdout
//! with a timestamp header. A GUI toolkit would replace this 1:1.

use crate::domain::report::StatusReport;
use crate::ports::view::ReportSink;

/// Stdout display surface.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn present(&self, report: &StatusReport) {
        println!(
            "--- refreshed {} ---",
            report.polled_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        print!("{}", report.render());
    }
}
