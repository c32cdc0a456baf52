//! View Port - Display Seam
//!
//! The window layout itself is a thin wrapper around this trait;
//! anything that can show a block of text per tracked address can
//! implement it.

use crate::domain::report::StatusReport;

/// Where rendered reports go.
pub trait ReportSink: Send + Sync + 'static {
    /// Show one full refresh tick's results.
    fn present(&self, report: &StatusReport);
}
