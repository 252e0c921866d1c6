//! Writer contract and extension dispatch for report output.
//!
//! The four serializers (spreadsheet, delimited text, graph JSON, structured
//! text) live behind the [`ReportWriter`] trait; this crate only decides
//! which of them a resolved extension lands on and assembles the result file
//! path. It performs no IO of its own.

#![forbid(unsafe_code)]

mod dispatch;
mod writer;

pub use dispatch::{WriteOutcome, write_report, write_reports};
pub use writer::{ReportWriter, WriteError};
