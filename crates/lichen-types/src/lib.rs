//! Stable DTOs used across the lichen workspace.
//!
//! This crate is intentionally boring:
//! - the `OutputFormat` tagged variant and the format registry
//! - resolution result types for single and batch output targets
//! - the sheet/row report model handed to writers

#![forbid(unsafe_code)]

pub mod book;
pub mod format;
pub mod registry;
pub mod resolution;

pub use book::{RenderOptions, ReportBook};
pub use format::OutputFormat;
pub use registry::FormatRegistry;
pub use resolution::{ResolvedOutput, ResolvedOutputs};
