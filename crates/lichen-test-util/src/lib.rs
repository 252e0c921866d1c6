//! Shared test utilities for the lichen workspace.
//!
//! This crate exists because writer stubs are needed by integration tests in
//! more than one crate, so a `#[cfg(test)]` module inside `lichen-render`
//! would not suffice.

#![forbid(unsafe_code)]

use anyhow::anyhow;
use camino::{Utf8Path, Utf8PathBuf};
use lichen_render::ReportWriter;
use lichen_types::{RenderOptions, ReportBook};

/// One recorded writer invocation, tagged by the writer it landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterCall {
    Excel {
        path: Utf8PathBuf,
        sheets: usize,
        cover: Option<String>,
    },
    Csv {
        path: Utf8PathBuf,
        sheets: usize,
    },
    Opossum {
        path: Utf8PathBuf,
        sheets: usize,
    },
    Yaml {
        path: Utf8PathBuf,
        sheets: usize,
        grouped: bool,
    },
}

/// A [`ReportWriter`] that records every call instead of doing IO.
///
/// `fail_with` makes every write fail with that message. `rewrite_to` makes
/// the CSV and YAML writers report that path instead of the requested one,
/// mimicking writers that split or rename their output.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub calls: Vec<WriterCall>,
    pub fail_with: Option<String>,
    pub rewrite_to: Option<Utf8PathBuf>,
}

impl RecordingWriter {
    fn check_failure(&self) -> anyhow::Result<()> {
        match &self.fail_with {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }

    fn actual_path(&self, requested: &Utf8Path) -> Utf8PathBuf {
        self.rewrite_to
            .clone()
            .unwrap_or_else(|| requested.to_path_buf())
    }
}

impl ReportWriter for RecordingWriter {
    fn write_excel(
        &mut self,
        path: &Utf8Path,
        book: &ReportBook,
        options: &RenderOptions,
    ) -> anyhow::Result<()> {
        self.calls.push(WriterCall::Excel {
            path: path.to_path_buf(),
            sheets: book.len(),
            cover: options.cover.clone(),
        });
        self.check_failure()
    }

    fn write_csv(&mut self, path: &Utf8Path, book: &ReportBook) -> anyhow::Result<Utf8PathBuf> {
        self.calls.push(WriterCall::Csv {
            path: path.to_path_buf(),
            sheets: book.len(),
        });
        self.check_failure()?;
        Ok(self.actual_path(path))
    }

    fn write_opossum(&mut self, path: &Utf8Path, book: &ReportBook) -> anyhow::Result<()> {
        self.calls.push(WriterCall::Opossum {
            path: path.to_path_buf(),
            sheets: book.len(),
        });
        self.check_failure()
    }

    fn write_yaml(
        &mut self,
        path: &Utf8Path,
        book: &ReportBook,
        grouped: bool,
    ) -> anyhow::Result<Utf8PathBuf> {
        self.calls.push(WriterCall::Yaml {
            path: path.to_path_buf(),
            sheets: book.len(),
            grouped,
        });
        self.check_failure()?;
        Ok(self.actual_path(path))
    }
}

/// A small two-sheet report book for dispatch tests.
pub fn sample_book() -> ReportBook {
    let mut book = ReportBook::new();
    book.insert_sheet(
        "SRC",
        vec![
            vec!["lib-a".to_string(), "MIT".to_string()],
            vec!["lib-b".to_string(), "Apache-2.0".to_string()],
        ],
    );
    book.insert_sheet("BIN", vec![vec!["bin-c".to_string(), "MIT".to_string()]]);
    book
}
