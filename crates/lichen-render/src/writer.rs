use camino::{Utf8Path, Utf8PathBuf};
use lichen_types::{RenderOptions, ReportBook};
use thiserror::Error;

/// The writer collaborators behind the dispatchers.
///
/// Implementations own all file IO. The delimited-text and structured-text
/// writers may rewrite the result file name (for example when splitting one
/// file per sheet) and report the path actually written; the other two write
/// exactly the path they were given.
pub trait ReportWriter {
    /// Spreadsheet writer; the only one that receives rendering options.
    fn write_excel(
        &mut self,
        path: &Utf8Path,
        book: &ReportBook,
        options: &RenderOptions,
    ) -> anyhow::Result<()>;

    /// Delimited-text writer; returns the path actually written.
    fn write_csv(&mut self, path: &Utf8Path, book: &ReportBook) -> anyhow::Result<Utf8PathBuf>;

    /// Dependency-graph JSON writer.
    fn write_opossum(&mut self, path: &Utf8Path, book: &ReportBook) -> anyhow::Result<()>;

    /// Structured-text writer; returns the path actually written.
    fn write_yaml(
        &mut self,
        path: &Utf8Path,
        book: &ReportBook,
        grouped: bool,
    ) -> anyhow::Result<Utf8PathBuf>;
}

/// Dispatch failures, surfaced to the caller as ordinary values.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The extension matches no writer; nothing was invoked.
    #[error("not supported file extension '{extension}'")]
    UnsupportedExtension { extension: String },

    /// The selected writer failed. `result_file` names the file the dispatch
    /// was writing when it failed; `cause` is the writer's own error chain.
    #[error("failed to write '{result_file}': {cause:#}")]
    Writer {
        result_file: Utf8PathBuf,
        cause: anyhow::Error,
    },
}
