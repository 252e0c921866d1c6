use crate::{ReportWriter, WriteError};
use camino::Utf8PathBuf;
use lichen_types::{OutputFormat, RenderOptions, ReportBook};

/// Result of one successful dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The file actually written, which the CSV and YAML writers may have
    /// renamed from the requested path.
    pub result_file: Utf8PathBuf,
}

/// Dispatch one resolved output to the matching writer.
///
/// `file_without_ext` is the joined directory and file stem from resolution;
/// `extension` selects the writer and defaults to the spreadsheet extension
/// when empty. An extension outside the four writer-backed ones fails without
/// invoking any writer.
pub fn write_report(
    file_without_ext: &str,
    extension: &str,
    book: &ReportBook,
    options: &RenderOptions,
    writer: &mut dyn ReportWriter,
) -> Result<WriteOutcome, WriteError> {
    let extension = if extension.is_empty() {
        OutputFormat::Excel.extension()
    } else {
        extension
    };

    let format = OutputFormat::from_extension(extension).ok_or_else(|| {
        WriteError::UnsupportedExtension {
            extension: extension.to_string(),
        }
    })?;

    let result_file = Utf8PathBuf::from(format!("{file_without_ext}{extension}"));

    let written = match format {
        OutputFormat::Excel => writer
            .write_excel(&result_file, book, options)
            .map(|()| result_file.clone()),
        OutputFormat::Csv => writer.write_csv(&result_file, book),
        OutputFormat::Opossum => writer
            .write_opossum(&result_file, book)
            .map(|()| result_file.clone()),
        // The structured-text report is always written non-grouped.
        OutputFormat::Yaml => writer.write_yaml(&result_file, book, false),
    };

    match written {
        Ok(actual) => Ok(WriteOutcome {
            result_file: actual,
        }),
        Err(cause) => Err(WriteError::Writer {
            result_file,
            cause,
        }),
    }
}

/// Dispatch a batch of resolved outputs, one writer call per pair.
///
/// Pairing is zip semantics over files and extensions. Each target is
/// dispatched independently: a failure is recorded in its slot and later
/// targets are still attempted.
pub fn write_reports(
    files_without_ext: &[String],
    extensions: &[String],
    book: &ReportBook,
    options: &RenderOptions,
    writer: &mut dyn ReportWriter,
) -> Vec<Result<WriteOutcome, WriteError>> {
    files_without_ext
        .iter()
        .zip(extensions)
        .map(|(file, extension)| write_report(file, extension, book, options, writer))
        .collect()
}

// The dispatch tests live in `tests/dispatch.rs`: they rely on
// `lichen-test-util`, whose dependency on this crate means a `#[cfg(test)]`
// module here would see a second, incompatible build of `ReportWriter`.
