use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single output target resolved into directory, file stem, and extension.
///
/// Empty strings mean "unset": a bare directory target leaves `file_stem` and
/// `extension` empty, and an empty target leaves everything but a
/// format-mandated extension empty. A non-empty `extension` always carries
/// its leading dot and is a value of the registry that resolved it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedOutput {
    pub dir: String,
    pub file_stem: String,
    pub extension: String,
}

impl ResolvedOutput {
    /// Directory and stem joined back into a path without extension, the
    /// shape the write dispatcher takes.
    pub fn file_without_extension(&self) -> String {
        if self.dir.is_empty() {
            self.file_stem.clone()
        } else {
            format!("{}/{}", self.dir.trim_end_matches('/'), self.file_stem)
        }
    }
}

/// Batch resolution result: parallel vectors of directories, file stems, and
/// extensions.
///
/// When no directory (or stem) was produced, a single empty-string
/// placeholder is present so callers can safely index position 0. In the
/// shared-directory case `dirs` has length 1 while `extensions` carries one
/// entry per requested format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedOutputs {
    pub dirs: Vec<String>,
    pub file_stems: Vec<String>,
    pub extensions: Vec<String>,
}
