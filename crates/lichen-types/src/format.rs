use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four writer-backed output formats.
///
/// Dispatch is an exhaustive match over this enum, so a new format cannot be
/// added without every dispatcher branch being revisited.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Excel,
    Csv,
    Opossum,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Excel, Self::Csv, Self::Opossum, Self::Yaml];

    /// Lowercase identifier accepted from the format option.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Csv => "csv",
            Self::Opossum => "opossum",
            Self::Yaml => "yaml",
        }
    }

    /// Mandated file extension, dot included.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Excel => ".xlsx",
            Self::Csv => ".csv",
            Self::Opossum => ".json",
            Self::Yaml => ".yaml",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == extension)
    }
}
