use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report data handed to writers: ordered map of sheet name to rows.
///
/// Rows are plain string cells; writers own any further typing. The map is a
/// BTreeMap so rendered output is deterministic across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ReportBook(BTreeMap<String, Vec<Vec<String>>>);

impl ReportBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_sheet(&mut self, name: impl Into<String>, rows: Vec<Vec<String>>) {
        self.0.insert(name.into(), rows);
    }

    pub fn sheet(&self, name: &str) -> Option<&[Vec<String>]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&str, &[Vec<String>])> {
        self.0.iter().map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rendering hints consumed only by the spreadsheet writer.
///
/// The delimited-text, graph-JSON, and structured-text writers receive the
/// data alone; these options never reach them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RenderOptions {
    /// Sheet name -> column headers rendered with widened columns.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub widen_headers: BTreeMap<String, Vec<String>>,

    /// Sheet name -> columns hidden in the rendered sheet.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hidden_columns: BTreeMap<String, Vec<String>>,

    /// Opaque cover-page payload, rendered ahead of the data sheets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}
