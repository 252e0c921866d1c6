//! Output destination and format resolution.
//!
//! This crate is IO-light: it reconciles user-supplied output targets and
//! format identifiers into (directory, file stem, extension) triples. The
//! only filesystem touch is the existing-directory probe on a target; all
//! writer IO lives behind the `lichen-render` dispatchers.

#![forbid(unsafe_code)]

mod batch;
mod error;
mod single;

#[cfg(test)]
mod proptests;

pub use batch::resolve_outputs;
pub use error::ResolveError;
pub use single::resolve_output;

use anyhow::Context;
use lichen_types::FormatRegistry;
use std::collections::BTreeMap;

/// Parse a custom format registry from TOML (`identifier = ".ext"` pairs).
///
/// Identifiers are lowercased; extensions must carry their leading dot.
pub fn parse_registry_toml(input: &str) -> anyhow::Result<FormatRegistry> {
    let raw: BTreeMap<String, String> =
        toml::from_str(input).context("parse format registry")?;

    let mut registry = FormatRegistry::empty();
    for (id, extension) in raw {
        anyhow::ensure!(
            extension.starts_with('.'),
            "extension for format '{id}' must start with a dot, got '{extension}'"
        );
        registry.insert(id.to_lowercase(), extension);
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_and_lowercases_ids() {
        let registry = parse_registry_toml(
            r#"
SPDX = ".spdx.json"
cyclonedx = ".cdx.json"
"#,
        )
        .expect("parse registry");

        assert_eq!(registry.extension_for("spdx"), Some(".spdx.json"));
        assert_eq!(registry.extension_for("cyclonedx"), Some(".cdx.json"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rejects_extension_without_dot() {
        let err = parse_registry_toml("csv = \"csv\"").expect_err("must reject");
        assert!(err.to_string().contains("must start with a dot"));
    }

    #[test]
    fn rejects_non_table_input() {
        assert!(parse_registry_toml("not toml at all [").is_err());
    }
}
