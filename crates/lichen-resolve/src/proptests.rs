//! Property-based tests for the resolvers.
//!
//! These verify invariants around:
//! - registry agreement of resolved extensions
//! - lock-step shape of batch results
//! - failure messages being non-empty and enumerating alternatives

use crate::{ResolveError, resolve_output, resolve_outputs};
use lichen_types::{FormatRegistry, OutputFormat};
use proptest::prelude::*;

/// Strategy for one of the built-in formats.
fn arb_format() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Excel),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Opossum),
        Just(OutputFormat::Yaml),
    ]
}

/// Strategy for file stems that cannot collide with real directories.
fn arb_stem() -> impl Strategy<Value = String> {
    prop::string::string_regex("gen_[a-z][a-z0-9_-]{0,12}").expect("valid regex")
}

/// Strategy for relative directory prefixes (possibly empty).
fn arb_dir() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("gen_[a-z]{1,8}(/gen_[a-z]{1,8}){0,2}").expect("valid regex"),
    ]
}

fn join(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

proptest! {
    /// Empty target plus any valid identifier resolves to the mandated extension.
    #[test]
    fn valid_format_resolves_to_registry_extension(format in arb_format()) {
        let resolved = resolve_output("", Some(format.id()), None).expect("resolve");
        prop_assert_eq!(resolved.extension, format.extension());
        prop_assert!(resolved.dir.is_empty());
        prop_assert!(resolved.file_stem.is_empty());
    }

    /// A target whose extension matches its format always resolves, and the
    /// stem survives unchanged.
    #[test]
    fn matching_target_and_format_resolve(
        dir in arb_dir(),
        stem in arb_stem(),
        format in arb_format(),
    ) {
        let target = join(&dir, &format!("{stem}{}", format.extension()));
        let resolved = resolve_output(&target, Some(format.id()), None).expect("resolve");
        prop_assert_eq!(resolved.dir, dir);
        prop_assert_eq!(resolved.file_stem, stem);
        prop_assert_eq!(resolved.extension, format.extension());
    }

    /// A resolved non-empty extension is always a value of the active registry.
    #[test]
    fn resolved_extension_is_always_in_registry(
        dir in arb_dir(),
        stem in arb_stem(),
        format in prop::option::of(arb_format()),
        target_format in prop::option::of(arb_format()),
    ) {
        let registry = FormatRegistry::default();
        let target = match target_format {
            Some(f) => join(&dir, &format!("{stem}{}", f.extension())),
            None => join(&dir, &stem),
        };
        if let Ok(resolved) = resolve_output(&target, format.map(OutputFormat::id), None)
            && !resolved.extension.is_empty()
        {
            prop_assert!(registry.knows_extension(&resolved.extension));
        }
    }

    /// A target extension that disagrees with the format never resolves.
    #[test]
    fn disagreeing_extension_always_fails(
        stem in arb_stem(),
        format in arb_format(),
        other in arb_format(),
    ) {
        prop_assume!(format != other);
        let target = format!("{stem}{}", other.extension());
        let err = resolve_output(&target, Some(format.id()), None).expect_err("must fail");
        let is_extension_mismatch = matches!(err, ResolveError::ExtensionMismatch { .. });
        prop_assert!(is_extension_mismatch);
        prop_assert!(!err.to_string().is_empty());
    }

    /// Batch lock-step results keep all three vectors at the pair count.
    #[test]
    fn batch_lock_step_shape_is_parallel(
        pairs in prop::collection::vec((arb_dir(), arb_stem(), arb_format()), 2..6),
    ) {
        let targets: Vec<String> = pairs
            .iter()
            .map(|(dir, stem, format)| join(dir, &format!("{stem}{}", format.extension())))
            .collect();
        let formats: Vec<String> = pairs
            .iter()
            .map(|(_, _, format)| format.id().to_string())
            .collect();

        let resolved = resolve_outputs(&targets, &formats, None).expect("resolve");
        prop_assert_eq!(resolved.dirs.len(), pairs.len());
        prop_assert_eq!(resolved.file_stems.len(), pairs.len());
        prop_assert_eq!(resolved.extensions.len(), pairs.len());
        for ((_, stem, format), (resolved_stem, extension)) in pairs
            .iter()
            .zip(resolved.file_stems.iter().zip(&resolved.extensions))
        {
            prop_assert_eq!(resolved_stem, stem);
            prop_assert_eq!(extension.as_str(), format.extension());
        }
    }

    /// Mismatched counts fail whenever explicit file names are present.
    #[test]
    fn batch_count_mismatch_always_fails(
        stems in prop::collection::vec(arb_stem(), 1..5),
        formats in prop::collection::vec(arb_format(), 1..5),
    ) {
        prop_assume!(stems.len() != formats.len());
        // Multiple extensionful targets so neither single-target case applies.
        prop_assume!(stems.len() >= 2);

        let targets: Vec<String> = stems.iter().map(|s| format!("{s}.csv")).collect();
        let ids: Vec<String> = formats.iter().map(|f| f.id().to_string()).collect();
        let err = resolve_outputs(&targets, &ids, None).expect_err("must fail");
        let is_count_mismatch = matches!(err, ResolveError::CountMismatch { .. });
        prop_assert!(is_count_mismatch);
    }

    /// Unknown identifiers fail with a message enumerating every registry key.
    #[test]
    fn unknown_format_message_enumerates_ids(id in "zz[a-y]{1,8}") {
        let err = resolve_output("", Some(&id), None).expect_err("must fail");
        let msg = err.to_string();
        for format in OutputFormat::ALL {
            prop_assert!(msg.contains(format.id()));
        }
    }
}
