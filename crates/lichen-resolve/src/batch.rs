use crate::ResolveError;
use crate::single::split_extension;
use camino::Utf8Path;
use lichen_types::{FormatRegistry, ResolvedOutputs};

/// Resolve a batch of output targets against the requested formats.
///
/// Formats are validated up front, before any target is inspected. Targets
/// then fall into one of three cases:
///
/// - one target without extension: a single shared output directory;
/// - one target with extension and no formats: an explicit file whose
///   extension must be a registry value;
/// - otherwise: explicit file names, one per format, in lock-step. The
///   counts must match (unless no targets were given at all) and each
///   target's extension must equal its format's mandated extension.
///
/// Failures return no partial results. On success `dirs` and `file_stems`
/// each hold at least one entry (an empty-string placeholder when nothing
/// was produced) so callers can safely index position 0.
pub fn resolve_outputs(
    targets: &[String],
    format_ids: &[String],
    custom_registry: Option<&FormatRegistry>,
) -> Result<ResolvedOutputs, ResolveError> {
    let default_registry;
    let registry = match custom_registry {
        Some(custom) => custom,
        None => {
            default_registry = FormatRegistry::default();
            &default_registry
        }
    };

    let format_ids: Vec<String> = format_ids.iter().map(|id| id.to_lowercase()).collect();

    let mut resolved = ResolvedOutputs::default();
    for id in &format_ids {
        let extension =
            registry
                .extension_for(id)
                .ok_or_else(|| ResolveError::UnsupportedFormat {
                    requested: id.clone(),
                    supported: registry.supported_ids(),
                })?;
        resolved.extensions.push(extension.to_string());
    }

    if targets.len() == 1 && split_extension(Utf8Path::new(&targets[0])).is_none() {
        // Single shared output directory; any format-mandated extensions stay.
        resolved.dirs.push(targets[0].clone());
    } else if targets.len() == 1 && format_ids.is_empty() {
        // Single explicit file, format inferred from its extension.
        let path = Utf8Path::new(&targets[0]);
        resolved
            .dirs
            .push(path.parent().map(|p| p.to_string()).unwrap_or_default());

        // The shared-directory arm above took the extensionless case.
        if let Some(extension) = split_extension(path) {
            if !registry.knows_extension(&extension) {
                return Err(ResolveError::UnsupportedExtension {
                    extension,
                    supported: registry.supported_extensions(),
                });
            }
            resolved
                .file_stems
                .push(path.file_stem().unwrap_or_default().to_string());
            resolved.extensions.push(extension);
        }
    } else {
        // Explicit file names paired with formats, in lock-step.
        if targets.len() != format_ids.len() && !targets.is_empty() {
            return Err(ResolveError::CountMismatch {
                targets: targets.len(),
                formats: format_ids.len(),
            });
        }

        let mandated = resolved.extensions.clone();
        for (target, (id, mandated_extension)) in
            targets.iter().zip(format_ids.iter().zip(&mandated))
        {
            let path = Utf8Path::new(target);
            match split_extension(path) {
                Some(ref extension) if extension == mandated_extension => {
                    resolved
                        .dirs
                        .push(path.parent().map(|p| p.to_string()).unwrap_or_default());
                    resolved
                        .file_stems
                        .push(path.file_stem().unwrap_or_default().to_string());
                }
                _ => {
                    return Err(ResolveError::TargetFormatMismatch {
                        target: target.clone(),
                        format: id.clone(),
                    });
                }
            }
        }
    }

    if resolved.dirs.is_empty() {
        resolved.dirs.push(String::new());
    }
    if resolved.file_stems.is_empty() {
        resolved.file_stems.push(String::new());
    }

    Ok(resolved)
}
