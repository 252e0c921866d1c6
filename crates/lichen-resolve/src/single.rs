use crate::ResolveError;
use camino::Utf8Path;
use lichen_types::{FormatRegistry, ResolvedOutput};

/// Resolve a single output target against an optional format identifier.
///
/// `target` may be empty, an existing directory, a bare directory name, or a
/// file path with or without extension. `custom_registry` replaces the
/// built-in registry for this call only; `None` selects the default.
///
/// Rules, in order:
/// 1. A given format identifier is lowercased and must be in the registry;
///    it contributes its mandated extension.
/// 2. A target naming an existing directory becomes the output directory
///    wholesale, even if its name looks like a file.
/// 3. Otherwise the target splits into directory / stem / extension. A parsed
///    extension must agree with the format (when given) or be a registry
///    value (when not). A target without extension is a directory-to-be.
pub fn resolve_output(
    target: &str,
    format_id: Option<&str>,
    custom_registry: Option<&FormatRegistry>,
) -> Result<ResolvedOutput, ResolveError> {
    let default_registry;
    let registry = match custom_registry {
        Some(custom) => custom,
        None => {
            default_registry = FormatRegistry::default();
            &default_registry
        }
    };

    let format_id = format_id.map(str::to_lowercase);
    let mut resolved = ResolvedOutput::default();

    if let Some(id) = format_id.as_deref() {
        let extension =
            registry
                .extension_for(id)
                .ok_or_else(|| ResolveError::UnsupportedFormat {
                    requested: id.to_string(),
                    supported: registry.supported_ids(),
                })?;
        resolved.extension = extension.to_string();
    }

    if target.is_empty() {
        return Ok(resolved);
    }

    let path = Utf8Path::new(target);
    if path.is_dir() {
        resolved.dir = target.to_string();
        return Ok(resolved);
    }

    match split_extension(path) {
        Some(extension) => {
            match format_id.as_deref() {
                Some(id) if extension != resolved.extension => {
                    return Err(ResolveError::ExtensionMismatch {
                        target: target.to_string(),
                        format: id.to_string(),
                        expected: resolved.extension.clone(),
                    });
                }
                None if !registry.knows_extension(&extension) => {
                    return Err(ResolveError::UnsupportedExtension {
                        extension,
                        supported: registry.supported_extensions(),
                    });
                }
                _ => {}
            }
            resolved.dir = path.parent().map(|p| p.to_string()).unwrap_or_default();
            resolved.file_stem = path.file_stem().unwrap_or_default().to_string();
            resolved.extension = extension;
        }
        // No extension: the whole target names the output directory.
        None => resolved.dir = target.to_string(),
    }

    Ok(resolved)
}

/// Extension of the final path component, dot included.
///
/// `None` when the component has no extension; dotfiles like `.config` count
/// as extensionless, matching `Utf8Path::extension`.
pub(crate) fn split_extension(path: &Utf8Path) -> Option<String> {
    path.extension().map(|extension| format!(".{extension}"))
}
