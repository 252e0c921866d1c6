use thiserror::Error;

/// Resolution failures, surfaced to the caller as ordinary values.
///
/// `Display` is the user-facing message; callers decide whether and where to
/// report it. There are no retries and no panics on bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The format identifier is not in the active registry. The message
    /// enumerates every supported identifier.
    #[error("unsupported format '{requested}': enter one of the supported formats: {supported}")]
    UnsupportedFormat { requested: String, supported: String },

    /// The target's file extension is not a value of the active registry.
    /// The message enumerates every supported extension.
    #[error(
        "unsupported file extension '{extension}': enter one of the supported extensions: {supported}"
    )]
    UnsupportedExtension { extension: String, supported: String },

    /// The target's extension disagrees with the extension mandated by the
    /// requested format.
    #[error(
        "output file '{target}' does not carry the '{expected}' extension mandated by format '{format}'"
    )]
    ExtensionMismatch {
        target: String,
        format: String,
        expected: String,
    },

    /// Batch lock-step failure: the target is missing an extension, or its
    /// extension disagrees with its paired format.
    #[error("output file '{target}' does not match the specified format '{format}'")]
    TargetFormatMismatch { target: String, format: String },

    /// Batch counts disagree when explicit file names are given.
    #[error(
        "the number of output files ({targets}) must match the number of formats ({formats}) when file names are specified"
    )]
    CountMismatch { targets: usize, formats: usize },
}
