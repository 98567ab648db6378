//! Error types for option definition, tracking and value access.
//!
//! Two tiers exist. [`Error`] covers conditions that abort the caller:
//! malformed command lines, metadata for undefined options, duplicate
//! definitions under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy),
//! and option-file I/O. [`QueryMiss`] is the local, non-fatal outcome of a
//! value lookup that found nothing usable.

use thiserror::Error;

/// Errors that abort option definition or tracking.
#[derive(Debug, Error)]
pub enum Error {
    /// A cluster contained a character that is not a defined option.
    #[error("unknown option: '-{0}'")]
    UnknownOption(char),

    /// An argument-taking option ended the argument list. Holds the whole
    /// offending token.
    #[error("option '{0}' requires an argument but none was supplied")]
    MissingArgument(String),

    /// Metadata was attached to an option that was never defined.
    #[error("option '-{0}' is not defined")]
    UndefinedOption(char),

    /// A definition repeated an option name while duplicates are rejected.
    #[error("option '-{0}' is already defined")]
    DuplicateOption(char),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns `true` for malformed command lines, the errors [`track`]
    /// reports.
    ///
    /// [`track`]: crate::OptionSet::track
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::UnknownOption(_) | Self::MissingArgument(_))
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Why a value lookup produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryMiss {
    #[error("option is not defined")]
    Undefined,
    #[error("option was not used")]
    Unused,
    #[error("option does not take an argument")]
    Flag,
    #[error("option has no scan format")]
    NoFormat,
    #[error("option has an empty scan format")]
    EmptyFormat,
    /// The configured format has no single supported conversion.
    #[error("invalid scan format: {0}")]
    InvalidFormat(String),
    #[error("index {index} out of range for {len} value(s)")]
    OutOfRange { index: usize, len: usize },
    /// The scan format could not extract exactly one value from the text.
    #[error("value does not match the scan format")]
    Mismatch,
    /// The scanned value does not fit the requested destination type.
    #[error("scanned value does not fit the destination type")]
    WrongType,
}
