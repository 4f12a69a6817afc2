//! Error types.

use thiserror::Error;

/// Password generation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Every character class is disabled after the preset is applied.
    #[error("No character classes selected: enable uppercase or lowercase letters")]
    EmptyCharset,
}

/// Clipboard access failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The system clipboard could not be opened (no display, no permission).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but the write was rejected.
    #[error("Clipboard write failed: {0}")]
    Write(String),

    #[error("Nothing to copy yet: generate a password first")]
    Empty,
}

/// Command-line usage errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid preset: {0} (expected average, good or strong)")]
    InvalidPreset(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}
