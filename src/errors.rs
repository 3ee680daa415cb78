/*!
 * Error types for the capbridge library.
 *
 * Readers and the timestamp codec report `CaptionError`; the conversion
 * facade wraps everything into `AppError`. Both use thiserror.
 */

use thiserror::Error;

/// Errors raised while decoding or parsing a caption document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptionError {
    /// A block's timing line could not be split into two timestamps
    #[error("Malformed file: bad timing line {line_number} ({line:?}): {reason}")]
    MalformedTiming {
        /// 1-based line number of the timing line
        line_number: usize,
        /// Raw content of the offending line
        line: String,
        /// What was wrong with it
        reason: String,
    },

    /// The document produced zero captions in every language
    #[error("No captions found: {0}")]
    NoCaptions(String),

    /// Input was not text in the expected representation
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// A single timestamp field could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from caption parsing
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No registered format matches the input or the requested name
    #[error("Unknown caption format: {0}")]
    UnknownFormat(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
