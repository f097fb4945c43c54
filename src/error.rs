//! Error types for mdinline library.

use std::io;
use thiserror::Error;

/// Result type alias for mdinline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the fallible edges of the formatter.
///
/// The formatting engine itself never fails: malformed Markdown degrades
/// into plain output. Errors only come from loading style configuration
/// and serializing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The style configuration could not be used.
    #[error("Invalid style configuration: {0}")]
    Style(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
