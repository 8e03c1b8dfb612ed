//! Error types for conversion operations

use std::fmt;

/// Errors that can surface from the conversion toolkit.
///
/// The transducers themselves are total functions and never fail; the only
/// fallible operations are format-name lookup and the clipboard write.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Format name not recognized
    UnknownFormat(String),
    /// The system clipboard rejected the write
    ClipboardWriteFailed(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownFormat(name) => write!(f, "Format '{name}' not recognized"),
            ConvertError::ClipboardWriteFailed(msg) => write!(f, "Clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
