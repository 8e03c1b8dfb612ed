//! Clipboard boundary
//!
//! Copying output is a convenience, not a conversion step, so it lives
//! behind a trait: session and CLI code talk to [`Clipboard`], and tests
//! substitute a fake instead of touching the real OS clipboard.

use crate::error::ConvertError;

/// Destination for copied output text.
pub trait Clipboard {
    /// Place `text` on the clipboard, replacing its previous contents.
    fn write_text(&mut self, text: &str) -> Result<(), ConvertError>;
}

/// The operating system clipboard, via `arboard`.
///
/// The arboard handle is opened per write rather than stored: it is not
/// `Send` and creating it is cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ConvertError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|err| ConvertError::ClipboardWriteFailed(err.to_string()))
    }
}
