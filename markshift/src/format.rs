//! The closed set of supported text formats

use crate::error::ConvertError;
use crate::formats::html::RenderOptions;
use crate::formats::{html, whatsapp};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The three text representations the toolkit converts between.
///
/// Deliberately a closed enum rather than a trait-object registry: every
/// dispatch site matches exhaustively, so adding a fourth format is a
/// compile-checked change instead of a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Rich-text markup as produced by a rich-text editing widget
    Html,
    /// CommonMark Markdown, the pivot representation
    Markdown,
    /// WhatsApp-style plain-text markup
    Whatsapp,
}

impl Format {
    /// Every supported format, in display order.
    pub const ALL: [Format; 3] = [Format::Html, Format::Markdown, Format::Whatsapp];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Whatsapp => "whatsapp",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::Html => "Rich-text HTML markup",
            Format::Markdown => "CommonMark Markdown (GitHub flavored)",
            Format::Whatsapp => "WhatsApp-style plain-text markup",
        }
    }

    /// File extensions associated with the format, without the dot.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Html => &["html", "htm"],
            Format::Markdown => &["md", "markdown"],
            Format::Whatsapp => &["wa"],
        }
    }

    /// Case-insensitive lookup by format name.
    pub fn from_name(name: &str) -> Result<Format, ConvertError> {
        let lowered = name.to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == lowered)
            .ok_or_else(|| ConvertError::UnknownFormat(name.to_string()))
    }

    /// Detect a format from a filename's extension.
    ///
    /// Returns `None` when the filename has no extension or the extension
    /// belongs to no supported format.
    pub fn detect_from_filename(filename: &str) -> Option<Format> {
        let extension = Path::new(filename).extension()?.to_str()?;
        Format::ALL.into_iter().find(|format| {
            format
                .file_extensions()
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(extension))
        })
    }

    /// Convert text in this format to the Markdown pivot.
    ///
    /// Total: any input produces an output, empty input produces an empty
    /// string. Markdown is the pivot, so its parse is the identity.
    pub fn parse(&self, text: &str) -> String {
        match self {
            Format::Html => html::to_markdown(text),
            Format::Markdown => text.to_string(),
            Format::Whatsapp => whatsapp::to_markdown(text),
        }
    }

    /// Render the Markdown pivot into this format. Total.
    pub fn serialize(&self, markdown: &str) -> String {
        self.serialize_with(markdown, &RenderOptions::default())
    }

    /// Render the Markdown pivot into this format with explicit HTML
    /// render options. Only the HTML target consults them.
    pub fn serialize_with(&self, markdown: &str, opts: &RenderOptions) -> String {
        match self {
            Format::Html => html::render(markdown, opts),
            Format::Markdown => markdown.to_string(),
            Format::Whatsapp => whatsapp::from_markdown(markdown),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s)
    }
}
