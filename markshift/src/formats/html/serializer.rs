//! HTML rendering (Markdown → HTML export)
//!
//! Thin wrapper over `comrak`. The interesting part is [`RenderOptions`],
//! which pins down the two knobs the rest of the workspace cares about
//! instead of exposing comrak's full option surface.

use comrak::ComrakOptions;

/// Rendering knobs for Markdown → HTML conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Treat single newlines as hard line breaks (`<br>`).
    pub hardbreaks: bool,
    /// Enable the GitHub-flavored extensions: tables, strikethrough and
    /// autolinks.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hardbreaks: true,
            gfm: true,
        }
    }
}

/// Render Markdown to an HTML fragment with explicit options.
pub fn render(markdown: &str, opts: &RenderOptions) -> String {
    let mut options = ComrakOptions::default();
    options.render.hardbreaks = opts.hardbreaks;
    if opts.gfm {
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
    }
    comrak::markdown_to_html(markdown, &options)
}

/// Render Markdown to an HTML fragment with the default options.
pub fn to_html(markdown: &str) -> String {
    render(markdown, &RenderOptions::default())
}
