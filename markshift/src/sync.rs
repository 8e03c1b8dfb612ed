//! Mode synchronization between format buffers
//!
//! A [`SyncSession`] owns one text buffer per format plus two mode
//! selectors. Exactly one buffer, the input mode's, is authoritative at
//! any time; the other buffers hold whatever was last materialized into
//! them. Every derivation goes through the Markdown pivot, so the
//! conversion graph stays at two functions per format instead of one per
//! ordered pair.

use crate::clipboard::Clipboard;
use crate::format::Format;
use crate::formats::html::RenderOptions;

/// Editing session state for synchronized multi-format editing.
///
/// The state machine is explicit: `input_mode` names the authoritative
/// buffer, and switching it materializes derived text into the new
/// buffer instead of leaving stale contents behind.
#[derive(Debug, Clone)]
pub struct SyncSession {
    html: String,
    markdown: String,
    whatsapp: String,
    input_mode: Format,
    output_mode: Format,
    render: RenderOptions,
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncSession {
    /// Session editing HTML and reading Markdown output.
    pub fn new() -> Self {
        Self::with_modes(Format::Html, Format::Markdown)
    }

    /// Session with explicit input and output modes.
    pub fn with_modes(input_mode: Format, output_mode: Format) -> Self {
        Self {
            html: String::new(),
            markdown: String::new(),
            whatsapp: String::new(),
            input_mode,
            output_mode,
            render: RenderOptions::default(),
        }
    }

    pub fn input_mode(&self) -> Format {
        self.input_mode
    }

    pub fn output_mode(&self) -> Format {
        self.output_mode
    }

    /// HTML render options consulted whenever a derivation targets HTML.
    pub fn set_render_options(&mut self, render: RenderOptions) {
        self.render = render;
    }

    /// The authoritative buffer's current contents.
    pub fn input(&self) -> &str {
        self.buffer(self.input_mode)
    }

    /// Replace the authoritative buffer's contents.
    pub fn set_input(&mut self, text: &str) {
        *self.buffer_mut(self.input_mode) = text.to_string();
    }

    /// Switch which buffer is authoritative.
    ///
    /// The current buffer's text is derived into the new mode's buffer
    /// before the switch, so the new mode always starts from what was
    /// just being edited, never from the buffer's stale previous
    /// contents. The empty string materializes like any other text.
    /// Switching to the current mode is a no-op.
    pub fn set_input_mode(&mut self, mode: Format) {
        if mode == self.input_mode {
            return;
        }
        let markdown = self.current_markdown();
        let materialized = mode.serialize_with(&markdown, &self.render);
        *self.buffer_mut(mode) = materialized;
        self.input_mode = mode;
    }

    /// Switch which format [`output`](Self::output) reports. Selector
    /// only; buffers are untouched.
    pub fn set_output_mode(&mut self, mode: Format) {
        self.output_mode = mode;
    }

    /// The Markdown pivot derived from the authoritative buffer.
    pub fn current_markdown(&self) -> String {
        self.input_mode.parse(self.buffer(self.input_mode))
    }

    /// Derive the authoritative text into `target`.
    ///
    /// When `target` is the input mode itself this returns the live
    /// buffer verbatim; a parse/serialize round trip would normalize
    /// text still being edited.
    pub fn derived(&self, target: Format) -> String {
        if target == self.input_mode {
            return self.buffer(target).to_string();
        }
        target.serialize_with(&self.current_markdown(), &self.render)
    }

    /// The output-mode view of the session.
    pub fn output(&self) -> String {
        self.derived(self.output_mode)
    }

    /// Empty every buffer. Mode selectors are untouched.
    pub fn clear_all(&mut self) {
        self.html.clear();
        self.markdown.clear();
        self.whatsapp.clear();
    }

    /// Copy the output-mode text to `clipboard`.
    ///
    /// Clipboard failures are logged and swallowed; session state is
    /// untouched either way.
    pub fn copy_output(&self, clipboard: &mut dyn Clipboard) {
        let text = self.output();
        if let Err(err) = clipboard.write_text(&text) {
            log::warn!("copy to clipboard failed: {err}");
        }
    }

    fn buffer(&self, mode: Format) -> &str {
        match mode {
            Format::Html => &self.html,
            Format::Markdown => &self.markdown,
            Format::Whatsapp => &self.whatsapp,
        }
    }

    fn buffer_mut(&mut self, mode: Format) -> &mut String {
        match mode {
            Format::Html => &mut self.html,
            Format::Markdown => &mut self.markdown,
            Format::Whatsapp => &mut self.whatsapp,
        }
    }
}
