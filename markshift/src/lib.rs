//! Format shifting between HTML, Markdown and WhatsApp markup
//!
//!     This crate converts rich text between the three representations a
//!     chat-adjacent writing workflow actually touches: the HTML a rich-text
//!     editor widget produces, Markdown, and WhatsApp's plain-text markup.
//!
//!     TLDR: For anyone touching a conversion:
//!         - Markdown is the pivot. Every format converts to and from Markdown,
//!           never directly to another format. Adding a format means writing two
//!           functions, not 2N.
//!         - Format is a closed enum, not a registry. Dispatch sites match
//!           exhaustively, so a fourth format is a compile-checked change
//!           instead of a silent fallthrough.
//!         - All conversions are total functions on strings: no input errors,
//!           no panics, empty in means empty out. Malformed markup converts to
//!           something reasonable rather than failing.
//!
//! Architecture
//!
//!     This is a pure lib. It powers markshift-cli but is shell agnostic: no
//!     code here prints to std streams, reads env vars or assumes a terminal.
//!
//!     The file structure:
//!     .
//!     ├── clipboard.rs            # Clipboard trait + arboard-backed impl
//!     ├── editor.rs               # Toolbar capability vocabulary
//!     ├── error.rs
//!     ├── format.rs               # Closed Format enum and pivot dispatch
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── parser.rs       # HTML → Markdown (htmd + custom handlers)
//!     │   │   ├── serializer.rs   # Markdown → HTML (comrak)
//!     │   │   └── mod.rs
//!     │   └── whatsapp
//!     │       ├── parser.rs       # WhatsApp → Markdown (guarded spans)
//!     │       ├── serializer.rs   # Markdown → WhatsApp (ordered pipeline)
//!     │       └── mod.rs
//!     ├── lib.rs
//!     ├── spans.rs                # Guard-aware span rewriting engine
//!     └── sync.rs                 # SyncSession mode controller
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs                  # mod registrations
//!     ├── html
//!     ├── whatsapp
//!     ├── sync.rs
//!     ├── properties.rs
//!     └── fixtures
//!         ├── kitchensink.html
//!         ├── kitchensink.md
//!         └── kitchensink.wa
//!
//!     Note that rust does not by default discover tests in subdirectories, so
//!     the per-format directories are registered as modules in tests/lib.rs.
//!
//! Core Algorithms
//!
//!     Guarded spans (./spans.rs). The WhatsApp span regexes would need
//!     lookaround to keep `*italic*` from eating the inner asterisks of
//!     `**bold**`; the regex crate has none. A rewrite loop walks candidate
//!     matches and re-checks the guard character on both sides before
//!     accepting one, resuming one character later on rejection.
//!
//!     Sentinel protection (./formats/whatsapp/serializer.rs). Markdown →
//!     WhatsApp first swaps bold spans for NUL-delimited placeholders, runs
//!     the italic pass, then restores them. The pass order is load-bearing
//!     and documented in that file.
//!
//!     Pivot derivation (./sync.rs). The session never converts pairwise; it
//!     parses the authoritative buffer to Markdown and serializes that into
//!     targets. Switching input mode materializes the derived text into the
//!     new buffer, so no mode ever resumes from stale contents.
//!
//! Formats
//!
//!     - html: what rich-text editors emit. Import sanitizes NBSP padding and
//!       runs htmd with custom handlers; export runs comrak with hardbreaks
//!       and GFM extensions on by default.
//!     - markdown: the pivot. Parse and serialize are the identity, so there
//!       is no formats/markdown module.
//!     - whatsapp: single-delimiter markup (*bold*, _italic_, ~strike~).
//!       Headings and links cannot be represented and flatten one way.
//!
//! Library Choices
//!
//!     Offload the format heavy lifting to specialized crates and keep this
//!     crate down to glue and span algebra: comrak renders Markdown, htmd
//!     (html5ever underneath, so browser-grade recovery on bad markup)
//!     imports HTML, regex + once_cell drive the span pipelines, arboard
//!     talks to the system clipboard. Nothing shells out.

pub mod clipboard;
pub mod editor;
pub mod error;
pub mod format;
pub mod formats;
pub mod spans;
pub mod sync;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::ConvertError;
pub use format::Format;
pub use formats::html::RenderOptions;
pub use sync::SyncSession;

/// Convert text between two formats through the Markdown pivot.
///
/// Converting a format to itself returns the text verbatim, without a
/// normalizing round trip.
pub fn convert(text: &str, from: Format, to: Format) -> String {
    convert_with(text, from, to, &RenderOptions::default())
}

/// Like [`convert`], with explicit HTML render options.
pub fn convert_with(text: &str, from: Format, to: Format, opts: &RenderOptions) -> String {
    if from == to {
        return text.to_string();
    }
    to.serialize_with(&from.parse(text), opts)
}
