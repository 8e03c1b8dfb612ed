//! HTML format implementation
//!
//! This module implements bidirectional conversion between Markdown and HTML.
//!
//! # Library Choice
//!
//! The two directions use different engines because each side of the
//! conversion has a clear best-in-class crate:
//!
//! - `comrak` (Markdown → HTML): CommonMark + GFM reference implementation
//!   for Rust. Battle-tested, spec-compliant, and already the engine behind
//!   every Markdown pipeline in this workspace.
//! - `htmd` (HTML → Markdown): turndown-style converter built on
//!   `html5ever`, which means browser-grade parsing of malformed markup.
//!   Custom element handlers let us override exactly the tags whose default
//!   translation does not fit (see the mapping table below).
//!
//! # Element Mapping Table
//!
//! HTML → Markdown (import). Handlers marked `custom` are registered on the
//! converter; everything else uses `htmd`'s defaults.
//!
//! | HTML Element       | Markdown Output            | Handler | Notes                                   |
//! |--------------------|----------------------------|---------|-----------------------------------------|
//! | `<h1>`..`<h6>`     | `#`..`######` heading      | custom  | ATX style, never setext                 |
//! | `<strong>`, `<b>`  | `**bold**`                 | default |                                         |
//! | `<em>`, `<i>`      | `*italic*`                 | custom  | Asterisk delimiter; empty spans dropped |
//! | `<del>`, `<s>`, `<strike>` | `~~strike~~`       | custom  | GFM strikethrough                       |
//! | `<ol>`             | `1. item` numbered list    | custom  | Honors the `start` attribute            |
//! | `<ul>`             | `- item` bulleted list     | custom  | Dash bullets                            |
//! | `<li>`             | list item body             | custom  | Indents continuation lines              |
//! | `<pre>`            | fenced code block          | custom  | Always fenced, never indented           |
//! | `<code>`           | `` `code` ``               | default |                                         |
//! | `<a href>`         | `[text](url)`              | default |                                         |
//! | `<blockquote>`     | `> quote`                  | default |                                         |
//!
//! # Lossy Conversions
//!
//! - `&nbsp;` and U+00A0 are normalized to plain spaces before parsing, so
//!   non-breaking spaces do not round-trip.
//! - Rendering (`render`) is tunable through [`RenderOptions`]; importing
//!   back is not, so exotic render settings may not reproduce the source.

pub mod parser;
pub mod serializer;

pub use parser::{sanitize, to_markdown};
pub use serializer::{render, to_html, RenderOptions};
