//! WhatsApp markup format
//!
//! WhatsApp formats messages with single-character inline delimiters and
//! has no block structure at all, which makes both directions lossy in
//! different ways.
//!
//! # Element Mapping Table
//!
//! | WhatsApp       | Markdown            | Notes                                     |
//! |----------------|---------------------|-------------------------------------------|
//! | `*bold*`       | `**bold**`          | Guarded: doubled stars never re-escalated |
//! | `_italic_`     | `*italic*`          | Guarded both directions                   |
//! | `~strike~`     | `~~strike~~`        | Guarded: `~~` stays as-is inbound         |
//! | `` `code` ``   | `` `code` ``        | Identical syntax, passes through          |
//! | (none)         | `# Heading`         | Outbound only: flattened to `*Heading*`   |
//! | (none)         | `[text](url)`       | Outbound only: rewritten to `text (url)`  |
//!
//! Headings, links, images, and nested structure cannot be represented in
//! WhatsApp markup; the Markdown → WhatsApp direction flattens them to
//! plain text and never round-trips.

pub mod parser;
pub mod serializer;

pub use parser::to_markdown;
pub use serializer::from_markdown;
