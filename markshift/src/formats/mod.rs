//! Format implementations
//!
//! Each format converts to and from the Markdown pivot: `parser.rs` maps
//! format text to Markdown, `serializer.rs` maps Markdown to format text.
//! Markdown itself needs neither, since its conversions are the identity;
//! they live directly on [`crate::Format`].

pub mod html;
pub mod whatsapp;
