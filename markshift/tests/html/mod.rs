//! HTML format tests
//!
//! Tests for bidirectional HTML ↔ Markdown conversion.

mod export;
mod import;
