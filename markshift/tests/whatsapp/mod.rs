//! WhatsApp format tests
//!
//! Tests for bidirectional WhatsApp ↔ Markdown conversion.

mod export;
mod import;
