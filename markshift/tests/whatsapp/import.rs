//! Import tests for the WhatsApp format (WhatsApp → Markdown)
//!
//! These tests verify the guarded span rewriting on whole documents; the
//! per-span edge cases live in the unit tests next to the parser.

use insta::assert_snapshot;
use markshift::formats::whatsapp;
use std::path::PathBuf;

/// Helper to read a WhatsApp fixture document
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_all_three_span_kinds() {
    assert_eq!(
        whatsapp::to_markdown("*b* _i_ ~s~"),
        "**b** *i* ~~s~~"
    );
}

#[test]
fn test_spans_convert_per_line() {
    assert_eq!(
        whatsapp::to_markdown("*one*\n*two*"),
        "**one**\n**two**"
    );
}

#[test]
fn test_kitchensink_import() {
    let markdown = whatsapp::to_markdown(&load_fixture("kitchensink.wa"));
    assert_snapshot!(markdown.trim_end(), @r###"
    **Launch Update**

    The rollout is *on track* for ~~Friday~~ Monday.

    **Checklist**

    - ship it
    - tell *everyone* now
    "###);
}
