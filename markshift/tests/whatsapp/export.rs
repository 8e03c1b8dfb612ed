//! Export tests for the WhatsApp format (Markdown → WhatsApp)
//!
//! These tests run the whole ordered pipeline over a full document; the
//! per-rule edge cases live in the unit tests next to the serializer.

use insta::assert_snapshot;
use markshift::formats::whatsapp;
use std::path::PathBuf;

/// Helper to read a Markdown fixture document
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_mixed_emphasis_line() {
    assert_eq!(
        whatsapp::from_markdown("**b** and *i* and ~~s~~"),
        "*b* and _i_ and ~s~"
    );
}

#[test]
fn test_heading_with_inline_marks() {
    // Inline marks inside a flattened heading keep their converted form;
    // the heading itself becomes one more bold wrapper.
    assert_eq!(
        whatsapp::from_markdown("## Status: **green**"),
        "*Status: *green**"
    );
}

#[test]
fn test_kitchensink_export() {
    let wa = whatsapp::from_markdown(&load_fixture("kitchensink.md"));
    assert_snapshot!(wa.trim_end(), @r###"
    *Kitchen Sink*

    Plain paragraph with *bold*, _italic_ and ~struck~ spans.

    *Links*

    Read the docs (https://docs.example.test) for details.

    *Lists*

    - alpha
    - beta

    1. one
    2. two

    *Code*

    ```
    let x = 1;
    ```
    "###);
}
