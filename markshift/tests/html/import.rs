//! Import tests for the HTML format (HTML → Markdown)
//!
//! These tests verify that editor-produced HTML converts into the Markdown
//! the rest of the pipeline expects: ATX headings, asterisk emphasis, GFM
//! strikethrough, dash bullets and start-aware ordered lists.

use markshift::formats::html;
use markshift::Format;
use std::path::PathBuf;

/// Helper to read an HTML fixture document
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_heading_and_emphasis() {
    let md = html::to_markdown("<h2>Title</h2><p><b>bold</b> and <i>italic</i></p>");
    assert!(md.contains("## Title"), "Expected ATX heading, got: {md}");
    assert!(md.contains("**bold**"));
    assert!(md.contains("*italic*"));
}

#[test]
fn test_nbsp_is_normalized_before_conversion() {
    let md = html::to_markdown("<p>one&nbsp;two\u{A0}three</p>");
    assert_eq!(md, "one two three");
}

#[test]
fn test_parse_dispatch_goes_through_sanitizer() {
    // Format::parse and the module function must agree.
    let page = "<p>a&nbsp;b</p>";
    assert_eq!(Format::Html.parse(page), html::to_markdown(page));
}

#[test]
fn test_ordered_list_keeps_its_offset() {
    let md = html::to_markdown(r#"<ol start="3"><li>gamma</li><li>delta</li></ol>"#);
    assert_eq!(md, "3. gamma\n4. delta");
}

#[test]
fn test_nested_list_items_stay_attached() {
    let md = html::to_markdown("<ul><li>outer<ul><li>inner</li></ul></li></ul>");
    assert!(md.contains("- outer"), "Expected outer item, got: {md}");
    assert!(md.contains("- inner"), "Expected inner item, got: {md}");
}

#[test]
fn test_kitchensink_import() {
    let md = html::to_markdown(&load_fixture("kitchensink.html"));

    // Block structure
    assert!(md.contains("# Kitchen Sink"));
    assert!(md.contains("## Lists"));
    assert!(md.contains("- alpha"));
    assert!(md.contains("- beta"));
    assert!(md.contains("3. gamma"));
    assert!(md.contains("4. delta"));
    assert!(md.contains("```\nlet x = 1;\n```"));

    // Inline spans
    assert!(md.contains("**bold**"));
    assert!(md.contains("*italic*"));
    assert!(md.contains("~~struck~~"));
    assert!(md.contains("[docs](https://docs.example.test)"));
}

#[test]
fn test_malformed_markup_still_converts() {
    // html5ever recovers from unclosed tags; the converter must not error.
    let md = html::to_markdown("<p><b>unclosed");
    assert!(md.contains("**unclosed**"), "Got: {md}");
}
