//! Export tests for the HTML format (Markdown → HTML)
//!
//! These tests verify comrak rendering with the crate's default options:
//! hardbreaks on, GFM tables/strikethrough/autolinks on.

use markshift::formats::html::{render, to_html, RenderOptions};
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
fn test_inline_spans_render() {
    let html = to_html("**b** *i* ~~s~~ `c`");
    assert!(html.contains("<strong>b</strong>"));
    assert!(html.contains("<em>i</em>"));
    assert!(html.contains("<del>s</del>"));
    assert!(html.contains("<code>c</code>"));
}

#[test]
fn test_heading_levels_render() {
    let html = to_html("# One\n\n###### Six");
    assert!(html.contains("<h1>One</h1>"));
    assert!(html.contains("<h6>Six</h6>"));
}

#[test]
fn test_single_newline_is_a_hard_break_by_default() {
    assert!(to_html("first\nsecond").contains("<br"));
}

#[test]
fn test_soft_break_mode() {
    let opts = RenderOptions {
        hardbreaks: false,
        ..Default::default()
    };
    let html = render("first\nsecond", &opts);
    assert!(!html.contains("<br"));
    assert!(html.contains("first"));
    assert!(html.contains("second"));
}

#[test]
fn test_gfm_off_leaves_tildes_alone() {
    let opts = RenderOptions {
        gfm: false,
        ..Default::default()
    };
    assert!(!render("~~s~~", &opts).contains("<del>"));
}

#[test]
fn test_kitchensink_export() {
    let html = to_html(&load_fixture("kitchensink.md"));

    assert!(html.contains("<h1>Kitchen Sink</h1>"));
    assert!(html.contains("<h2>Lists</h2>"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>italic</em>"));
    assert!(html.contains("<del>struck</del>"));
    assert!(html.contains("<li>alpha</li>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<pre><code>let x = 1;"));
    assert!(html.contains(r#"<a href="https://docs.example.test">docs</a>"#));
}
