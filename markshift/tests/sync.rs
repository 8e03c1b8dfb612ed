//! Session-level tests for mode synchronization
//!
//! These walk a `SyncSession` through realistic mode sequences; the
//! per-operation edge cases live in the unit tests next to the session.

use markshift::{convert, convert_with, Format, RenderOptions, SyncSession};

#[test]
fn test_editor_to_chat_walkthrough() {
    // HTML in the editor, read back as WhatsApp text.
    let mut session = SyncSession::with_modes(Format::Html, Format::Whatsapp);
    session.set_input("<h2>Standup</h2><p><b>Done:</b> reviewed the <i>parser</i>.</p>");
    let output = session.output();
    assert!(output.contains("*Standup*"), "Got: {output}");
    assert!(output.contains("*Done:*"), "Got: {output}");
    assert!(output.contains("_parser_"), "Got: {output}");
}

#[test]
fn test_mode_walk_preserves_meaning() {
    let mut session = SyncSession::with_modes(Format::Html, Format::Markdown);
    session.set_input("<i>a</i>");

    session.set_input_mode(Format::Markdown);
    assert_eq!(session.input(), "*a*");

    session.set_input_mode(Format::Whatsapp);
    assert_eq!(session.input(), "_a_");

    session.set_input_mode(Format::Html);
    assert!(session.input().contains("<em>a</em>"));
}

#[test]
fn test_output_follows_edits_immediately() {
    let mut session = SyncSession::with_modes(Format::Markdown, Format::Whatsapp);
    session.set_input("**one**");
    assert_eq!(session.output(), "*one*");
    session.set_input("**two**");
    assert_eq!(session.output(), "*two*");
}

#[test]
fn test_output_mode_can_change_without_touching_input() {
    let mut session = SyncSession::with_modes(Format::Markdown, Format::Markdown);
    session.set_input("## Section");
    session.set_output_mode(Format::Whatsapp);
    assert_eq!(session.output(), "*Section*");
    session.set_output_mode(Format::Html);
    assert!(session.output().contains("<h2>Section</h2>"));
    assert_eq!(session.input(), "## Section");
}

// ============================================================================
// PUBLIC CONVERT API
// ============================================================================

#[test]
fn test_bold_survives_html_to_whatsapp() {
    assert_eq!(convert("<b>hi</b>", Format::Html, Format::Whatsapp), "*hi*");
}

#[test]
fn test_whatsapp_bold_to_markdown() {
    assert_eq!(
        convert("*hi*", Format::Whatsapp, Format::Markdown),
        "**hi**"
    );
}

#[test]
fn test_identity_conversion_short_circuits() {
    // Verbatim, including whitespace a round trip would normalize.
    let text = "  raw **text**  ";
    assert_eq!(convert(text, Format::Markdown, Format::Markdown), text);
}

#[test]
fn test_empty_input_stays_empty_for_every_pair() {
    for from in Format::ALL {
        for to in Format::ALL {
            assert_eq!(convert("", from, to), "", "{from} -> {to}");
        }
    }
}

#[test]
fn test_convert_with_honors_render_options() {
    let opts = RenderOptions {
        hardbreaks: false,
        gfm: true,
    };
    assert!(!convert_with("a\nb", Format::Markdown, Format::Html, &opts).contains("<br"));
    assert!(convert("a\nb", Format::Markdown, Format::Html).contains("<br"));
}
