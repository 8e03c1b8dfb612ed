//! HTML parsing (HTML → Markdown import)
//!
//! Built on `htmd` with custom element handlers for the tags whose stock
//! translation does not match what the rest of the pipeline expects: ATX
//! headings, asterisk italics, fenced code blocks and start-aware ordered
//! lists.

use htmd::{Element, HtmlToMarkdown};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between sibling list items while a list is being assembled.
/// The unit separator control byte cannot appear in markup produced by an
/// editor widget, so splitting on it is unambiguous.
const ITEM_SEP: char = '\u{1F}';

static ESCAPED_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\\\.").expect("valid regex"));

/// Normalize HTML before conversion.
///
/// Editor widgets pad their output with non-breaking spaces; both the
/// entity form and the raw U+00A0 character become plain spaces so they
/// do not leak into the Markdown as literal NBSP bytes.
pub fn sanitize(html: &str) -> String {
    html.replace("&nbsp;", " ").replace('\u{A0}', " ")
}

/// Convert HTML to Markdown.
///
/// Pure and total: malformed markup is absorbed by `html5ever`'s
/// recovering parser, and if conversion fails anyway the sanitized input
/// is returned unchanged instead of erroring out.
pub fn to_markdown(html: &str) -> String {
    let html = sanitize(html);
    let converter = build_converter();
    match converter.convert(&html) {
        // The converter escapes literal ordinals ("1." → "1\.") to keep
        // them from reading as list markers; our consumers want the plain
        // text back.
        Ok(markdown) => ESCAPED_ORDINAL
            .replace_all(markdown.trim(), "${1}.")
            .into_owned(),
        Err(err) => {
            log::warn!("html to markdown conversion failed: {err}");
            html
        }
    }
}

fn build_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .add_handler(vec!["h1", "h2", "h3", "h4", "h5", "h6"], heading_handler)
        .add_handler(vec!["li"], list_item_handler)
        .add_handler(vec!["ol"], ordered_list_handler)
        .add_handler(vec!["ul"], unordered_list_handler)
        .add_handler(vec!["del", "s", "strike"], strikethrough_handler)
        .add_handler(vec!["em", "i"], italic_handler)
        .add_handler(vec!["pre"], code_block_handler)
        .build()
}

/// ATX headings at every level, never setext.
fn heading_handler(el: Element) -> Option<String> {
    let level = el
        .tag
        .strip_prefix('h')
        .and_then(|digit| digit.parse::<usize>().ok())
        .unwrap_or(1);
    Some(format!("\n\n{} {}\n\n", "#".repeat(level), el.content.trim()))
}

/// Item bodies are emitted bare with a trailing [`ITEM_SEP`]; the parent
/// list handler adds markers. Continuation lines are indented so
/// multi-line items stay attached to their marker.
fn list_item_handler(el: Element) -> Option<String> {
    let body = el
        .content
        .trim_end()
        .trim_start_matches('\n')
        .replace('\n', "\n    ");
    Some(format!("{body}{ITEM_SEP}"))
}

fn ordered_list_handler(el: Element) -> Option<String> {
    let start = el
        .attrs
        .iter()
        .find(|attr| &*attr.name.local == "start")
        .and_then(|attr| attr.value.parse::<i64>().ok())
        .unwrap_or(1);
    let items: Vec<String> = list_pieces(el.content)
        .enumerate()
        .map(|(i, piece)| format!("{}. {piece}", start.saturating_add(i as i64)))
        .collect();
    Some(format!("\n\n{}\n\n", items.join("\n")))
}

fn unordered_list_handler(el: Element) -> Option<String> {
    let items: Vec<String> = list_pieces(el.content)
        .map(|piece| format!("- {piece}"))
        .collect();
    Some(format!("\n\n{}\n\n", items.join("\n")))
}

fn list_pieces(content: &str) -> impl Iterator<Item = &str> + '_ {
    content
        .split(ITEM_SEP)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

fn strikethrough_handler(el: Element) -> Option<String> {
    Some(format!("~~{}~~", el.content))
}

/// Asterisk delimiters, and empty spans vanish instead of leaving a bare
/// `**` in the output.
fn italic_handler(el: Element) -> Option<String> {
    if el.content.is_empty() {
        return Some(String::new());
    }
    Some(format!("*{}*", el.content))
}

/// Always fenced, never indented.
fn code_block_handler(el: Element) -> Option<String> {
    let mut code = el.content.trim();
    // The inner <code> has already been rendered as an inline span; peel
    // its backticks off before fencing.
    if let Some(stripped) = code.strip_prefix('`').and_then(|c| c.strip_suffix('`')) {
        code = stripped;
    }
    Some(format!("\n\n```\n{code}\n```\n\n"))
}
