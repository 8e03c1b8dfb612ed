//! WhatsApp markup parsing (WhatsApp → Markdown)
//!
//! Three independent single-pass substitutions in fixed order: bold, then
//! italic, then strikethrough. Inline code needs no rule because backtick
//! spans are spelled identically in both formats.

use crate::spans::rewrite_guarded;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));
static ITALIC_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").expect("valid regex"));
static STRIKE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"~(.+?)~").expect("valid regex"));

/// Convert WhatsApp markup to Markdown inline syntax.
///
/// Pure and total. Unmatched delimiters stay verbatim, and a span whose
/// delimiters touch another copy of the same character (`**text**`) is
/// left alone rather than re-escalated.
pub fn to_markdown(text: &str) -> String {
    let text = rewrite_guarded(text, &BOLD_SPAN, '*', |body| format!("**{body}**"));
    let text = rewrite_guarded(&text, &ITALIC_SPAN, '_', |body| format!("*{body}*"));
    rewrite_guarded(&text, &STRIKE_SPAN, '~', |body| format!("~~{body}~~"))
}
