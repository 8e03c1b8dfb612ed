//! WhatsApp markup serialization (Markdown → WhatsApp)
//!
//! Ordered regex pipeline. The ordering is load-bearing: bold spans are
//! protected behind sentinels before the italic pass runs, otherwise the
//! italic rule would consume the inner asterisks of `**bold**`, and bold
//! is restored before headings flatten so heading text keeps its inline
//! marks.

use crate::spans::rewrite_guarded;
use once_cell::sync::Lazy;
use regex::Regex;

// Sentinels wrapping protected bold spans while italics convert. The NUL
// bytes cannot occur in text produced by an editor widget, so the wrapper
// never collides with user content.
const BOLD_OPEN: &str = "\u{0}B\u{0}";
const BOLD_CLOSE: &str = "\u{0}/B\u{0}";

static STAR_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static UNDERSCORE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid regex"));
static ITALIC_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));
static PROTECTED_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{0}B\u{0}(.+?)\u{0}/B\u{0}").expect("valid regex"));
static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").expect("valid regex"));
static STRIKE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").expect("valid regex"));
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("valid regex"));

/// Convert Markdown to WhatsApp markup.
///
/// Pure and total. Headings and links cannot be expressed in WhatsApp
/// markup: headings flatten to bold lines and links to `text (url)`, both
/// deliberate one-way simplifications.
pub fn from_markdown(markdown: &str) -> String {
    let protected = format!("{BOLD_OPEN}${{1}}{BOLD_CLOSE}");

    // 1. Protect both bold spellings so the italic pass cannot see them.
    let text = STAR_BOLD.replace_all(markdown, protected.as_str());
    let text = UNDERSCORE_BOLD.replace_all(&text, protected.as_str());

    // 2. Remaining single-star spans are italics.
    let text = rewrite_guarded(&text, &ITALIC_SPAN, '*', |body| format!("_{body}_"));

    // 3. Restore bold with WhatsApp's single-star delimiter.
    let text = PROTECTED_BOLD.replace_all(&text, "*${1}*");

    // 4. WhatsApp has no headings; flatten each to a bold line.
    let text = HEADING_LINE.replace_all(&text, "*${1}*");

    // 5. Double-tilde strikethrough becomes single-tilde.
    let text = STRIKE_SPAN.replace_all(&text, "~${1}~");

    // 6. No hyperlink syntax either; keep the URL visible inline.
    LINK.replace_all(&text, "${1} (${2})").into_owned()
}
