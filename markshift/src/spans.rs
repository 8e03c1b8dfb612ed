//! Guarded inline-span rewriting
//!
//! The WhatsApp-side transducers rewrite spans like `*bold*` only when the
//! delimiters are not adjacent to another copy of the same delimiter
//! character, so `**already strong**` is never re-wrapped and adjacent
//! spans such as `*a* *b*` are both found. The original formulation of
//! that contract is a pair of negative lookarounds; the `regex` engine has
//! no lookaround, so this module reproduces it with explicit neighbor
//! checks around each candidate match.

use regex::Regex;

/// Rewrites every guarded span of `text`.
///
/// `pattern` matches one full span, delimiters included, with the span
/// body in capture group 1, and must never match the empty string. A
/// candidate is accepted when the characters immediately before and after
/// the whole match, and the first and last characters of the body, all
/// differ from `guard`. Accepted bodies are replaced with `render(body)`;
/// rejected candidates resume the scan one character later so a later span
/// sharing a delimiter position is still found.
pub fn rewrite_guarded<F>(text: &str, pattern: &Regex, guard: char, render: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let caps = match pattern.captures_at(text, pos) {
            Some(caps) => caps,
            None => break,
        };
        let whole = caps.get(0).expect("match always carries group 0");
        let body = match caps.get(1) {
            Some(body) => body.as_str(),
            None => break,
        };

        let before_ok = text[..whole.start()].chars().next_back() != Some(guard);
        let after_ok = text[whole.end()..].chars().next() != Some(guard);
        let body_ok = !body.starts_with(guard) && !body.ends_with(guard);

        if before_ok && after_ok && body_ok {
            out.push_str(&text[pos..whole.start()]);
            out.push_str(&render(body));
            pos = whole.end();
        } else {
            // Step past the candidate's first character only; the closing
            // delimiter may open a valid span further on.
            let step = text[whole.start()..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            let resume = whole.start() + step;
            out.push_str(&text[pos..resume]);
            pos = resume;
        }
    }

    out.push_str(&text[pos..]);
    out
}
