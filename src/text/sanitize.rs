//! Typographic punctuation normalization.
//!
//! Form input pasted from word processors is full of curly quotes and
//! dashes. They are folded onto plain ASCII before anything is measured so
//! the width the wrapper sees is the width the page gets.

const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{201C}', "\""),  // left double quotation mark
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "--"),  // em dash
    ('\u{2026}', "..."), // horizontal ellipsis
    ('\u{2022}', "*"),   // bullet, redrawn natively by the bullet drawer
];

/// Replace smart punctuation with plain equivalents.
///
/// Idempotent: sanitizing sanitized text is a no-op.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}
