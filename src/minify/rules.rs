//! Ordered rewrite-rule table for the transform pipeline
//!
//! The pipeline is a fixed sequence of (pattern, replacement) pairs applied
//! document-wide with `replace_all`. Order matters: later rules assume the
//! normalized form left by earlier ones (e.g. the inter-tag break removal
//! relies on comments being gone, and the final newline pass relies on the
//! JS-joining rules having already run).
//!
//! Every rule is total: an unmatched pattern is a no-op, never an error, so
//! malformed or partial HTML degrades to an imperfect rewrite instead of a
//! failure.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// The rewrite rules, in execution order.
///
/// Newline characters are deliberately kept alive until the very last rule
/// because they can be significant inside inline `<script>` blocks; the
/// horizontal-whitespace rules therefore match only tabs and spaces.
const REWRITE_RULES: &[(&str, &str)] = &[
    // HTML comments, including multi-line ones
    (r"(?s)<!--.*?-->", ""),
    // Non-space whitespace (tabs, newlines) directly after '>' / before '<'
    (r">[^\S ]+", ">"),
    (r"[^\S ]+<", "<"),
    // Collapse runs of tabs and spaces; newlines survive this rule
    (r"[\t ]+", " "),
    // Leading and trailing horizontal whitespace on every line
    (r"(?m)^[\t ]+", ""),
    (r"(?m)[\t ]+$", ""),
    // Collapse blank-line runs (line breaks interspersed with empty lines)
    (r"[\r\n]+([\t ]?[\r\n]+)+", "\n"),
    // Line breaks sitting directly between tags carry no text
    (r">[\r\n\t ]+<", "><"),
    // Join a JS block terminator with whatever follows across a break.
    // The first pattern shadows the second (it always consumes the break,
    // leaving the comma adjacent), which yields `},` either way; the pair
    // and its order are deliberate, do not swap them.
    (r"\}[\r\n\t ]+", "}"),
    (r"\}[\r\n\t ]+,[\r\n\t ]+", "},"),
    // Join breaks after a function/condition body opener
    (r"\)[\r\n\t ]?\{[\r\n\t ]+", "){"),
    (r",[\r\n\t ]?\{[\r\n\t ]+", ",{"),
    // Join breaks after a call-site line end
    (r"\),[\r\n\t ]+", "),"),
    // Drop quotes around attribute values with no spaces in them; the
    // optional groups borrow one bordering whitespace character on each
    // side so adjacent attributes stay separated. Values containing
    // spaces (URLs with query strings, filenames) never match.
    (
        r#"([\r\n\t ])?([a-zA-Z0-9]+)="([a-zA-Z0-9_/\-]+)"([\r\n\t ])?"#,
        "${1}${2}=${3}${4}",
    ),
    // Space before a self-closing terminator, quoted and unquoted forms
    (r#"" />"#, r#""/>"#),
    (r"' />", "'/>"),
    (r" />", "/>"),
    // Final pass: every surviving line break becomes a single space
    (r"\r?\n|\r", " "),
];

static COMPILED_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    REWRITE_RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("rewrite rule pattern must compile"),
                *replacement,
            )
        })
        .collect()
});

/// Apply the full rule table in declaration order.
///
/// Operates on the protector's output; protected payloads are hex-encoded
/// and marker-delimited, so no rule here can alter them.
pub fn apply_rules(input: &str) -> String {
    let mut doc = input.to_string();
    for (pattern, replacement) in COMPILED_RULES.iter() {
        if let Cow::Owned(rewritten) = pattern.replace_all(&doc, *replacement) {
            doc = rewritten;
        }
    }
    doc
}
