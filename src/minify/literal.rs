//! Literal region protection and restoration
//!
//! Whitespace inside `<code>` (and any other configured tag) is
//! semantically significant, so matching regions are swapped out for
//! opaque placeholders before the rewrite rules run and swapped back in
//! afterwards. A placeholder is `MARKER + hex(snippet) + MARKER`; the hex
//! alphabet contains no whitespace, quotes, braces or angle brackets, so
//! no rewrite rule can touch a payload, and the round trip is
//! byte-lossless.
//!
//! Matching is single-level by design: the region's content may not
//! contain a raw `<`, so a code block holding further markup is not
//! protected. This is a text-level pattern, not an HTML parse, and the
//! limitation is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder delimiter. Tag-shaped so the tag-adjacent whitespace rules
/// collapse around placeholders exactly as they do around real elements;
/// the private-use-area character inside cannot appear in legitimate HTML,
/// so the sentinel never collides with document content.
const MARKER: &str = "<\u{e000}>";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{m}(?P<payload>[0-9a-f]*){m}",
        m = regex::escape(MARKER)
    ))
    .expect("placeholder pattern must compile")
});

/// A tag whose element content is preserved byte-for-byte.
///
/// The match covers the whole element: opening tag (attributes allowed),
/// content up to but not including a nested `<`, closing tag.
#[derive(Debug, Clone)]
pub struct ProtectedTag {
    name: String,
    pattern: Regex,
}

impl ProtectedTag {
    pub fn new(name: &str) -> Self {
        let escaped = regex::escape(name);
        let pattern = Regex::new(&format!("<{escaped}([^>]+)?>[^<]*</{escaped}>"))
            .expect("protected tag pattern must compile");
        Self {
            name: name.to_string(),
            pattern,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ProtectedTag {
    fn default() -> Self {
        Self::new("code")
    }
}

/// Replace every protected region with a placeholder token.
///
/// Replacement is by value: if the same exact snippet occurs more than
/// once, all occurrences collapse to the same placeholder, which is sound
/// because the content is byte-identical at each site. No match returns
/// the input unchanged.
pub fn protect(input: &str, tags: &[ProtectedTag]) -> String {
    let mut doc = input.to_string();
    for tag in tags {
        let snippets: Vec<String> = tag
            .pattern
            .find_iter(&doc)
            .map(|m| m.as_str().to_string())
            .collect();
        for snippet in snippets {
            let placeholder = format!("{MARKER}{}{MARKER}", hex::encode(&snippet));
            doc = doc.replace(&snippet, &placeholder);
        }
    }
    doc
}

/// Decode every placeholder token back to its original snippet.
///
/// A payload that no longer decodes (mangled upstream) is kept as bare
/// text; afterwards any orphaned marker is stripped so the sentinel never
/// leaks into the output.
pub fn restore(input: &str) -> String {
    let restored = PLACEHOLDER.replace_all(input, |caps: &regex::Captures| {
        let payload = &caps["payload"];
        match hex::decode(payload).ok().and_then(|b| String::from_utf8(b).ok()) {
            Some(snippet) => snippet,
            None => payload.to_string(),
        }
    });
    if restored.contains(MARKER) {
        restored.replace(MARKER, "")
    } else {
        restored.into_owned()
    }
}
