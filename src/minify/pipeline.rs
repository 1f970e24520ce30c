//! Minifier composition: protect, rewrite, restore
//!
//! The three stages always run in that order on one in-memory document.
//! A `Minifier` is a plain value with no shared or interior mutability,
//! so independent callers can minify concurrently without coordination.

use crate::minify::literal::{self, ProtectedTag};
use crate::minify::rules;

/// A configured minifier.
///
/// The default configuration protects `<code>` elements only; further
/// literal-preserving tags (e.g. `<pre>`) can be added without touching
/// the rule pipeline:
///
/// ```
/// use htmlslim::Minifier;
///
/// let minifier = Minifier::new().with_protected_tag("pre");
/// let out = minifier.minify("<pre>  two  spaces  </pre>\n<p>  done  </p>");
/// assert!(out.contains("  two  spaces  "));
/// assert!(!out.contains("\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Minifier {
    protected: Vec<ProtectedTag>,
}

impl Default for Minifier {
    fn default() -> Self {
        Self {
            protected: vec![ProtectedTag::default()],
        }
    }
}

impl Minifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag whose element content must survive byte-for-byte.
    pub fn with_protected_tag(mut self, name: &str) -> Self {
        self.protected.push(ProtectedTag::new(name));
        self
    }

    pub fn protected_tags(&self) -> &[ProtectedTag] {
        &self.protected
    }

    /// Minify one document. Total: any UTF-8 input, malformed HTML
    /// included, produces a best-effort rewrite rather than an error.
    pub fn minify(&self, input: &str) -> String {
        let protected = literal::protect(input, &self.protected);
        let rewritten = rules::apply_rules(&protected);
        literal::restore(&rewritten)
    }
}

/// Minify one HTML document with the default configuration.
///
/// ```
/// use htmlslim::minify_document;
///
/// assert_eq!(
///     minify_document("<div>\n\n   <span>x</span>\n</div>"),
///     "<div><span>x</span></div>"
/// );
/// ```
pub fn minify_document(input: &str) -> String {
    Minifier::new().minify(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_content_survives_collapsing() {
        let out = minify_document("<div>\n  <code>hello   world</code>\n</div>");
        assert!(out.contains("hello   world"));
        assert_eq!(out, "<div><code>hello   world</code></div>");
    }

    #[test]
    fn test_code_content_keeps_newlines() {
        let out = minify_document("<p>a</p>\n<code>line1\nline2</code>\n<p>b</p>");
        assert!(out.contains("line1\nline2"));
        assert!(!out.contains("</p>\n"));
    }

    #[test]
    fn test_no_sentinel_leaks() {
        let out = minify_document("<code>x</code><p>\ty\t</p>");
        assert!(!out.contains('\u{e000}'));
    }

    #[test]
    fn test_extra_protected_tag() {
        let minifier = Minifier::new().with_protected_tag("pre");
        let out = minifier.minify("<pre>  a\n  b</pre>");
        assert_eq!(out, "<pre>  a\n  b</pre>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(minify_document(""), "");
    }

    #[test]
    fn test_minifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Minifier>();
    }
}
