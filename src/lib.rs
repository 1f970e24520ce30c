//! # htmlslim
//!
//! A whitespace-safe minifier for HTML response bodies.
//!
//! Given a full HTML document, `htmlslim` strips comments, collapses
//! whitespace, removes redundant line breaks and drops safe-to-omit
//! attribute quoting, while never corrupting embedded literal regions
//! (`<code>` by default) whose whitespace is significant. It is a
//! text-level rewriter, not an HTML parser: malformed or partial input
//! degrades to a best-effort rewrite and never produces an error.
//!
//! Deciding *whether* to minify (content types, streaming, debug mode)
//! belongs to the caller; this crate only transforms the text it is
//! given.
//!
//! ```
//! use htmlslim::minify_document;
//!
//! let out = minify_document("<p>a</p><!-- note -->\n<code>a   b</code>");
//! assert_eq!(out, "<p>a</p><code>a   b</code>");
//! ```

pub mod minify;

pub use minify::{minify_document, Minifier, MinifyReport, ProtectedTag};
