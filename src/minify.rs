//! HTML minification engine
//!
//! Control flow per document: protect literal regions, run the ordered
//! rewrite rules, restore the literals. All three stages are pure
//! functions over one in-memory string; nothing persists across calls.

pub mod literal;
pub mod pipeline;
pub mod report;
pub mod rules;

pub use literal::ProtectedTag;
pub use pipeline::{minify_document, Minifier};
pub use report::MinifyReport;
