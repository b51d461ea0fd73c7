//! Core rewriting engine.
//!
//! ## Module Structure
//!
//! - `marker`: Placeholder grammar and matcher
//! - `parsers`: Go source parser (tree-sitter)
//! - `position`: Call-site resolution and path display
//! - `rewriter`: Call expression walker that schedules literal rewrites
//! - `source_file`: Parsed file with pending rewrites and rendering

pub mod marker;
pub mod parsers;
pub mod position;
pub mod rewriter;
pub mod source_file;

pub use marker::{MarkerGrammar, PlaceholderMatcher};
pub use position::{CallSite, PathStyle};
pub use rewriter::rewrite;
pub use source_file::{RenderError, Rewrite, SourceFile};
