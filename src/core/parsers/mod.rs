//! Source file parsers.
//!
//! - `go`: Go source parser (uses tree-sitter-go for syntax trees)

pub mod go;
