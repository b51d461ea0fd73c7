//! callsite - fills in call-site location placeholders in Go sources
//!
//! A placeholder is a string literal such as `"[placeholder.go:0]"` passed as
//! an argument to a call. callsite walks a tree of Go files and rewrites each
//! placeholder to the path and line where its call expression begins, for
//! example `"[pkg/x.go:42]"`. Runs are idempotent: files whose placeholders
//! are already correct are never written.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Placeholder matching, position resolution and rewriting
//! - `outcome`: Structured per-file results and run summary
//! - `pipeline`: Per-file read/parse/rewrite/write pipeline
//! - `scanner`: Source tree traversal

pub mod cli;
pub mod config;
pub mod core;
pub mod outcome;
pub mod pipeline;
pub mod scanner;
