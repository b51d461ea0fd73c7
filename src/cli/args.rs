//! CLI argument definitions using clap.
//!
//! `callsite` has a single mode of operation: walk a source root and rewrite
//! placeholder literals in place. `--check` turns it into a dry run.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source directory or single Go file
    #[arg(short, long, default_value = "./")]
    pub src: PathBuf,

    /// Directory names to skip, comma separated (e.g. vendor,testdata)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Number of leading characters to strip from paths written into literals
    /// (overrides config file)
    #[arg(long)]
    pub strip_prefix: Option<usize>,

    /// Write absolute paths into literals
    #[arg(long)]
    pub absolute: bool,

    /// Report pending rewrites without modifying any file
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Exclusion names given on the command line, trimmed, empties dropped.
    pub fn exclusions(&self) -> impl Iterator<Item = String> + '_ {
        self.exclude
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
    }
}
