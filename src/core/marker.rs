//! Placeholder literal recognition.
//!
//! A placeholder is a Go string literal whose content has the shape
//! `[<path>.go:<line>]`, for example `"[placeholder.go:0]"`. The marker
//! grammar (extension, delimiters, separator) is configurable so the same
//! matcher can recognise markers written for other conventions.

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shortest raw literal worth inspecting (quotes, brackets, path, colon, digit).
pub const MIN_LITERAL_LEN: usize = 7;

/// Characters allowed in the path part of a marker.
const PATH_CLASS: &str = r"[A-Za-z0-9_\-.\\/]+";

/// Tokens that make up a location marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerGrammar {
    /// File extension the marker path must end with (without the dot).
    pub extension: String,
    pub open: char,
    pub close: char,
    /// Character between the path and the line number.
    pub separator: char,
}

impl Default for MarkerGrammar {
    fn default() -> Self {
        Self {
            extension: "go".to_string(),
            open: '[',
            close: ']',
            separator: ':',
        }
    }
}

impl MarkerGrammar {
    /// Validate the grammar tokens.
    ///
    /// Delimiters may not be quotes, backslashes, whitespace or alphanumeric,
    /// since any of those would make the produced literal ambiguous or invalid.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty()
            || !self
                .extension
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            bail!("Invalid marker extension: \"{}\"", self.extension);
        }

        for (name, c) in [
            ("open", self.open),
            ("close", self.close),
            ("separator", self.separator),
        ] {
            if matches!(c, '"' | '`' | '\\') || c.is_whitespace() || c.is_alphanumeric() {
                bail!("Invalid marker {} delimiter: {:?}", name, c);
            }
        }

        if self.open == self.close {
            bail!(
                "Marker open and close delimiters must differ (both are {:?})",
                self.open
            );
        }

        Ok(())
    }

    /// Build the raw replacement literal for a call site, quotes included.
    ///
    /// Backslashes and double quotes in `path` are escaped so the result is
    /// always a valid Go interpreted string literal.
    pub fn format(&self, path: &str, line: usize) -> String {
        let mut out = String::with_capacity(path.len() + 16);
        out.push('"');
        out.push(self.open);
        for c in path.chars() {
            if matches!(c, '"' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(self.separator);
        out.push_str(&line.to_string());
        out.push(self.close);
        out.push('"');
        out
    }
}

/// Decides whether a raw string literal is a location placeholder.
#[derive(Debug, Clone)]
pub struct PlaceholderMatcher {
    grammar: MarkerGrammar,
    pattern: Regex,
}

impl PlaceholderMatcher {
    pub fn new(grammar: &MarkerGrammar) -> Result<Self> {
        grammar.validate()?;

        let source = format!(
            r#"^["`]{open}{path}\.{ext}{sep}[0-9]+{close}["`]$"#,
            open = regex::escape(&grammar.open.to_string()),
            path = PATH_CLASS,
            ext = regex::escape(&grammar.extension),
            sep = regex::escape(&grammar.separator.to_string()),
            close = regex::escape(&grammar.close.to_string()),
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to compile marker pattern: {}", source))?;

        Ok(Self {
            grammar: grammar.clone(),
            pattern,
        })
    }

    pub fn grammar(&self) -> &MarkerGrammar {
        &self.grammar
    }

    /// Check a raw literal, delimiting quotes included.
    ///
    /// The delimiters must sit right inside the quotes and the whole literal
    /// must have the marker shape; marker-like substrings elsewhere in a
    /// longer string are not accepted.
    pub fn matches(&self, raw: &str) -> bool {
        if raw.len() < MIN_LITERAL_LEN {
            return false;
        }
        if raw.chars().nth(1) != Some(self.grammar.open)
            || raw.chars().rev().nth(1) != Some(self.grammar.close)
        {
            return false;
        }
        self.pattern.is_match(raw)
    }
}
