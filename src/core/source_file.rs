//! A parsed Go file together with its pending literal rewrites.

use std::{
    fmt,
    ops::Range,
    path::PathBuf,
};

use tree_sitter::Tree;

use super::parsers::go::{SyntaxError, parse_go_source};

/// One placeholder literal scheduled for replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Byte range of the literal in the original source.
    pub range: Range<usize>,
    /// Line of the literal token (1-indexed).
    pub line: usize,
    /// Column of the literal token (1-indexed, bytes).
    pub col: usize,
    /// Line the enclosing call expression starts on.
    pub call_line: usize,
    /// Raw literal text before the rewrite, quotes included.
    pub original: String,
    /// Raw literal text after the rewrite, quotes included.
    pub replacement: String,
    /// Full source line containing the literal, for display.
    pub source_line: String,
}

/// Rendering a mutated file back to text failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct SourceFile {
    path: PathBuf,
    display_path: String,
    source: String,
    tree: Tree,
    rewrites: Vec<Rewrite>,
}

impl SourceFile {
    /// Parse `code` as the contents of `path`.
    ///
    /// `display_path` is the path written into replacement literals.
    pub fn parse(
        path: impl Into<PathBuf>,
        display_path: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, SyntaxError> {
        let path = path.into();
        let parsed = parse_go_source(code, &path.to_string_lossy())?;
        Ok(Self {
            path,
            display_path: display_path.into(),
            source: parsed.source,
            tree: parsed.tree,
            rewrites: Vec::new(),
        })
    }

    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// True once at least one rewrite has been recorded.
    pub fn is_dirty(&self) -> bool {
        !self.rewrites.is_empty()
    }

    pub fn into_rewrites(self) -> Vec<Rewrite> {
        self.rewrites
    }

    pub(crate) fn extend_rewrites(&mut self, rewrites: impl IntoIterator<Item = Rewrite>) {
        self.rewrites.extend(rewrites);
    }

    /// Render the source with every recorded rewrite applied.
    ///
    /// Text outside the replaced literals is copied unchanged. The result is
    /// parsed again and rejected if it is no longer valid Go.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut edits: Vec<&Rewrite> = self.rewrites.iter().collect();
        edits.sort_by_key(|r| r.range.start);

        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for edit in edits {
            let Range { start, end } = edit.range;
            if start < cursor {
                return Err(RenderError(format!(
                    "overlapping rewrites at {}:{}",
                    edit.line, edit.col
                )));
            }
            if end > self.source.len()
                || start > end
                || !self.source.is_char_boundary(start)
                || !self.source.is_char_boundary(end)
            {
                return Err(RenderError(format!(
                    "rewrite at {}:{} is outside the source text",
                    edit.line, edit.col
                )));
            }
            out.push_str(&self.source[cursor..start]);
            out.push_str(&edit.replacement);
            cursor = end;
        }
        out.push_str(&self.source[cursor..]);

        parse_go_source(out.as_str(), &self.path.to_string_lossy())
            .map_err(|e| RenderError(format!("rewritten source does not parse: {}", e)))?;

        Ok(out)
    }
}
