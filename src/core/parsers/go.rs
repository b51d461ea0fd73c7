use std::fmt;

use tree_sitter::{Node, Parser, Tree};

/// Extension of the files this parser understands.
pub const GO_EXTENSION: &str = "go";

/// First syntax error found in a Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Line number (1-indexed), or 0 when the error has no position.
    pub line: usize,
    /// Column number (1-indexed, bytes).
    pub col: usize,
    pub message: String,
}

impl SyntaxError {
    fn without_position(message: impl Into<String>) -> Self {
        Self {
            line: 0,
            col: 0,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} at {}:{}", self.message, self.line, self.col)
        }
    }
}

#[derive(Debug)]
pub struct ParsedGo {
    pub source: String,
    pub tree: Tree,
}

/// Parse Go source code into a syntax tree.
///
/// tree-sitter recovers from errors; a tree containing any error or missing
/// node is rejected here so that only well-formed files are ever rewritten.
pub fn parse_go_source(code: impl Into<String>, file_path: &str) -> Result<ParsedGo, SyntaxError> {
    let source = code.into();

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| SyntaxError::without_position(format!("Failed to load Go grammar: {}", e)))?;

    let tree = parser.parse(&source, None).ok_or_else(|| {
        SyntaxError::without_position(format!("Failed to parse go file: {}", file_path))
    })?;

    if let Some(node) = first_error(tree.root_node()) {
        let position = node.start_position();
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            "syntax error".to_string()
        };
        return Err(SyntaxError {
            line: position.row + 1,
            col: position.column + 1,
            message,
        });
    }

    Ok(ParsedGo { source, tree })
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
