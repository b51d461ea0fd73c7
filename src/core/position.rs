//! Call-site position resolution.

use std::path::{Component, Path};

use anyhow::{Context, Result};
use tree_sitter::Node;

/// Location a placeholder should be rewritten to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CallSite {
    /// Path as it appears inside the replacement literal.
    pub path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

/// Resolve where a node starts.
///
/// Called with the call expression rather than the literal, so an argument on
/// the third line of a multi-line call still reports the line the call
/// begins on.
pub fn resolve(node: Node<'_>, display_path: &str) -> CallSite {
    CallSite {
        path: display_path.to_string(),
        line: node.start_position().row + 1,
    }
}

/// How file paths are written into replacement literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStyle {
    /// Use the canonical absolute path instead of the traversal path.
    pub absolute: bool,
    /// Number of leading characters to drop from the path.
    pub strip_prefix: usize,
}

impl PathStyle {
    /// Compute the display path for a file found during traversal.
    pub fn display_path(&self, path: &Path) -> Result<String> {
        let normalized = if self.absolute {
            let absolute = path
                .canonicalize()
                .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
            normalize(&absolute)
        } else {
            normalize(path)
        };
        Ok(strip_prefix(&normalized, self.strip_prefix))
    }
}

/// Join path components with `/`, dropping `.` components.
fn normalize(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy());
                continue;
            }
            Component::ParentDir => out.push_str(".."),
            Component::Normal(part) => out.push_str(&part.to_string_lossy()),
        }
        out.push('/');
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

fn strip_prefix(path: &str, count: usize) -> String {
    let stripped: String = path.chars().skip(count).collect();
    if stripped.is_empty() {
        path.to_string()
    } else {
        stripped
    }
}
