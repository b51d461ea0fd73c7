use std::{
    collections::HashSet,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::{core::parsers::go::GO_EXTENSION, outcome::ScanError};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Go files in traversal order.
    pub files: Vec<PathBuf>,
    /// Directories that could not be read.
    pub errors: Vec<ScanError>,
}

/// Collect the Go files under `root`.
///
/// A file root is returned on its own (if it is a Go file) without applying
/// any exclusion. For a directory root, hidden directories and directories
/// whose base name is in `excludes` are not descended into; unreadable
/// directories are recorded and the walk continues with their siblings.
///
/// Fails only if `root` itself cannot be accessed.
pub fn scan_files(root: &Path, excludes: &HashSet<String>) -> Result<ScanResult> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Cannot access source root: {}", root.display()))?;

    if !metadata.is_dir() {
        let files = if is_scannable_file(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        };
        return Ok(ScanResult {
            files,
            errors: Vec::new(),
        });
    }

    let mut result = ScanResult::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, excludes));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let message = match e.io_error() {
                    Some(io) => io.to_string(),
                    None => e.to_string(),
                };
                result.errors.push(ScanError { path, message });
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && is_scannable_file(entry.path()) {
            result.files.push(entry.into_path());
        }
    }

    Ok(result)
}

fn is_skipped_dir(entry: &DirEntry, excludes: &HashSet<String>) -> bool {
    // The root is always walked, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    is_hidden(entry.file_name()) || excludes.contains(entry.file_name().to_string_lossy().as_ref())
}

fn is_hidden(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') && name != "." && name != ".."
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(GO_EXTENSION)
}
