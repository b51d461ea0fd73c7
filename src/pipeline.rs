//! Per-file rewrite pipeline.
//!
//! read → parse → rewrite → (if dirty) render → write.
//!
//! Files that need no rewrite are never opened for writing, so their content
//! and modification time stay untouched. Any failure is captured in the
//! file's [`FileReport`] and the batch carries on with the next file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    core::{PathStyle, PlaceholderMatcher, SourceFile, rewrite},
    outcome::{FileError, FileReport, FileStatus},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Write rewritten files back; when false, only report pending rewrites.
    pub apply: bool,
    pub path_style: PathStyle,
}

/// Run the pipeline on a single file.
pub fn process_file(
    path: &Path,
    matcher: &PlaceholderMatcher,
    options: &PipelineOptions,
) -> FileReport {
    let path_buf = path.to_path_buf();

    let display_path = match options.path_style.display_path(path) {
        Ok(p) => p,
        Err(e) => {
            let fallback = path.display().to_string();
            return FileReport::errored(path_buf, fallback, FileError::Read(e.to_string()));
        }
    };

    let code = match fs::read_to_string(path) {
        Ok(code) => code,
        Err(e) => return FileReport::errored(path_buf, display_path, FileError::Read(e.to_string())),
    };

    let mut file = match SourceFile::parse(path, display_path.as_str(), code) {
        Ok(file) => file,
        Err(e) => return FileReport::errored(path_buf, display_path, e.into()),
    };

    if !rewrite(&mut file, matcher) {
        return FileReport::unchanged(path_buf, display_path);
    }

    if !options.apply {
        return FileReport {
            path: path_buf,
            display_path,
            rewrites: file.into_rewrites(),
            status: FileStatus::Pending,
        };
    }

    let rendered = match file.render() {
        Ok(text) => text,
        Err(e) => return FileReport::errored(path_buf, display_path, e.into()),
    };

    // Writing through the existing path keeps its permission bits.
    if let Err(e) = fs::write(path, rendered) {
        return FileReport::errored(path_buf, display_path, FileError::Write(e.to_string()));
    }

    FileReport {
        path: path_buf,
        display_path,
        rewrites: file.into_rewrites(),
        status: FileStatus::Rewritten,
    }
}

/// Run the pipeline on every file in parallel.
///
/// Reports are returned in the order of `files`.
pub fn process_files(
    files: &[PathBuf],
    matcher: &PlaceholderMatcher,
    options: &PipelineOptions,
) -> Vec<FileReport> {
    files
        .par_iter()
        .map(|path| process_file(path, matcher, options))
        .collect()
}
