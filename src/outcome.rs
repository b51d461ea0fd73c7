//! Structured per-file results.
//!
//! Every file handed to the pipeline produces a [`FileReport`]; failures are
//! carried in the report instead of aborting the batch. A [`RunSummary`]
//! aggregates the reports of one run.

use std::{fmt, path::PathBuf};

use crate::core::{RenderError, Rewrite, parsers::go::SyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Why a single file could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    Read(String),
    Parse(SyntaxError),
    Render(RenderError),
    Write(String),
}

impl FileError {
    /// Parse errors only skip a file; everything else is a failure.
    pub fn severity(&self) -> Severity {
        match self {
            FileError::Parse(_) => Severity::Warning,
            FileError::Read(_) | FileError::Render(_) | FileError::Write(_) => Severity::Error,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Read(e) => write!(f, "read failed: {}", e),
            FileError::Parse(e) => write!(f, "parse failed: {}", e),
            FileError::Render(e) => write!(f, "render failed: {}", e),
            FileError::Write(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl From<SyntaxError> for FileError {
    fn from(e: SyntaxError) -> Self {
        FileError::Parse(e)
    }
}

impl From<RenderError> for FileError {
    fn from(e: RenderError) -> Self {
        FileError::Render(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Nothing to rewrite; the file was not touched.
    Unchanged,
    /// Rewrites found but not written (check mode).
    Pending,
    /// Rewrites written to disk.
    Rewritten,
    /// File ignored, e.g. it does not parse.
    Skipped(FileError),
    /// Processing failed; the file on disk is unchanged.
    Failed(FileError),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub display_path: String,
    pub rewrites: Vec<Rewrite>,
    pub status: FileStatus,
}

impl FileReport {
    pub fn unchanged(path: PathBuf, display_path: String) -> Self {
        Self {
            path,
            display_path,
            rewrites: Vec::new(),
            status: FileStatus::Unchanged,
        }
    }

    /// Build a report for a file that could not be processed.
    ///
    /// Parse errors become `Skipped`, all other errors `Failed`.
    pub fn errored(path: PathBuf, display_path: String, error: FileError) -> Self {
        let status = match error {
            FileError::Parse(_) => FileStatus::Skipped(error),
            _ => FileStatus::Failed(error),
        };
        Self {
            path,
            display_path,
            rewrites: Vec::new(),
            status,
        }
    }

    pub fn error(&self) -> Option<&FileError> {
        match &self.status {
            FileStatus::Skipped(e) | FileStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A directory that could not be read during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {}: {}", self.path.display(), self.message)
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    /// Files written (apply mode) or that would be written (check mode).
    pub files_changed: usize,
    pub literals_changed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub directory_errors: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[FileReport], directory_errors: usize) -> Self {
        let mut summary = RunSummary {
            files_scanned: reports.len(),
            directory_errors,
            ..Default::default()
        };
        for report in reports {
            match report.status {
                FileStatus::Unchanged => {}
                FileStatus::Pending | FileStatus::Rewritten => {
                    summary.files_changed += 1;
                    summary.literals_changed += report.rewrites.len();
                }
                FileStatus::Skipped(_) => summary.skipped += 1,
                FileStatus::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn has_problems(&self) -> bool {
        self.skipped + self.failed + self.directory_errors > 0
    }
}
