//! Run orchestration: config, scan, pipeline.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{PathStyle, PlaceholderMatcher},
    outcome::{FileReport, RunSummary, ScanError},
    pipeline::{PipelineOptions, process_files},
    scanner::scan_files,
};

pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub scan_errors: Vec<ScanError>,
    pub summary: RunSummary,
    /// Config file that was applied, if any.
    pub config_source: Option<PathBuf>,
    /// True for `--check` runs, where nothing is written.
    pub check: bool,
}

/// Run one rewrite pass as described by the parsed arguments.
///
/// Loads `.callsiterc.json` (searched upward from the source root), merges it
/// with the command-line flags, scans the source root and runs the pipeline
/// on every Go file found.
///
/// # Returns
/// - `Ok(RunResult)` with one report per scanned file, including failures
/// - `Err` if the run cannot start (source root inaccessible, invalid config)
///
/// # Example
/// ```ignore
/// let args = Arguments::parse();
/// let result = callsite::cli::run(&args)?;
/// println!("{} literal(s) rewritten", result.summary.literals_changed);
/// ```
pub fn run(args: &Arguments) -> Result<RunResult> {
    let ConfigLoadResult { config, source } = load_config(&config_start_dir(&args.src))?;

    let mut excludes: HashSet<String> = config.exclude.iter().cloned().collect();
    excludes.extend(args.exclusions());

    let matcher = PlaceholderMatcher::new(&config.marker)?;
    let options = PipelineOptions {
        apply: !args.check,
        path_style: PathStyle {
            absolute: args.absolute || config.absolute_paths,
            strip_prefix: args.strip_prefix.unwrap_or(config.strip_prefix),
        },
    };

    let scan = scan_files(&args.src, &excludes)?;
    let reports = process_files(&scan.files, &matcher, &options);
    let summary = RunSummary::from_reports(&reports, scan.errors.len());

    Ok(RunResult {
        reports,
        scan_errors: scan.errors,
        summary,
        config_source: source,
        check: args.check,
    })
}

/// Directory the config search starts from: the source root itself, or the
/// directory containing it when the root is a file.
fn config_start_dir(src: &Path) -> PathBuf {
    let dir = if src.is_dir() {
        src.to_path_buf()
    } else {
        match src.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };
    dir.canonicalize().unwrap_or(dir)
}
