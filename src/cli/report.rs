//! Report formatting and printing utilities.
//!
//! One line per rewrite goes to stdout, warnings and errors go to stderr, and
//! a summary line closes the run. Kept apart from the pipeline so callsite can
//! be used as a library without console output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::run::RunResult;
use crate::{
    core::Rewrite,
    outcome::{FileReport, FileStatus, RunSummary, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a run to stdout/stderr.
pub fn print(result: &RunResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a run to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &RunResult, verbose: bool, out: &mut W, err: &mut E) {
    if verbose && let Some(path) = &result.config_source {
        let _ = writeln!(err, "{} {}", "config:".bold(), path.display());
    }

    for scan_error in &result.scan_errors {
        let _ = writeln!(err, "{} {}", severity_label(Severity::Warning), scan_error);
    }

    for report in &result.reports {
        print_report(report, result.check, verbose, out, err);
    }

    print_summary(&result.summary, result.check, out, err);
}

fn print_report<W: Write, E: Write>(
    report: &FileReport,
    check: bool,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    if let Some(error) = report.error() {
        let _ = writeln!(
            err,
            "{} {}: {}",
            severity_label(error.severity()),
            report.display_path,
            error
        );
        return;
    }

    if matches!(report.status, FileStatus::Pending | FileStatus::Rewritten) {
        for rewrite in &report.rewrites {
            print_rewrite(&report.display_path, rewrite, check, verbose, out);
        }
    }
}

fn print_rewrite<W: Write>(path: &str, rewrite: &Rewrite, check: bool, verbose: bool, out: &mut W) {
    let label = if check {
        "would rewrite".yellow().bold()
    } else {
        "rewrite".green().bold()
    };
    let _ = writeln!(
        out,
        "{} {}:{}:{} {} {} {}",
        label,
        path,
        rewrite.line,
        rewrite.col,
        rewrite.original.dimmed(),
        "->".blue(),
        rewrite.replacement
    );

    if verbose {
        print_source_context(rewrite, out);
    }
}

fn print_source_context<W: Write>(rewrite: &Rewrite, out: &mut W) {
    let width = rewrite.line.to_string().len();
    let _ = writeln!(out, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        out,
        "{} {} {}",
        rewrite.line.to_string().blue(),
        "|".blue(),
        expand_tabs(&rewrite.source_line)
    );

    // col is 1-based and counted in bytes
    let prefix = rewrite
        .source_line
        .get(..rewrite.col.saturating_sub(1))
        .unwrap_or("");
    let caret_padding = UnicodeWidthStr::width(expand_tabs(prefix).as_str());
    let underline = "^".repeat(UnicodeWidthStr::width(rewrite.original.as_str()).max(1));
    let _ = writeln!(
        out,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        underline.green(),
        width = width,
        padding = caret_padding
    );
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', "    ")
}

fn print_summary<W: Write, E: Write>(summary: &RunSummary, check: bool, out: &mut W, err: &mut E) {
    let files = plural(summary.files_scanned, "file", "files");

    if summary.files_changed == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no placeholders to rewrite",
                summary.files_scanned, files
            )
            .green()
        );
    } else if check {
        let _ = writeln!(
            out,
            "{} {} placeholder(s) in {} file(s) ({} {} checked).",
            "Would rewrite".yellow().bold(),
            summary.literals_changed,
            summary.files_changed,
            summary.files_scanned,
            files
        );
        let _ = writeln!(out, "Run without {} to apply.", "--check".cyan());
    } else {
        let _ = writeln!(
            out,
            "{} {} placeholder(s) in {} file(s) ({} {} checked).",
            "Rewrote".green().bold(),
            summary.literals_changed,
            summary.files_changed,
            summary.files_scanned,
            files
        );
    }

    if summary.has_problems() {
        let _ = writeln!(
            err,
            "{} {} {} skipped, {} failed, {} unreadable {}",
            FAILURE_MARK.red(),
            summary.skipped,
            plural(summary.skipped, "file", "files"),
            summary.failed,
            summary.directory_errors,
            plural(summary.directory_errors, "directory", "directories")
        );
    }
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "error:".bold().red(),
        Severity::Warning => "warning:".bold().yellow(),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
