//! End-to-end run: scan, report, confirm, remove
//!
//! The binary only parses arguments and wires stdin/stdout into [`run`].

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::core::error::DedupError;
use crate::core::removal::{execute_removal, RemovalOutcome};
use crate::reporting::prompt::confirm_removal;
use crate::reporting::report_writer::{
    print_removal_declined, print_removal_outcome, print_report, write_report, ReportFormat,
};
use crate::scanner::scan_directory;

/// How a run behaves once duplicates are found
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub dataset_dir: PathBuf,
    /// Remove without prompting
    pub assume_yes: bool,
    /// Report only; never prompt or delete
    pub dry_run: bool,
    /// Optional report file
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
}

impl RunOptions {
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            assume_yes: false,
            dry_run: false,
            output: None,
            format: ReportFormat::Text,
        }
    }
}

/// Scan `options.dataset_dir`, print the report to `out`, and delete
/// redundant copies once confirmed
///
/// `input` is only read when there is something to remove and neither
/// `assume_yes` nor `dry_run` is set. A missing dataset directory is
/// reported on `out` and is not an error.
///
/// # Returns
/// The removal outcome, or `None` when nothing was deleted
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    progress: &ProgressBar,
    input: &mut R,
    out: &mut W,
) -> Result<Option<RemovalOutcome>> {
    writeln!(
        out,
        "Scanning for duplicates in: {}",
        options.dataset_dir.display()
    )?;

    let report = match scan_directory(&options.dataset_dir, progress) {
        Ok(report) => report,
        Err(err @ DedupError::DirectoryNotFound { .. }) => {
            progress.finish_and_clear();
            writeln!(out, "Error: {}", err)?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    progress.finish_and_clear();

    writeln!(out, "Found {} image files", report.files_scanned)?;
    print_report(out, &report)?;

    if let Some(ref output) = options.output {
        write_report(output, &report, options.format)?;
        writeln!(out, "\nDetailed report saved to: {}", output.display())?;
    }

    if report.plan.is_empty() {
        return Ok(None);
    }

    let confirmed = if options.dry_run {
        writeln!(out, "\nDry run; no files were removed.")?;
        false
    } else if options.assume_yes {
        true
    } else {
        let confirmed = confirm_removal(input, out, report.plan.remove.len())
            .context("Failed to read confirmation")?;
        if !confirmed {
            print_removal_declined(out)?;
        }
        confirmed
    };

    let outcome = if confirmed {
        writeln!(out, "\nRemoving duplicate files...")?;
        let outcome = execute_removal(&report.plan.remove);
        print_removal_outcome(out, &report, &outcome)?;
        Some(outcome)
    } else {
        None
    };

    writeln!(out, "Total images scanned: {}", report.files_scanned)?;

    Ok(outcome)
}
