//! Report writing functionality

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::removal::RemovalOutcome;
use crate::scanner::ScanReport;

const RULE: &str = "==================================================";

/// Format of the optional report file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Same layout as the console report
    #[default]
    Text,
    /// Pretty-printed JSON of the full scan report
    Json,
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", RULE)
}

/// Print the duplicate check results and, when there is something to
/// remove, the removal summary
pub fn print_report(out: &mut impl Write, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    heading(out, "DUPLICATE CHECK RESULTS")?;

    if !report.skipped.is_empty() {
        writeln!(out, "Skipped {} unreadable file(s):", report.skipped.len())?;
        for failed in &report.skipped {
            writeln!(out, "  {}: {}", failed.path.display(), failed.reason)?;
        }
        writeln!(out)?;
    }

    if !report.has_duplicates() {
        writeln!(out, "No duplicate images found! ✅")?;
        writeln!(out, "Total images scanned: {}", report.files_scanned)?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} sets of duplicate images:",
        report.duplicate_set_count()
    )?;
    writeln!(out)?;

    for set in &report.duplicate_sets {
        writeln!(out, "Duplicate set ({} files):", set.paths.len())?;
        if let Some((keep, remove)) = set.paths.split_first() {
            writeln!(out, "  KEEP: {}", keep.display())?;
            for path in remove {
                writeln!(out, "  REMOVE: {}", path.display())?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "Total duplicate files: {}", report.redundant_copies())?;
    writeln!(out, "Unique images: {}", report.unique_images())?;
    writeln!(out, "Files to remove: {}", report.plan.remove.len())?;

    writeln!(out)?;
    heading(out, "REMOVAL SUMMARY")?;
    writeln!(out, "• Total images scanned: {}", report.files_scanned)?;
    writeln!(out, "• Duplicate sets found: {}", report.duplicate_set_count())?;
    writeln!(out, "• Files to remove: {}", report.plan.remove.len())?;
    writeln!(
        out,
        "• Unique images after removal: {}",
        report.files_scanned.saturating_sub(report.plan.remove.len())
    )?;

    Ok(())
}

/// Print what happened after confirmed removal
pub fn print_removal_outcome(
    out: &mut impl Write,
    report: &ScanReport,
    outcome: &RemovalOutcome,
) -> io::Result<()> {
    writeln!(out)?;
    if !outcome.failed.is_empty() {
        writeln!(out, "Failed to remove {} file(s):", outcome.failed.len())?;
        for failed in &outcome.failed {
            writeln!(out, "  {}: {}", failed.path.display(), failed.reason)?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "✅ Successfully removed {} duplicate files!",
        outcome.removed
    )?;
    writeln!(
        out,
        "Remaining unique images: {}",
        report.files_scanned.saturating_sub(outcome.removed)
    )
}

/// Print the notice shown when removal was declined
pub fn print_removal_declined(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No files were removed.")
}

/// Write the scan report to a file
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `report` - Scan results to write
/// * `format` - Text (console layout) or JSON
pub fn write_report(output_path: &Path, report: &ScanReport, format: ReportFormat) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Text => {
            writeln!(writer, "Duplicate Image Report")?;
            writeln!(writer, "Scan root: {}", report.root.display())?;
            print_report(&mut writer, report)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)
                .context("Failed to serialize scan report")?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
