use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;

use image_dedup::app::{run, RunOptions};
use image_dedup::reporting::ReportFormat;

#[derive(Parser)]
#[command(name = "image-dedup")]
#[command(about = "Check an image dataset for byte-identical duplicates and remove them", long_about = None)]
struct Cli {
    /// Directory containing images to check
    #[arg(long = "dataset-dir", alias = "dataset_dir", default_value = "../images")]
    dataset_dir: PathBuf,

    /// Remove duplicates without asking (no interactive prompt, no progress bar)
    #[arg(short, long, conflicts_with = "dry_run")]
    yes: bool,

    /// Only report duplicates; never prompt or delete
    #[arg(long)]
    dry_run: bool,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = if cli.yes {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb
    };
    image_dedup::init_tracing(if cli.verbose { "debug" } else { "warn" }, &progress);

    let options = RunOptions {
        dataset_dir: cli.dataset_dir,
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        output: cli.output,
        format: cli.format,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&options, &progress, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
