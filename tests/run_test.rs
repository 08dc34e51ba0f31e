//! Integration tests for the end-to-end run
//!
//! Exercises the same entry point the binary uses, with the prompt fed
//! from an in-memory reader.

use image_dedup::prelude::*;
use indicatif::ProgressBar;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PROMPT: &str = "Do you want to remove";

fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn dataset(temp_dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write(temp_dir.path(), "a.jpg", b"same"),
        write(temp_dir.path(), "b.jpg", b"same"),
        write(temp_dir.path(), "c.jpg", b"other"),
    ]
}

fn run_with(options: &RunOptions, input: &mut Cursor<Vec<u8>>) -> (Option<RemovalOutcome>, String) {
    let mut output = Vec::new();
    let outcome = run(options, &ProgressBar::hidden(), input, &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

/// An empty dataset is reported without prompting
#[test]
fn test_empty_dataset_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let mut input = Cursor::new(b"y\n".to_vec());

    let (outcome, output) = run_with(&RunOptions::new(temp_dir.path()), &mut input);

    assert!(outcome.is_none());
    assert!(output.contains("Found 0 image files"));
    assert!(output.contains("No duplicate images found!"));
    assert!(!output.contains(PROMPT));
    assert_eq!(input.position(), 0);
}

/// Distinct images only: no prompt, nothing removed
#[test]
fn test_unique_images_skip_prompt() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "x.png", b"one");
    write(temp_dir.path(), "y.png", b"two");
    let mut input = Cursor::new(b"y\n".to_vec());

    let (outcome, output) = run_with(&RunOptions::new(temp_dir.path()), &mut input);

    assert!(outcome.is_none());
    assert!(!output.contains(PROMPT));
    assert!(output.contains("Total images scanned: 2"));
}

/// Dry run reports duplicates but never deletes or prompts
#[test]
fn test_dry_run_leaves_files() {
    let temp_dir = TempDir::new().unwrap();
    let files = dataset(&temp_dir);
    let mut options = RunOptions::new(temp_dir.path());
    options.dry_run = true;
    let mut input = Cursor::new(b"y\n".to_vec());

    let (outcome, output) = run_with(&options, &mut input);

    assert!(outcome.is_none());
    assert!(files.iter().all(|p| p.exists()));
    assert!(output.contains("REMOVE: "));
    assert!(!output.contains(PROMPT));
    assert!(output.trim_end().ends_with("Total images scanned: 3"));
    assert_eq!(input.position(), 0);
}

/// With assume_yes the duplicates go without reading any input
#[test]
fn test_assume_yes_removes_without_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let files = dataset(&temp_dir);
    let mut options = RunOptions::new(temp_dir.path());
    options.assume_yes = true;
    let mut input = Cursor::new(b"n\n".to_vec());

    let (outcome, output) = run_with(&options, &mut input);

    let outcome = outcome.expect("removal should run");
    assert_eq!(outcome.removed, 1);
    assert!(files[0].exists());
    assert!(!files[1].exists());
    assert!(files[2].exists());
    assert!(!output.contains(PROMPT));
    assert_eq!(input.position(), 0);
}

/// A missing dataset directory is reported and the run still succeeds
#[test]
fn test_missing_dataset_dir() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("images");
    let mut input = Cursor::new(Vec::new());

    let (outcome, output) = run_with(&RunOptions::new(&missing), &mut input);

    assert!(outcome.is_none());
    let expected = format!("Error: Images directory {} does not exist", missing.display());
    assert!(output.contains(&expected));
    assert!(!output.contains("DUPLICATE CHECK RESULTS"));
}

/// The JSON report file carries the summary counts
#[test]
fn test_json_report_file() {
    let temp_dir = TempDir::new().unwrap();
    let images = temp_dir.path().join("images");
    fs::create_dir(&images).unwrap();
    write(&images, "a.jpg", b"same");
    write(&images, "b.jpg", b"same");
    write(&images, "c.jpg", b"other");
    let report_path = temp_dir.path().join("report.json");

    let mut options = RunOptions::new(&images);
    options.dry_run = true;
    options.output = Some(report_path.clone());
    options.format = ReportFormat::Json;

    let (_, output) = run_with(&options, &mut Cursor::new(Vec::new()));
    assert!(output.contains("Detailed report saved to:"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["files_scanned"], 3);
    assert_eq!(value["duplicate_set_count"], 1);
    assert_eq!(value["redundant_copies"], 1);
    assert_eq!(value["unique_images"], 2);
}
