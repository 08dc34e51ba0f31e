//! Image Dedup Library
//!
//! Finds byte-identical duplicate images under a dataset directory and
//! removes all but the first copy of each duplicate set.

pub mod app;
pub mod core;
pub mod reporting;
pub mod scanner;

use indicatif::ProgressBar;
use std::io::{self, Write};

pub use crate::core::error::{DedupError, Result};
pub use scanner::ScanReport;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{run, RunOptions};
    pub use crate::core::error::{DedupError, FailedFile};
    pub use crate::core::removal::{execute_removal, plan_removal, RemovalOutcome, RemovalPlan};
    pub use crate::reporting::prompt::{confirm_removal, is_affirmative};
    pub use crate::reporting::report_writer::{
        print_removal_declined, print_removal_outcome, print_report, write_report, ReportFormat,
    };
    pub use crate::scanner::duplicate_detector::{
        find_duplicate_sets, fingerprint, group_by_fingerprint, Fingerprint, FingerprintGroup,
        Grouping,
    };
    pub use crate::scanner::file_scanner::{discover_images, IMAGE_EXTENSIONS};
    pub use crate::scanner::{scan_directory, ScanReport};
}

/// Stderr writer that clears the progress bar while a log line is written
#[derive(Clone)]
pub struct ProgressWriter(ProgressBar);

impl ProgressWriter {
    pub fn new(progress: &ProgressBar) -> Self {
        Self(progress.clone())
    }
}

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Log lines
/// are drawn around `progress` instead of through it.
pub fn init_tracing(default_level: &str, progress: &ProgressBar) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let writer = ProgressWriter::new(progress);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(move || writer.clone())
        .try_init();
}
