//! Image discovery, fingerprinting and the read-only scan pipeline

pub mod duplicate_detector;
pub mod file_scanner;

pub use duplicate_detector::{
    find_duplicate_sets, fingerprint, group_by_fingerprint, group_by_fingerprint_with_progress,
    Fingerprint, FingerprintGroup, Grouping,
};
pub use file_scanner::{discover_images, is_image_file, IMAGE_EXTENSIONS};

use indicatif::ProgressBar;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::error::{FailedFile, Result};
use crate::core::removal::{plan_removal, RemovalPlan};

/// Everything a scan found, before anything is deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub root: PathBuf,
    /// Image files discovered under the root
    pub files_scanned: usize,
    pub skipped: Vec<FailedFile>,
    pub duplicate_sets: Vec<FingerprintGroup>,
    pub plan: RemovalPlan,
}

impl ScanReport {
    pub fn duplicate_set_count(&self) -> usize {
        self.duplicate_sets.len()
    }

    /// Copies beyond the first across all duplicate sets
    pub fn redundant_copies(&self) -> usize {
        self.duplicate_sets
            .iter()
            .map(FingerprintGroup::redundant_copies)
            .sum()
    }

    /// Images left once every redundant copy is gone
    pub fn unique_images(&self) -> usize {
        self.files_scanned.saturating_sub(self.redundant_copies())
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_sets.is_empty()
    }
}

// Derived counts go out with the stored fields.
impl Serialize for ScanReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScanReport", 8)?;
        state.serialize_field("root", &self.root)?;
        state.serialize_field("files_scanned", &self.files_scanned)?;
        state.serialize_field("duplicate_set_count", &self.duplicate_set_count())?;
        state.serialize_field("redundant_copies", &self.redundant_copies())?;
        state.serialize_field("unique_images", &self.unique_images())?;
        state.serialize_field("skipped", &self.skipped)?;
        state.serialize_field("duplicate_sets", &self.duplicate_sets)?;
        state.serialize_field("plan", &self.plan)?;
        state.end()
    }
}

/// Discover, fingerprint, group and plan, without modifying anything
///
/// Fails only when `root` does not exist. `progress` has its length set to
/// the number of discovered files and advances once per file hashed.
pub fn scan_directory(root: &Path, progress: &ProgressBar) -> Result<ScanReport> {
    let images = discover_images(root)?;
    progress.set_length(images.len() as u64);

    let grouping = group_by_fingerprint_with_progress(&images, progress);
    let duplicate_sets = find_duplicate_sets(&grouping.groups);
    let plan = plan_removal(&duplicate_sets);

    info!(
        root = %root.display(),
        files = images.len(),
        duplicate_sets = duplicate_sets.len(),
        to_remove = plan.remove.len(),
        "scan complete"
    );

    Ok(ScanReport {
        root: root.to_path_buf(),
        files_scanned: images.len(),
        skipped: grouping.skipped,
        duplicate_sets,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_counts() {
        let dir = TempDir::new().unwrap();
        for (name, content) in [
            ("1.jpg", "a"),
            ("2.jpg", "a"),
            ("3.jpg", "a"),
            ("4.png", "b"),
            ("5.png", "b"),
            ("6.bmp", "c"),
        ] {
            fs::write(dir.path().join(name), content).unwrap();
        }

        let report = scan_directory(dir.path(), &ProgressBar::hidden()).unwrap();

        assert_eq!(report.files_scanned, 6);
        assert_eq!(report.duplicate_set_count(), 2);
        assert_eq!(report.redundant_copies(), 3);
        assert_eq!(report.unique_images(), 3);
        assert_eq!(report.plan.remove.len(), 3);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_non_images_are_not_scanned() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "same").unwrap();
        fs::write(dir.path().join("b.txt"), "same").unwrap();

        let report = scan_directory(dir.path(), &ProgressBar::hidden()).unwrap();
        assert_eq!(report.files_scanned, 0);
        assert!(!report.has_duplicates());
    }
}
