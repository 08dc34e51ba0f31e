//! Removal planning and execution
//!
//! `plan_removal` decides which copies go without touching the disk;
//! `execute_removal` is the only place in the crate that deletes files.

use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::core::error::{DedupError, FailedFile};
use crate::scanner::duplicate_detector::FingerprintGroup;

/// Which files survive and which are deleted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalPlan {
    /// First file of each duplicate set, in set order
    pub keep: Vec<PathBuf>,
    /// Every other member, in set order then traversal order
    pub remove: Vec<PathBuf>,
}

impl RemovalPlan {
    pub fn is_empty(&self) -> bool {
        self.remove.is_empty()
    }
}

/// Result of deleting the planned files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalOutcome {
    pub removed: usize,
    pub failed: Vec<FailedFile>,
}

/// Keep the first file of every duplicate set and mark the rest
pub fn plan_removal(duplicate_sets: &[FingerprintGroup]) -> RemovalPlan {
    let mut plan = RemovalPlan::default();

    for set in duplicate_sets {
        if let Some((first, rest)) = set.paths.split_first() {
            plan.keep.push(first.clone());
            plan.remove.extend(rest.iter().cloned());
        }
    }

    plan
}

/// Delete each path in order
///
/// A file that cannot be deleted is logged and skipped; the remaining
/// deletions still run.
pub fn execute_removal(remove: &[PathBuf]) -> RemovalOutcome {
    let mut outcome = RemovalOutcome::default();

    for path in remove {
        match fs::remove_file(path) {
            Ok(()) => {
                outcome.removed += 1;
                debug!(path = %path.display(), "removed duplicate");
            }
            Err(source) => {
                let err = DedupError::FileDelete {
                    path: path.clone(),
                    source,
                };
                warn!("{}", err);
                outcome.failed.push(FailedFile::from(&err));
            }
        }
    }

    info!(
        removed = outcome.removed,
        failed = outcome.failed.len(),
        "removal complete"
    );

    outcome
}
