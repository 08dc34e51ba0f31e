//! Duplicate file detection using MD5 hashing

use indicatif::ProgressBar;
use md5::{Digest, Md5};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::error::{DedupError, FailedFile, Result};

const CHUNK_SIZE: usize = 8192;

/// 128-bit content digest of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 16]);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Files sharing one fingerprint, in the order they were hashed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintGroup {
    pub fingerprint: Fingerprint,
    pub paths: Vec<PathBuf>,
}

impl FingerprintGroup {
    /// A group is a duplicate set once it holds more than one file
    pub fn is_duplicate_set(&self) -> bool {
        self.paths.len() > 1
    }

    /// Copies beyond the first
    pub fn redundant_copies(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }
}

/// Outcome of fingerprinting a list of files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Groups in order of first appearance
    pub groups: Vec<FingerprintGroup>,
    /// Number of files hashed successfully
    pub hashed: usize,
    /// Files that could not be hashed
    pub skipped: Vec<FailedFile>,
}

/// Compute the MD5 fingerprint of a file
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// The digest of the full file content, read in fixed-size chunks
pub fn fingerprint(path: &Path) -> Result<Fingerprint> {
    let read_error = |source: std::io::Error| DedupError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(read_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let mut digest = [0u8; 16];
    digest.copy_from_slice(&hasher.finalize());
    Ok(Fingerprint(digest))
}

/// Group files by fingerprint
///
/// Files that fail to hash are logged and left out of every group.
pub fn group_by_fingerprint(paths: &[PathBuf]) -> Grouping {
    group_by_fingerprint_with_progress(paths, &ProgressBar::hidden())
}

/// Same as [`group_by_fingerprint`], advancing `progress` once per file
pub fn group_by_fingerprint_with_progress(paths: &[PathBuf], progress: &ProgressBar) -> Grouping {
    let mut grouping = Grouping::default();
    let mut index: HashMap<Fingerprint, usize> = HashMap::new();

    for path in paths {
        match fingerprint(path) {
            Ok(digest) => {
                debug!(path = %path.display(), fingerprint = %digest, "hashed");
                match index.get(&digest) {
                    Some(&slot) => grouping.groups[slot].paths.push(path.clone()),
                    None => {
                        index.insert(digest, grouping.groups.len());
                        grouping.groups.push(FingerprintGroup {
                            fingerprint: digest,
                            paths: vec![path.clone()],
                        });
                    }
                }
                grouping.hashed += 1;
            }
            Err(err) => {
                warn!("{}", err);
                grouping.skipped.push(FailedFile::from(&err));
            }
        }
        progress.inc(1);
    }

    info!(
        hashed = grouping.hashed,
        skipped = grouping.skipped.len(),
        groups = grouping.groups.len(),
        "fingerprinting complete"
    );

    grouping
}

/// Keep only the groups holding two or more files
pub fn find_duplicate_sets(groups: &[FingerprintGroup]) -> Vec<FingerprintGroup> {
    groups
        .iter()
        .filter(|group| group.is_duplicate_set())
        .cloned()
        .collect()
}
