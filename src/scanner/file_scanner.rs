//! Image file discovery

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::error::{DedupError, Result};

/// Extensions treated as images, compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

/// Check whether a path carries one of the image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Recursively collect all image files under `root`
///
/// # Arguments
/// * `root` - Directory to scan
///
/// # Returns
/// Image paths sorted lexicographically, so the first file of a duplicate
/// set is the same on every platform. Entries that cannot be read are logged
/// and skipped.
pub fn discover_images(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DedupError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let err = DedupError::Walk { path, source };
                warn!("{}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && is_image_file(entry.path()) {
            images.push(entry.into_path());
        }
    }

    images.sort();
    debug!(root = %root.display(), count = images.len(), "discovered image files");

    Ok(images)
}
