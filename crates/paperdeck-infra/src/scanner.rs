//! Directory listing for the image grid.

use std::fs;
use std::path::{Path, PathBuf};

use paperdeck_core::image::is_supported_image;

/// Supported images directly inside `dir`, sorted by file name.
///
/// Only regular files with UTF-8 names are returned. An unreadable directory
/// yields an empty list.
pub fn list_images(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "cannot read directory");
            return Vec::new();
        }
    };

    let dir = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|e| e.file_name().to_str().is_some())
        .map(|e| dir.join(e.file_name()))
        .filter(|p| is_supported_image(p))
        .collect();

    files.sort();
    files
}
