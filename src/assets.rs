//! Asset collaborator - lists and validates the game's image folder
//!
//! The core never decodes images; it only needs 8 distinct usable files to
//! pair up across the 16 tiles. "Usable" means a regular file carrying a
//! recognized raster-image extension. Validation happens once at startup and
//! is never retried.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::PAIR_COUNT;

/// File extensions accepted as game images (decoding is out of scope).
const IMAGE_EXTENSIONS: &[&str] = &["gif", "png", "jpg", "jpeg", "bmp"];

/// A validated image file: its path plus a short label used by displays that
/// cannot render the pixels themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub path: PathBuf,
    pub label: String,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{} is not a valid folder", .0.display())]
    InvalidFolder(PathBuf),

    #[error("{} must contain at least 8 usable images (found {found})", .path.display())]
    InsufficientAssets { path: PathBuf, found: usize },

    #[error("failed to read image folder: {0}")]
    Io(#[from] std::io::Error),
}

/// List the usable images in `folder`, sorted by file name.
///
/// Fails with [`AssetError::InvalidFolder`] when the path is not a directory
/// and [`AssetError::InsufficientAssets`] when fewer than 8 qualifying files
/// exist. The sort keeps the handle order (and therefore the label-to-image
/// assignment) stable across runs.
pub fn list_usable_images(folder: &Path) -> Result<Vec<ImageHandle>, AssetError> {
    if !folder.is_dir() {
        return Err(AssetError::InvalidFolder(folder.to_path_buf()));
    }

    let mut handles = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_usable_image(&path) {
            continue;
        }
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        handles.push(ImageHandle { path, label });
    }
    handles.sort_by(|a, b| a.path.cmp(&b.path));

    if handles.len() < PAIR_COUNT {
        return Err(AssetError::InsufficientAssets {
            path: folder.to_path_buf(),
            found: handles.len(),
        });
    }
    Ok(handles)
}

fn is_usable_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|&known| known == ext)
        })
        .unwrap_or(false)
}
