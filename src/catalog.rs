use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{Result, SliderError};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Image files directly inside `dir`, sorted by file name.
pub fn scan_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| SliderError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        // skip sub-directories and anything that is not an image
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = ?dir, count = paths.len(), "scanned image directory");
    if paths.is_empty() {
        Err(SliderError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Randomizes the slide order. Must happen before the slider is built:
/// the slide set is fixed afterwards.
pub fn shuffle(paths: &mut [PathBuf]) {
    paths.shuffle(&mut rand::rng());
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
