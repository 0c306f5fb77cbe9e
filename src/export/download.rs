//! File download sink.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CardError, Result};

use super::encode::decode_data_uri;

/// Save the image in `data_uri` as `dir/filename`.
///
/// Only the final component of `filename` is used, so a name can never
/// escape `dir`. Missing directories are created. No retry.
pub fn download(data_uri: &str, filename: &str, dir: &Path) -> Result<PathBuf> {
    let bytes = decode_data_uri(data_uri)?;

    let name = Path::new(filename)
        .file_name()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CardError::Parse {
            message: format!("Invalid download filename: {:?}", filename),
            help: Some("Use a plain file name such as milestone-card.png".to_string()),
        })?;

    fs::create_dir_all(dir).map_err(|e| CardError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let path = dir.join(name);
    fs::write(&path, &bytes).map_err(|e| CardError::Io {
        path: path.clone(),
        message: format!("Failed to write card: {}", e),
    })?;

    log::debug!(target: "cards", "saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Default download name for a card, e.g. `first-500-saved-progress.png`.
pub fn card_filename(title: &str, template_id: &str) -> String {
    let mut slug = String::new();
    for c in title.chars().chain(std::iter::once(' ')).chain(template_id.chars()) {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "milestone-card.png".to_string()
    } else {
        format!("{}.png", slug)
    }
}
