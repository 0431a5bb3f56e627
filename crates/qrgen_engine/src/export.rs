use std::path::{Path, PathBuf};

use crate::persist::{AtomicFileWriter, PersistError};
use crate::{QrBitmap, IMAGE_EXTENSION};

/// Appends `.png` when the chosen path has no extension at all.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(IMAGE_EXTENSION)
    }
}

/// Write `bitmap` as PNG to a user-chosen path.
///
/// The content is PNG whatever extension the user typed.
pub fn export_bitmap(bitmap: &QrBitmap, path: &Path) -> Result<PathBuf, PersistError> {
    let path = with_default_extension(path);
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PersistError::InvalidTarget(path.clone()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let png = bitmap.encode_png()?;
    AtomicFileWriter::new(dir).write(filename, &png)
}
