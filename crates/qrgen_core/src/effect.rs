use std::path::PathBuf;

use crate::NormalizedUrl;

/// IO requested by [`crate::update`] and carried out by the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Shake the input field; the input was rejected.
    Nudge,
    /// Encode, render and auto-save a QR code for `url`.
    Generate { url: NormalizedUrl },
    /// Ask the user where to save a copy of the current bitmap.
    ChooseExportPath { default_file_name: String },
    /// Write the current bitmap to `path`.
    Export { path: PathBuf },
}
