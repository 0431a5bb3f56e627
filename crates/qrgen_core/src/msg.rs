use std::fmt;
use std::path::PathBuf;

use crate::NormalizedUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input field.
    InputChanged(String),
    /// User pressed Generate or hit Enter in the input field.
    GenerateClicked,
    /// Encoding, rendering and auto-save all succeeded.
    GenerationSucceeded {
        url: NormalizedUrl,
        saved_path: PathBuf,
    },
    /// The generation attempt failed; nothing was replaced.
    GenerationFailed(GenerationFailure),
    /// User asked to save a copy elsewhere.
    ExportClicked,
    /// Result of the save dialog; `None` when the user cancelled.
    ExportPathChosen(Option<PathBuf>),
    /// The copy was written to the given path.
    ExportSucceeded(PathBuf),
    /// Writing the copy failed.
    ExportFailed(String),
    /// User closed the error window.
    ErrorDismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The encoder rejected the text (e.g. capacity exceeded).
    Encode(String),
    /// The QR code was rendered but could not be auto-saved.
    Save(String),
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationFailure::Encode(message) => write!(f, "encoding failed: {message}"),
            GenerationFailure::Save(message) => write!(f, "auto-save failed: {message}"),
        }
    }
}
