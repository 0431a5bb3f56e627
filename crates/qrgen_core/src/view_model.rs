use crate::{ErrorDialog, Phase};

/// Everything the window needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub phase: Phase,
    pub input_locked: bool,
    pub export_visible: bool,
    pub status_text: String,
    pub status_is_error: bool,
    pub generated_url: Option<String>,
    pub error_dialog: Option<ErrorDialog>,
    pub dirty: bool,
}
