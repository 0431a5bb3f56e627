use std::path::{Path, PathBuf};

use crate::view_model::AppViewModel;
use crate::{NormalizedUrl, URL_PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No QR code has been generated yet.
    #[default]
    Idle,
    /// A generation request is in flight; input is locked.
    Generating,
    /// A QR code is held and can be exported.
    Ready,
}

/// Last outcome shown under the preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    Empty,
    Saved(PathBuf),
    Exported(PathBuf),
    SaveFailed(String),
    ExportFailed(String),
}

impl StatusLine {
    pub fn text(&self) -> String {
        match self {
            StatusLine::Empty => String::new(),
            StatusLine::Saved(path) => format!("Saved to {}", path.display()),
            StatusLine::Exported(path) => format!("Exported to {}", display_file_name(path)),
            StatusLine::SaveFailed(message) => format!("Could not save QR code: {message}"),
            StatusLine::ExportFailed(message) => format!("Could not export QR code: {message}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::SaveFailed(_) | StatusLine::ExportFailed(_))
    }
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Blocking error shown in a modal window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    phase: Phase,
    generated_url: Option<NormalizedUrl>,
    status: StatusLine,
    error_dialog: Option<ErrorDialog>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: URL_PLACEHOLDER.to_string(),
            phase: Phase::Idle,
            generated_url: None,
            status: StatusLine::Empty,
            error_dialog: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            phase: self.phase,
            input_locked: self.phase == Phase::Generating,
            export_visible: self.phase == Phase::Ready,
            status_text: self.status.text(),
            status_is_error: self.status.is_error(),
            generated_url: self.generated_url.as_ref().map(ToString::to_string),
            error_dialog: self.error_dialog.clone(),
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn generated_url(&self) -> Option<&NormalizedUrl> {
        self.generated_url.as_ref()
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_generating(&mut self) {
        self.phase = Phase::Generating;
        self.dirty = true;
    }

    pub(crate) fn finish_generating(&mut self, url: NormalizedUrl, saved_path: PathBuf) {
        self.phase = Phase::Ready;
        self.generated_url = Some(url);
        self.status = StatusLine::Saved(saved_path);
        self.dirty = true;
    }

    /// Leave `Generating` for whatever stable phase the held bitmap implies.
    pub(crate) fn abort_generating(&mut self) {
        self.phase = if self.generated_url.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        };
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = status;
        self.dirty = true;
    }

    pub(crate) fn show_error(&mut self, title: &str, message: String) {
        self.error_dialog = Some(ErrorDialog {
            title: title.to_string(),
            message,
        });
        self.dirty = true;
    }

    pub(crate) fn dismiss_error(&mut self) -> bool {
        let had_dialog = self.error_dialog.take().is_some();
        self.dirty |= had_dialog;
        had_dialog
    }
}
