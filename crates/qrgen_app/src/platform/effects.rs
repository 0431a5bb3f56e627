use std::path::PathBuf;

use qrgen_core::{Effect, GenerationFailure, Msg};
use qrgen_engine::{GenerateError, Generated, Generator};
use qrgen_logging::{qrgen_debug, qrgen_info, qrgen_warn};

use super::ui::constants::SAVE_DIALOG_TITLE;

/// Asks the user for an export destination; `None` means cancelled.
pub trait SavePathChooser {
    fn choose(&self, default_file_name: &str) -> Option<PathBuf>;
}

pub struct NativeSaveDialog;

impl SavePathChooser for NativeSaveDialog {
    fn choose(&self, default_file_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(SAVE_DIALOG_TITLE)
            .set_file_name(default_file_name)
            .add_filter("PNG", &["png"])
            .add_filter("All files", &["*"])
            .save_file()
    }
}

/// Executes core effects against the engine and owns the last generated code.
pub struct EffectRunner<D = NativeSaveDialog> {
    generator: Generator,
    dialog: D,
    last_generated: Option<Generated>,
    generation: u64,
    nudge_requested: bool,
}

impl<D: SavePathChooser> EffectRunner<D> {
    pub fn new(generator: Generator, dialog: D) -> Self {
        Self {
            generator,
            dialog,
            last_generated: None,
            generation: 0,
            nudge_requested: false,
        }
    }

    /// Runs one effect and returns the message reporting its outcome, if any.
    pub fn run(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::Nudge => {
                qrgen_debug!("Rejected input, nudging");
                self.nudge_requested = true;
                None
            }
            Effect::Generate { url } => Some(match self.generator.generate(url.as_str()) {
                Ok(generated) => {
                    let saved_path = generated.saved_path.clone();
                    self.last_generated = Some(generated);
                    self.generation += 1;
                    Msg::GenerationSucceeded { url, saved_path }
                }
                Err(GenerateError::Encode(err)) => {
                    Msg::GenerationFailed(GenerationFailure::Encode(err.to_string()))
                }
                Err(GenerateError::Persist(err)) => {
                    Msg::GenerationFailed(GenerationFailure::Save(err.to_string()))
                }
            }),
            Effect::ChooseExportPath { default_file_name } => {
                let choice = self.dialog.choose(&default_file_name);
                if choice.is_none() {
                    qrgen_info!("Export cancelled");
                }
                Some(Msg::ExportPathChosen(choice))
            }
            Effect::Export { path } => {
                let Some(generated) = &self.last_generated else {
                    qrgen_warn!("Export requested with no QR code held");
                    return None;
                };
                Some(match self.generator.export(&generated.bitmap, &path) {
                    Ok(written) => Msg::ExportSucceeded(written),
                    Err(err) => Msg::ExportFailed(err.to_string()),
                })
            }
        }
    }

    pub fn last_generated(&self) -> Option<&Generated> {
        self.last_generated.as_ref()
    }

    /// Increases with every successful generation; the preview texture
    /// is refreshed when it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn take_nudge(&mut self) -> bool {
        std::mem::take(&mut self.nudge_requested)
    }
}
