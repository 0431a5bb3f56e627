use crate::{normalize_url, AppState, Effect, GenerationFailure, Msg, Phase, StatusLine};

/// File name the save dialog starts with.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "qrcode.png";

const ENCODE_ERROR_TITLE: &str = "Error";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if state.phase() != Phase::Generating {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::GenerateClicked => {
            if state.phase() == Phase::Generating {
                return (state, Vec::new());
            }
            match normalize_url(state.input()) {
                Ok(url) => {
                    state.begin_generating();
                    vec![Effect::Generate { url }]
                }
                Err(_) => vec![Effect::Nudge],
            }
        }
        Msg::GenerationSucceeded { url, saved_path } => {
            if state.phase() == Phase::Generating {
                state.finish_generating(url, saved_path);
            }
            Vec::new()
        }
        Msg::GenerationFailed(failure) => {
            if state.phase() == Phase::Generating {
                state.abort_generating();
                match failure {
                    GenerationFailure::Encode(message) => {
                        state.show_error(ENCODE_ERROR_TITLE, message);
                    }
                    GenerationFailure::Save(message) => {
                        state.set_status(StatusLine::SaveFailed(message));
                    }
                }
            }
            Vec::new()
        }
        Msg::ExportClicked => {
            if state.phase() == Phase::Ready {
                vec![Effect::ChooseExportPath {
                    default_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ExportPathChosen(choice) => match choice {
            Some(path) if state.phase() == Phase::Ready => vec![Effect::Export { path }],
            _ => Vec::new(),
        },
        Msg::ExportSucceeded(path) => {
            state.set_status(StatusLine::Exported(path));
            Vec::new()
        }
        Msg::ExportFailed(message) => {
            state.set_status(StatusLine::ExportFailed(message));
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
    };

    (state, effects)
}
