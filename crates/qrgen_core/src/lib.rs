//! QR generator core: pure state machine, URL normalization and view-model helpers.
mod effect;
mod msg;
mod normalize;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{GenerationFailure, Msg};
pub use normalize::{normalize_url, InvalidInput, NormalizedUrl, URL_PLACEHOLDER};
pub use state::{AppState, ErrorDialog, Phase, StatusLine};
pub use update::{update, DEFAULT_EXPORT_FILE_NAME};
pub use view_model::AppViewModel;
