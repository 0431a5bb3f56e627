use std::path::PathBuf;

use pretty_assertions::assert_eq;
use qrgen_core::{update, AppState, Effect, Msg, Phase, DEFAULT_EXPORT_FILE_NAME};

fn init_logging() {
    qrgen_logging::initialize_for_tests();
}

fn ready_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, effects) = update(state, Msg::GenerateClicked);
    let url = match effects.into_iter().next() {
        Some(Effect::Generate { url }) => url,
        other => panic!("expected Generate effect, got {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::GenerationSucceeded {
            url,
            saved_path: PathBuf::from("medias/qrcode_example_com.png"),
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn export_is_unavailable_before_generation() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExportClicked);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);

    let (_, effects) = update(
        AppState::new(),
        Msg::ExportPathChosen(Some(PathBuf::from("/tmp/qrcode.png"))),
    );
    assert!(effects.is_empty());
}

#[test]
fn export_opens_dialog_with_default_name() {
    init_logging();
    let (_, effects) = update(ready_state(), Msg::ExportClicked);

    assert_eq!(
        effects,
        vec![Effect::ChooseExportPath {
            default_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }]
    );
    assert_eq!(DEFAULT_EXPORT_FILE_NAME, "qrcode.png");
}

#[test]
fn cancelled_dialog_changes_nothing() {
    init_logging();
    let state = ready_state();
    let (mut next, effects) = update(state.clone(), Msg::ExportPathChosen(None));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
    assert_eq!(next.view().status_text, "Saved to medias/qrcode_example_com.png");
}

#[test]
fn chosen_path_is_exported() {
    init_logging();
    let path = PathBuf::from("/home/user/Pictures/site.png");
    let (state, effects) = update(ready_state(), Msg::ExportPathChosen(Some(path.clone())));
    assert_eq!(effects, vec![Effect::Export { path: path.clone() }]);

    let (state, effects) = update(state, Msg::ExportSucceeded(path));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status_text, "Exported to site.png");
    assert_eq!(view.phase, Phase::Ready);
}

#[test]
fn export_failure_keeps_bitmap_state() {
    init_logging();
    let (state, _) = update(
        ready_state(),
        Msg::ExportFailed("read-only file system".to_string()),
    );

    let view = state.view();
    assert_eq!(view.phase, Phase::Ready);
    assert!(view.export_visible);
    assert!(view.status_is_error);
    assert_eq!(
        view.status_text,
        "Could not export QR code: read-only file system"
    );
}
