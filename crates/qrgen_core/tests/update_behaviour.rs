use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use qrgen_core::{
    normalize_url, update, AppState, Effect, GenerationFailure, Msg, Phase, URL_PLACEHOLDER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(qrgen_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::GenerateClicked)
}

fn generated(state: AppState, url: &str, saved_path: &str) -> AppState {
    let (state, effects) = submit(state, url);
    let url = match effects.as_slice() {
        [Effect::Generate { url }] => url.clone(),
        other => panic!("expected a single Generate effect, got {other:?}"),
    };
    let (state, effects) = update(
        state,
        Msg::GenerationSucceeded {
            url,
            saved_path: PathBuf::from(saved_path),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn starts_idle_with_placeholder() {
    init_logging();
    let view = AppState::new().view();

    assert_eq!(view.input, URL_PLACEHOLDER);
    assert_eq!(view.phase, Phase::Idle);
    assert!(!view.export_visible);
    assert!(!view.input_locked);
    assert_eq!(view.status_text, "");
    assert!(!view.dirty);
}

#[test]
fn untouched_placeholder_only_nudges() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::GenerateClicked);

    assert_eq!(effects, vec![Effect::Nudge]);
    assert_eq!(next.phase(), Phase::Idle);
    assert_eq!(next.view().status_text, "");
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn blank_input_only_nudges() {
    init_logging();
    for input in ["", "   ", "\t\n", "  https://  "] {
        let (next, effects) = submit(AppState::new(), input);
        assert_eq!(effects, vec![Effect::Nudge], "input {input:?}");
        assert_eq!(next.phase(), Phase::Idle);
        assert_eq!(next.generated_url(), None);
    }
}

#[test]
fn scheme_less_input_generates_https_url() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "  example.com ");

    assert_eq!(
        effects,
        vec![Effect::Generate {
            url: normalize_url("https://example.com").unwrap(),
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, Phase::Generating);
    assert!(view.input_locked);
    assert!(!view.export_visible);
}

#[test]
fn successful_generation_reports_saved_path() {
    init_logging();
    let mut state = generated(AppState::new(), "example.com", "medias/qrcode_example_com.png");
    let view = state.view();

    assert_eq!(view.phase, Phase::Ready);
    assert!(view.export_visible);
    assert!(!view.input_locked);
    assert_eq!(view.status_text, "Saved to medias/qrcode_example_com.png");
    assert!(!view.status_is_error);
    assert_eq!(view.generated_url.as_deref(), Some("https://example.com"));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn input_is_locked_while_generating() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, effects) = update(state, Msg::InputChanged("other.org".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.input(), "example.com");

    let (state, effects) = update(state, Msg::GenerateClicked);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Generating);
}

#[test]
fn encode_failure_from_idle_returns_to_idle_with_dialog() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, effects) = update(
        state,
        Msg::GenerationFailed(GenerationFailure::Encode("data too long".to_string())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.phase, Phase::Idle);
    assert!(!view.export_visible);
    assert_eq!(view.status_text, "");
    let dialog = view.error_dialog.expect("error dialog");
    assert_eq!(dialog.message, "data too long");

    let (state, _) = update(state, Msg::ErrorDismissed);
    assert_eq!(state.view().error_dialog, None);
}

#[test]
fn encode_failure_keeps_previous_code() {
    init_logging();
    let state = generated(AppState::new(), "example.com", "medias/qrcode_example_com.png");
    let (state, _) = submit(state, "too-long.example");
    let (state, _) = update(
        state,
        Msg::GenerationFailed(GenerationFailure::Encode("data too long".to_string())),
    );

    let view = state.view();
    assert_eq!(view.phase, Phase::Ready);
    assert!(view.export_visible);
    assert_eq!(view.generated_url.as_deref(), Some("https://example.com"));
    assert_eq!(view.status_text, "Saved to medias/qrcode_example_com.png");
}

#[test]
fn save_failure_is_reported_inline() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, effects) = update(
        state,
        Msg::GenerationFailed(GenerationFailure::Save("permission denied".to_string())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.error_dialog, None);
    assert_eq!(view.status_text, "Could not save QR code: permission denied");
    assert!(view.status_is_error);
}

#[test]
fn regenerating_same_input_targets_same_path() {
    init_logging();
    let state = generated(AppState::new(), "example.com", "medias/qrcode_example_com.png");
    let (state, effects) = update(state, Msg::GenerateClicked);

    assert_eq!(
        effects,
        vec![Effect::Generate {
            url: normalize_url("example.com").unwrap(),
        }]
    );
    let (state, _) = update(
        state,
        Msg::GenerationSucceeded {
            url: normalize_url("example.com").unwrap(),
            saved_path: PathBuf::from("medias/qrcode_example_com.png"),
        },
    );
    assert_eq!(state.phase(), Phase::Ready);
}

#[test]
fn stray_generation_result_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::GenerationSucceeded {
            url: normalize_url("example.com").unwrap(),
            saved_path: PathBuf::from("medias/qrcode_example_com.png"),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, next);
}
