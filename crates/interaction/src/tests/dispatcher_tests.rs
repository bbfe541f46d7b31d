use shared::{
    domain::{BoxColor, Phase, SpeechEventKind},
    protocol::SpeechEvent,
};

use crate::dispatcher::{dispatch, CommandOutcome, RECOGNITION_THRESHOLD, TERMINATE_THRESHOLD};

fn recognized(text: &str, confidence: f64) -> SpeechEvent {
    SpeechEvent::recognized(text, confidence)
}

#[test]
fn phase_entry_tokens_need_neutral_and_the_base_threshold() {
    assert_eq!(
        dispatch(&recognized("transport", RECOGNITION_THRESHOLD), Phase::Neutral),
        CommandOutcome::EnterPhase(Phase::Transport)
    );
    assert_eq!(
        dispatch(&recognized("transport", 0.84), Phase::Neutral),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("stretch", 0.99), Phase::Scale),
        CommandOutcome::Ignored
    );
}

#[test]
fn token_text_is_lower_cased_before_matching() {
    assert_eq!(
        dispatch(&recognized("SCALE", 0.9), Phase::Neutral),
        CommandOutcome::EnterPhase(Phase::Scale)
    );
}

#[test]
fn stop_works_from_any_active_phase_but_not_neutral() {
    for phase in [Phase::Transport, Phase::Stretch, Phase::Scale, Phase::Color] {
        assert_eq!(dispatch(&recognized("stop", 0.9), phase), CommandOutcome::Stop);
    }
    assert_eq!(
        dispatch(&recognized("stop", 0.9), Phase::Neutral),
        CommandOutcome::Ignored
    );
}

#[test]
fn color_sub_commands_are_only_live_in_the_color_phase() {
    assert_eq!(
        dispatch(&recognized("green", 0.9), Phase::Color),
        CommandOutcome::SetColor(BoxColor::Green)
    );
    assert_eq!(
        dispatch(&recognized("green", 0.9), Phase::Neutral),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("blue", 0.9), Phase::Stretch),
        CommandOutcome::Ignored
    );
}

#[test]
fn undo_and_reset_are_neutral_only() {
    assert_eq!(dispatch(&recognized("undo", 0.9), Phase::Neutral), CommandOutcome::Undo);
    assert_eq!(dispatch(&recognized("reset", 0.9), Phase::Neutral), CommandOutcome::Reset);
    assert_eq!(
        dispatch(&recognized("undo", 0.9), Phase::Transport),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("reset", 0.9), Phase::Color),
        CommandOutcome::Ignored
    );
}

#[test]
fn terminate_threshold_boundary_sits_at_ninety_percent() {
    assert_eq!(
        dispatch(&recognized("terminate", 0.89), Phase::Neutral),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("terminate", TERMINATE_THRESHOLD), Phase::Neutral),
        CommandOutcome::Terminate
    );
    assert_eq!(
        dispatch(&recognized("terminate", 0.99), Phase::Stretch),
        CommandOutcome::Ignored
    );
}

#[test]
fn reserved_and_unknown_tokens_are_ignored() {
    assert_eq!(
        dispatch(&recognized("rotate", 0.99), Phase::Neutral),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("transform", 0.99), Phase::Neutral),
        CommandOutcome::Ignored
    );
    assert_eq!(
        dispatch(&recognized("banana", 0.99), Phase::Neutral),
        CommandOutcome::Ignored
    );
}

#[test]
fn non_recognized_event_kinds_never_dispatch() {
    let hypothesis = SpeechEvent {
        text: "transport".into(),
        confidence: 0.99,
        kind: SpeechEventKind::Hypothesis,
    };
    let rejected = SpeechEvent {
        text: "stop".into(),
        confidence: 0.99,
        kind: SpeechEventKind::Rejected,
    };
    assert_eq!(dispatch(&hypothesis, Phase::Neutral), CommandOutcome::Ignored);
    assert_eq!(dispatch(&rejected, Phase::Transport), CommandOutcome::Ignored);
}
