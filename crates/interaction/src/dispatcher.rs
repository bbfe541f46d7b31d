use shared::{
    domain::{BoxColor, Phase, SpeechEventKind, SpeechToken},
    protocol::SpeechEvent,
};

/// Minimum confidence for every token except terminate.
pub const RECOGNITION_THRESHOLD: f64 = 0.85;
/// Terminate ends the session, so it carries an extra 0.05 of margin over the
/// base threshold.
pub const TERMINATE_THRESHOLD: f64 = 0.90;

/// The single state change an accepted command maps to. `Ignored` covers
/// hypotheses, rejections, unknown or sub-threshold tokens, reserved tokens,
/// and commands invalid for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Ignored,
    EnterPhase(Phase),
    Stop,
    SetColor(BoxColor),
    Undo,
    Reset,
    Terminate,
}

/// Pure command table: (speech event, current phase) → outcome. The session
/// applies side effects; nothing here mutates state.
pub fn dispatch(event: &SpeechEvent, current: Phase) -> CommandOutcome {
    if event.kind != SpeechEventKind::Recognized {
        return CommandOutcome::Ignored;
    }
    let Ok(token) = event.text.parse::<SpeechToken>() else {
        tracing::debug!(text = %event.text, "ignoring unknown speech token");
        return CommandOutcome::Ignored;
    };
    let threshold = match token {
        SpeechToken::Terminate => TERMINATE_THRESHOLD,
        _ => RECOGNITION_THRESHOLD,
    };
    if event.confidence < threshold {
        tracing::debug!(
            token = %token,
            confidence = event.confidence,
            "ignoring sub-threshold speech token"
        );
        return CommandOutcome::Ignored;
    }

    let neutral = current.is_neutral();
    match token {
        SpeechToken::Transport if neutral => CommandOutcome::EnterPhase(Phase::Transport),
        SpeechToken::Stretch if neutral => CommandOutcome::EnterPhase(Phase::Stretch),
        SpeechToken::Scale if neutral => CommandOutcome::EnterPhase(Phase::Scale),
        SpeechToken::Color if neutral => CommandOutcome::EnterPhase(Phase::Color),
        SpeechToken::White if current == Phase::Color => CommandOutcome::SetColor(BoxColor::White),
        SpeechToken::Black if current == Phase::Color => CommandOutcome::SetColor(BoxColor::Black),
        SpeechToken::Red if current == Phase::Color => CommandOutcome::SetColor(BoxColor::Red),
        SpeechToken::Green if current == Phase::Color => CommandOutcome::SetColor(BoxColor::Green),
        SpeechToken::Blue if current == Phase::Color => CommandOutcome::SetColor(BoxColor::Blue),
        SpeechToken::Stop if !neutral => CommandOutcome::Stop,
        SpeechToken::Undo if neutral => CommandOutcome::Undo,
        SpeechToken::Reset if neutral => CommandOutcome::Reset,
        SpeechToken::Terminate if neutral => CommandOutcome::Terminate,
        SpeechToken::Rotate | SpeechToken::Transform => {
            tracing::debug!(token = %token, "reserved token has no wired action");
            CommandOutcome::Ignored
        }
        _ => CommandOutcome::Ignored,
    }
}
