use serde::{Deserialize, Serialize};

use crate::{
    domain::{BoxColor, Edge, Phase, SpeechEventKind},
    geometry::Point,
};

/// One sensor frame with both hands already scaled into canvas coordinates.
/// Frames without a tracked subject are never delivered; the sensor wrapper
/// simply stays silent for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingFrame {
    pub left: Point,
    pub right: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechEvent {
    pub text: String,
    pub confidence: f64,
    #[serde(default)]
    pub kind: SpeechEventKind,
}

impl SpeechEvent {
    pub fn recognized(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
            kind: SpeechEventKind::Recognized,
        }
    }
}

/// The single merged queue item: both async producers feed one ordered
/// channel so command handling can never interleave with a frame update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InputEvent {
    Frame(TrackingFrame),
    Speech(SpeechEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxView {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub color: BoxColor,
}

/// Endpoints of a box edge a hand is currently touching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub edge: Edge,
    pub start: Point,
    pub end: Point,
}

/// Cursor fill: filled while neutral, hollow while a phase is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Filled,
    Hollow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPair {
    pub left: Point,
    pub right: Point,
    pub style: CursorStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub box_view: BoxView,
    pub cursors: CursorPair,
    pub highlights: Vec<HighlightSegment>,
}

/// Per-label opacities for the UI affordances, fully determined by the phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOpacities {
    pub transport: f64,
    pub stretch: f64,
    pub scale: f64,
    pub color: f64,
    pub color_white: f64,
    pub color_black: f64,
    pub color_red: f64,
    pub color_green: f64,
    pub color_blue: f64,
    pub reset: f64,
    pub undo: f64,
    pub terminate: f64,
}

impl LabelOpacities {
    pub fn for_phase(phase: Phase) -> Self {
        let dim = |active: bool| if active { 1.0 } else { 0.5 };
        let neutral = phase.is_neutral();
        let in_color = phase == Phase::Color;
        let subs = if in_color { 1.0 } else { 0.0 };
        Self {
            transport: if neutral { 1.0 } else { dim(phase == Phase::Transport) },
            stretch: if neutral { 1.0 } else { dim(phase == Phase::Stretch) },
            scale: if neutral { 1.0 } else { dim(phase == Phase::Scale) },
            color: if neutral { 1.0 } else { dim(in_color) },
            color_white: subs,
            color_black: subs,
            color_red: subs,
            color_green: subs,
            color_blue: subs,
            reset: if neutral { 1.0 } else { 0.5 },
            undo: if neutral { 1.0 } else { 0.5 },
            terminate: if neutral { 1.0 } else { 0.5 },
        }
    }
}
