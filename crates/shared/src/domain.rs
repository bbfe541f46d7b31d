use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Interaction mode gating which gesture engine and which commands are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Neutral,
    Transport,
    Stretch,
    Scale,
    Color,
}

impl Phase {
    pub fn is_neutral(self) -> bool {
        self == Phase::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxColor {
    White,
    Black,
    Red,
    Green,
    #[default]
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Closed speech vocabulary. `Rotate` and `Transform` are recognized by the
/// grammar but reserved; they are never wired to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechToken {
    Stretch,
    Transport,
    Rotate,
    Scale,
    Transform,
    Color,
    White,
    Black,
    Red,
    Green,
    Blue,
    Stop,
    Reset,
    Undo,
    Terminate,
}

impl FromStr for SpeechToken {
    type Err = EventError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "transport" => Ok(Self::Transport),
            "rotate" => Ok(Self::Rotate),
            "scale" => Ok(Self::Scale),
            "transform" => Ok(Self::Transform),
            "color" => Ok(Self::Color),
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "stop" => Ok(Self::Stop),
            "reset" => Ok(Self::Reset),
            "undo" => Ok(Self::Undo),
            "terminate" => Ok(Self::Terminate),
            other => Err(EventError::UnknownToken(other.to_string())),
        }
    }
}

impl fmt::Display for SpeechToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Stretch => "stretch",
            Self::Transport => "transport",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Transform => "transform",
            Self::Color => "color",
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Stop => "stop",
            Self::Reset => "reset",
            Self::Undo => "undo",
            Self::Terminate => "terminate",
        };
        f.write_str(text)
    }
}

/// Which recognizer callback produced a speech event. Hypotheses and
/// rejections only ever produce a diagnostic notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechEventKind {
    #[default]
    Recognized,
    Hypothesis,
    Rejected,
}
