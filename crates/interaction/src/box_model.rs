use shared::{domain::BoxColor, geometry::CanvasSize, protocol::BoxView};

pub const MIN_WIDTH: f64 = 20.0;
pub const MIN_HEIGHT: f64 = 20.0;
pub const DEFAULT_WIDTH: f64 = 75.0;
pub const DEFAULT_HEIGHT: f64 = 75.0;

/// The on-screen rectangle: geometry, color, and per-phase engagement flags.
/// At most one engagement flag is true at a time; the session clears them on
/// every phase transition.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub color: BoxColor,
    pub is_moving: bool,
    pub is_stretching: bool,
    pub is_scaling: bool,
}

impl BoxModel {
    /// Fresh default box centered on the canvas. Used at session start and
    /// for "reset".
    pub fn centered_on(canvas: CanvasSize) -> Self {
        let center = canvas.center();
        Self {
            left: center.x - DEFAULT_WIDTH / 2.0,
            top: center.y - DEFAULT_HEIGHT / 2.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: BoxColor::default(),
            is_moving: false,
            is_stretching: false,
            is_scaling: false,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `None` when the ratio is undefined; scale frames no-op in that case
    /// instead of dividing by zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    pub fn engaged(&self) -> bool {
        self.is_moving || self.is_stretching || self.is_scaling
    }

    pub fn clear_engagement(&mut self) {
        self.is_moving = false;
        self.is_stretching = false;
        self.is_scaling = false;
    }

    /// Structural copy with engagement flags reset, suitable for undo.
    pub fn snapshot(&self) -> Self {
        Self {
            is_moving: false,
            is_stretching: false,
            is_scaling: false,
            ..self.clone()
        }
    }

    pub fn view(&self) -> BoxView {
        BoxView {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            color: self.color,
        }
    }
}
