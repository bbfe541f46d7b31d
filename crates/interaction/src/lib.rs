//! Interaction core: the phase state machine, zone geometry, gesture
//! engines, and snapshot/undo behind the gesture/voice box-manipulation
//! session.

pub mod box_model;
pub mod dispatcher;
pub mod gesture;
pub mod phase;
pub mod session;
pub mod sink;
pub mod snapshot;
pub mod zones;

pub use box_model::BoxModel;
pub use session::{InteractionSession, SessionControl};
pub use sink::{NullRenderSink, RenderSink};

#[cfg(test)]
mod tests;
