use std::sync::Arc;

use shared::{
    domain::{Phase, SpeechEventKind},
    geometry::CanvasSize,
    protocol::{
        CursorPair, CursorStyle, InputEvent, LabelOpacities, RenderFrame, SpeechEvent,
        TrackingFrame,
    },
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    box_model::BoxModel,
    dispatcher::{dispatch, CommandOutcome},
    gesture::{scale_frame, stretch_frame, transport_frame},
    phase::PhaseController,
    sink::RenderSink,
    snapshot::SnapshotStore,
    zones::{highlight_segments, ZoneSet},
};

/// Whether the event loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Terminate,
}

/// Single-writer owner of all interaction state. Both producers (sensor
/// frames, speech results) are serialized through one ordered channel and
/// applied here, so a phase transition can never interleave with an
/// in-progress gesture mutation.
pub struct InteractionSession {
    canvas: CanvasSize,
    bx: BoxModel,
    snapshots: SnapshotStore,
    controller: PhaseController,
    prev_frame: Option<TrackingFrame>,
    sink: Arc<dyn RenderSink>,
}

impl InteractionSession {
    pub fn new(canvas: CanvasSize, sink: Arc<dyn RenderSink>) -> Self {
        let bx = BoxModel::centered_on(canvas);
        let snapshots = SnapshotStore::new(&bx);
        Self {
            canvas,
            bx,
            snapshots,
            controller: PhaseController::new(),
            prev_frame: None,
            sink,
        }
    }

    pub fn box_model(&self) -> &BoxModel {
        &self.bx
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Drains the merged input queue until it closes or terminate is
    /// accepted. Termination between any two queued events is safe: every
    /// event is applied whole before the next is looked at.
    pub async fn run(mut self, mut events: mpsc::Receiver<InputEvent>) -> BoxModel {
        while let Some(event) = events.recv().await {
            if self.handle_event(event).await == SessionControl::Terminate {
                break;
            }
        }
        self.bx
    }

    pub async fn handle_event(&mut self, event: InputEvent) -> SessionControl {
        match event {
            InputEvent::Frame(frame) => {
                self.handle_frame(frame).await;
                SessionControl::Continue
            }
            InputEvent::Speech(speech) => self.handle_speech(speech).await,
        }
    }

    pub async fn handle_frame(&mut self, frame: TrackingFrame) {
        let left_hand = ZoneSet::detect(frame.left, &self.bx);
        let right_hand = ZoneSet::detect(frame.right, &self.bx);

        match self.controller.phase() {
            Phase::Transport => transport_frame(&mut self.bx, &frame, left_hand, right_hand),
            Phase::Stretch => stretch_frame(
                &mut self.bx,
                &frame,
                self.prev_frame.as_ref(),
                left_hand,
                right_hand,
            ),
            Phase::Scale => scale_frame(
                &mut self.bx,
                &frame,
                self.prev_frame.as_ref(),
                left_hand,
                right_hand,
            ),
            Phase::Neutral | Phase::Color => {}
        }

        let style = if self.controller.is_neutral() {
            CursorStyle::Filled
        } else {
            CursorStyle::Hollow
        };
        let render = RenderFrame {
            box_view: self.bx.view(),
            cursors: CursorPair {
                left: frame.left,
                right: frame.right,
                style,
            },
            highlights: highlight_segments(left_hand, right_hand, &self.bx),
        };
        if let Err(err) = self.sink.render(render).await {
            warn!(error = %err, "render sink failed; frame dropped");
        }

        self.prev_frame = Some(frame);
    }

    pub async fn handle_speech(&mut self, speech: SpeechEvent) -> SessionControl {
        if speech.kind != SpeechEventKind::Recognized {
            let notice = match speech.kind {
                SpeechEventKind::Hypothesis => "Speech hypothesized".to_string(),
                _ => "Speech rejected".to_string(),
            };
            self.notify(notice).await;
            return SessionControl::Continue;
        }

        let outcome = dispatch(&speech, self.controller.phase());
        if outcome != CommandOutcome::Ignored {
            self.notify(format!(
                "Recognized \"{}\" with {:.0}% confidence",
                speech.text.to_lowercase(),
                100.0 * speech.confidence
            ))
            .await;
        }

        match outcome {
            CommandOutcome::Ignored => {
                debug!(text = %speech.text, confidence = speech.confidence, "command ignored");
            }
            CommandOutcome::EnterPhase(phase) => {
                self.snapshots.capture(&self.bx);
                self.enter_phase(phase).await;
            }
            CommandOutcome::Stop => {
                self.controller.stop();
                self.bx.clear_engagement();
                self.prev_frame = None;
                info!("stopped back to neutral");
                self.phase_changed(Phase::Neutral).await;
            }
            CommandOutcome::SetColor(color) => {
                info!(?color, "box color changed");
                self.bx.color = color;
            }
            CommandOutcome::Undo => {
                self.bx = self.snapshots.restore();
                info!("restored box from snapshot");
            }
            CommandOutcome::Reset => {
                self.bx = BoxModel::centered_on(self.canvas);
                info!("reset box to default");
            }
            CommandOutcome::Terminate => {
                info!("terminate accepted; ending session");
                return SessionControl::Terminate;
            }
        }
        SessionControl::Continue
    }

    async fn enter_phase(&mut self, phase: Phase) {
        if !self.controller.try_enter(phase) {
            // dispatch() already consulted the phase, so this branch only
            // guards against table drift.
            warn!(?phase, "phase transition rejected by controller");
            return;
        }
        self.bx.clear_engagement();
        self.prev_frame = None;
        info!(?phase, "entered phase");
        self.phase_changed(phase).await;
    }

    async fn phase_changed(&self, phase: Phase) {
        let labels = LabelOpacities::for_phase(phase);
        if let Err(err) = self.sink.phase_changed(phase, labels).await {
            warn!(error = %err, "render sink failed on phase change");
        }
    }

    async fn notify(&self, message: String) {
        if let Err(err) = self.sink.diagnostic(message).await {
            warn!(error = %err, "render sink failed on diagnostic");
        }
    }
}
