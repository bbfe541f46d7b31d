use shared::domain::Phase;

/// Owns the current phase. Transitions are restricted to the closed table:
/// neutral may enter any active phase, any active phase may only stop back to
/// neutral. Everything else is rejected.
#[derive(Debug, Clone, Default)]
pub struct PhaseController {
    phase: Phase,
}

impl PhaseController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_neutral(&self) -> bool {
        self.phase.is_neutral()
    }

    /// Neutral → active. Returns false for self-transitions, for `Neutral` as
    /// a target, and whenever another phase is already active.
    pub fn try_enter(&mut self, target: Phase) -> bool {
        if self.phase == Phase::Neutral && target != Phase::Neutral {
            self.phase = target;
            true
        } else {
            false
        }
    }

    /// Active → neutral. Returns false when already neutral.
    pub fn stop(&mut self) -> bool {
        if self.phase == Phase::Neutral {
            false
        } else {
            self.phase = Phase::Neutral;
            true
        }
    }
}
