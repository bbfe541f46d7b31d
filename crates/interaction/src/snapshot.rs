use crate::box_model::BoxModel;

/// Holds the one box copy "undo" restores. Seeded with the initial box so an
/// undo issued before any phase entry restores the default geometry.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    saved: BoxModel,
}

impl SnapshotStore {
    pub fn new(initial: &BoxModel) -> Self {
        Self {
            saved: initial.snapshot(),
        }
    }

    /// Captured on every neutral-to-active transition.
    pub fn capture(&mut self, current: &BoxModel) {
        self.saved = current.snapshot();
    }

    pub fn restore(&self) -> BoxModel {
        self.saved.clone()
    }
}
