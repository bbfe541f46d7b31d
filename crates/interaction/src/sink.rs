use anyhow::Result;
use async_trait::async_trait;
use shared::{
    domain::Phase,
    protocol::{LabelOpacities, RenderFrame},
};

/// Seam to the out-of-scope rendering collaborator. Sink failures never
/// propagate into the core; the session degrades them to a warning.
#[async_trait]
pub trait RenderSink: Send + Sync {
    /// Box, cursors, and edge highlights for one processed sensor frame.
    async fn render(&self, frame: RenderFrame) -> Result<()>;

    /// Phase transition with the label opacities the new phase implies.
    async fn phase_changed(&self, phase: Phase, labels: LabelOpacities) -> Result<()>;

    /// Human-readable notification ("recognized ... with N% confidence",
    /// hypothesis/rejection notices). Purely informational.
    async fn diagnostic(&self, message: String) -> Result<()>;
}

/// Default sink for sessions running without a renderer attached.
pub struct NullRenderSink;

#[async_trait]
impl RenderSink for NullRenderSink {
    async fn render(&self, _frame: RenderFrame) -> Result<()> {
        Ok(())
    }

    async fn phase_changed(&self, _phase: Phase, _labels: LabelOpacities) -> Result<()> {
        Ok(())
    }

    async fn diagnostic(&self, _message: String) -> Result<()> {
        Ok(())
    }
}
