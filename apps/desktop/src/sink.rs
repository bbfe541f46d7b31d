use anyhow::Result;
use async_trait::async_trait;
use interaction::RenderSink;
use shared::{
    domain::Phase,
    protocol::{LabelOpacities, RenderFrame},
};
use tracing::{debug, info};

/// Render sink that narrates the session over tracing instead of drawing.
pub struct TracingRenderSink;

#[async_trait]
impl RenderSink for TracingRenderSink {
    async fn render(&self, frame: RenderFrame) -> Result<()> {
        debug!(
            left = frame.box_view.left,
            top = frame.box_view.top,
            width = frame.box_view.width,
            height = frame.box_view.height,
            color = ?frame.box_view.color,
            cursor = ?frame.cursors.style,
            highlights = frame.highlights.len(),
            "frame"
        );
        Ok(())
    }

    async fn phase_changed(&self, phase: Phase, labels: LabelOpacities) -> Result<()> {
        info!(?phase, "phase changed");
        debug!(?labels, "label opacities");
        Ok(())
    }

    async fn diagnostic(&self, message: String) -> Result<()> {
        info!("{message}");
        Ok(())
    }
}
