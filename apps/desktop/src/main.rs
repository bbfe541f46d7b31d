use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use interaction::InteractionSession;
use shared::geometry::CanvasSize;
use tokio::sync::mpsc;

mod config;
mod script;
mod sink;

#[derive(Parser, Debug)]
struct Args {
    /// JSON-lines script of tracking frames and speech events.
    #[arg(long)]
    script: PathBuf,
    /// Delay between frame events in milliseconds; overrides settings.
    #[arg(long)]
    frame_interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(ms) = args.frame_interval_ms {
        settings.frame_interval_ms = ms;
    }

    let canvas = CanvasSize::new(settings.canvas_width, settings.canvas_height);
    let (tx, rx) = mpsc::channel(settings.queue_capacity);

    let feeder = tokio::spawn(script::play_script(
        args.script,
        tx,
        Duration::from_millis(settings.frame_interval_ms),
    ));

    let session = InteractionSession::new(canvas, Arc::new(sink::TracingRenderSink));
    let final_box = session.run(rx).await;
    feeder.await??;

    println!(
        "final box: left={} top={} width={} height={} color={:?}",
        final_box.left, final_box.top, final_box.width, final_box.height, final_box.color
    );
    Ok(())
}
