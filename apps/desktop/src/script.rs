use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use shared::protocol::InputEvent;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::warn;

/// Feeds a JSON-lines script of [`InputEvent`]s into the session queue,
/// standing in for the sensor and speech-engine wrappers. Frame events are
/// paced by `frame_interval` to mimic a periodic sensor; speech events are
/// delivered immediately. Blank lines and `#` comments are skipped.
pub async fn play_script(
    path: PathBuf,
    tx: mpsc::Sender<InputEvent>,
    frame_interval: Duration,
) -> Result<()> {
    let file = File::open(&path)
        .await
        .with_context(|| format!("failed to open script '{}'", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = match serde_json::from_str::<InputEvent>(line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line = line_no, error = %err, "skipping malformed script line");
                continue;
            }
        };
        let is_frame = matches!(event, InputEvent::Frame(_));
        if tx.send(event).await.is_err() {
            // Session terminated; the rest of the script is moot.
            break;
        }
        if is_frame && !frame_interval.is_zero() {
            tokio::time::sleep(frame_interval).await;
        }
    }
    Ok(())
}
