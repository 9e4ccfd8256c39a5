//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use crate::message::Message;
use elong_core::prelude::*;

/// Listen for a termination signal, then ask the update loop to quit
///
/// Runs until the first signal arrives. Spawned next to the event loop so
/// Ctrl+C at the shell and a closing terminal both end as an ordinary
/// `Message::Quit` with a clean restore.
pub async fn quit_on_signal(tx: mpsc::Sender<Message>) {
    match wait_for_signal().await {
        Ok(name) => {
            info!("{} received, shutting down", name);
            let _ = tx.send(Message::Quit).await;
        }
        Err(e) => error!("Signal listener failed: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
        _ = sighup.recv() => Ok("SIGHUP"),
    }
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
