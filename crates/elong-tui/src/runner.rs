//! TUI entry point and event loop

use tokio::sync::mpsc;

use elong_api::ApiClient;
use elong_app::config::Settings;
use elong_app::message::Message;
use elong_app::state::AppState;
use elong_app::{process, signals};
use elong_core::prelude::*;

use super::{event, render, terminal};

/// Capacity of the channel carrying task results back to the loop
const MESSAGE_BUFFER: usize = 256;

/// Run the TUI application until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    // Build the shorten client before touching the terminal; a bad
    // endpoint should fail while stderr is still visible
    let base_url = settings.api.parsed_base_url()?;
    let client = ApiClient::new(&base_url, settings.api.timeout())?;
    info!("Shorten endpoint: {}", client.shorten_endpoint());

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);
    tokio::spawn(signals::quit_on_signal(msg_tx.clone()));

    let result =
        event_loop(&mut term, &mut state, msg_rx, msg_tx, &client).context("event loop failed");

    ratatui::restore();
    result
}

/// Drive the render/input/update cycle
///
/// Wakes on every terminal event or poll timeout, drains completion
/// messages from background tasks first, then draws the current state.
fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &ApiClient,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, client);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}
