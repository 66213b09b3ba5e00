//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;
use wikiquiz_api::QuizApi;
use wikiquiz_app::config::Settings;
use wikiquiz_app::process::process_message;
use wikiquiz_app::signals;
use wikiquiz_app::{ActionContext, AppState, Message};
use wikiquiz_core::prelude::*;

use super::{event, render, terminal::TerminalGuard};

/// Run the TUI against `client` until the user quits.
pub async fn run<C>(settings: &Settings, client: C) -> Result<()>
where
    C: QuizApi + Send + Sync + 'static,
{
    info!(
        "Starting with API base {} (debounce {}ms)",
        settings.api.base_url, settings.preview.debounce_ms
    );

    let mut guard = TerminalGuard::init();
    let mut state = AppState::new(settings);

    // Results from background tasks, timers and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(Arc::new(client), msg_tx);
    let result = run_loop(guard.terminal_mut(), &mut state, msg_rx, &mut ctx);

    info!("Shutting down");
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &mut ActionContext<C>,
) -> Result<()>
where
    C: QuizApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results and timer firings (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal input")? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}
