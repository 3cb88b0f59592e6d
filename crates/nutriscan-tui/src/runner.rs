//! Main TUI runner - entry point and event loop
//!
//! The loop is synchronous: draw, poll for one input event (or a tick on
//! timeout), run it through the TEA update, repeat until quit.

use nutriscan_app::process::process_message;
use nutriscan_app::state::AppState;
use nutriscan_core::prelude::*;

use super::{event, render};

/// Run the TUI until the user quits
pub fn run(state: &mut AppState) -> Result<()> {
    restore_on_panic();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("Terminal initialized");

    let result = run_loop(&mut term, state);

    ratatui::restore();
    info!("Terminal restored");

    result
}

/// Put the terminal back before the panic message is printed
fn restore_on_panic() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        error!("Panic: {}", info);
        previous(info);
    }));
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {}", e)))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
