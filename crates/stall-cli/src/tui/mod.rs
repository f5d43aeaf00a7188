//! Terminal user interface for stall.
//!
//! One full-screen view: the product grid with search and category
//! filtering, a toggleable cart panel, a non-blocking detail pane, and a
//! contact form dialog.

pub mod app;
pub mod contact;

use anyhow::Result;
use app::StorefrontApp;
use crossterm::event::{self, Event, KeyEventKind};
use stall_core::error::ErrorCode;
use stall_core::storefront::Storefront;
use std::time::Duration;

/// How long to wait for input before a redraw tick.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the storefront TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be initialized or event
/// reading fails.
pub fn run(front: Storefront) -> Result<()> {
    let mut terminal = ratatui::try_init().map_err(|err| {
        tracing::error!(code = %ErrorCode::TerminalInitFailed, "{err}");
        anyhow::anyhow!("{}: {err}", ErrorCode::TerminalInitFailed.message())
    })?;
    let result = event_loop(&mut terminal, StorefrontApp::new(front));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, mut app: StorefrontApp) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app::render_into(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        app.tick();
    }
    Ok(())
}
