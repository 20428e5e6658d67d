//! Keyboard input for the feed viewer.
//!
//! Keys only move the selection through the current snapshot or quit.  No key
//! triggers a load: the poller owns when the feed is fetched, and a new
//! snapshot arriving never changes the key map.
//!
//! ## For contributors
//!
//! Give a new binding its own [`App`] method and a `KeyCode` arm in
//! [`handle_key_event`], then list it in the status bar help drawn by
//! [`crate::ui::draw`] and in the README key table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Apply one key event to the viewer state.
///
/// Release and repeat events are dropped so a held key moves the selection
/// once per press.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}
