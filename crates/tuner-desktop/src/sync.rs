//! One-time preference replay after the window's first content load.
//!
//! The window cannot render preference-driven UI before its content is up,
//! so the persisted state is applied here once. Later preference changes
//! propagate through the normal event paths, never through this again.

use crate::{dock, events, state::AppState};
use tauri::{AppHandle, Manager};
use tuner_core::catch_up_events;

pub fn catch_up(app: &AppHandle) {
    let state = app.state::<AppState>();
    if !state.first_load() {
        return;
    }

    let settings = state.with_settings(|s| s.clone());
    if settings.hide_dock {
        // The flag is already persisted; only the runtime effect applies.
        dock::apply_hidden(app, true);
    }
    for event in catch_up_events(&settings) {
        events::emit_to_player(app, &event);
    }
}
