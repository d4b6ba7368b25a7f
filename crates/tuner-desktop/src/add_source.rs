//! Add-source flow: prompt the user for a stream URL, normalize it, commit
//! it to the store, and notify the player.

use crate::{events, state::AppState};
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use tokio::sync::oneshot;
use tuner_core::{PlayerEvent, normalize_source_url};

pub const PROMPT_WINDOW: &str = "add-source";

/// Show the prompt and wait for the user. Cancellation leaves every piece of
/// state untouched; a prompt-mechanism failure is logged and absorbed with
/// no user-visible indication.
pub async fn open_add_audio(app: AppHandle) {
    let rx = {
        let state = app.state::<AppState>();
        let mut pending = state.pending_prompt.lock().unwrap();
        if pending.is_some() {
            // One prompt at a time; surface the one that's already open.
            if let Some(window) = app.get_webview_window(PROMPT_WINDOW) {
                let _ = window.set_focus();
            }
            return;
        }
        let (tx, rx) = oneshot::channel();
        *pending = Some(tx);
        rx
    };

    let window =
        WebviewWindowBuilder::new(&app, PROMPT_WINDOW, WebviewUrl::App("prompt.html".into()))
            .title("Tuner")
            .inner_size(420.0, 180.0)
            .resizable(false)
            .always_on_top(true)
            .build();
    if let Err(e) = window {
        log::error!("failed to open the add-source prompt: {e}");
        app.state::<AppState>().pending_prompt.lock().unwrap().take();
        return;
    }

    // A dropped sender (prompt window destroyed) reads as a cancel.
    let Some(input) = rx.await.ok().flatten() else {
        return;
    };

    let url = normalize_source_url(&input);
    let saved = {
        let state = app.state::<AppState>();
        state.with_settings_mut(|settings| {
            settings.audio_source = Some(url.clone());
            settings.save()
        })
    };
    if let Err(e) = saved {
        log::error!("failed to persist the new audio source: {e}");
        return;
    }
    events::emit_to_player(&app, &PlayerEvent::SourceUpdate(url));
}

/// Resolution from the prompt window's form; `None` is a cancel.
pub fn resolve_prompt(app: &AppHandle, value: Option<String>) {
    let state = app.state::<AppState>();
    if let Some(tx) = state.pending_prompt.lock().unwrap().take() {
        let _ = tx.send(value);
    }
    if let Some(window) = app.get_webview_window(PROMPT_WINDOW) {
        let _ = window.close();
    }
}

/// Prompt window destroyed without a submission: dropping the sender
/// resolves the waiting flow as a cancel.
pub fn prompt_closed(app: &AppHandle) {
    let state = app.state::<AppState>();
    state.pending_prompt.lock().unwrap().take();
}
