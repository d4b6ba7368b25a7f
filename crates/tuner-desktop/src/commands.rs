//! Tauri command handlers: the backend end of the player protocol.

use crate::{add_source, dock, state::AppState, tray};
use tauri::{AppHandle, State};
use tuner_core::{Playback, PlayerRequest};

/// Single entry point for the window's fire-and-forget notifications.
/// Unknown tags are dropped without an error; the protocol is unversioned.
#[tauri::command]
pub async fn player_message(
    app: AppHandle,
    state: State<'_, AppState>,
    tag: String,
) -> Result<(), String> {
    let Some(request) = PlayerRequest::parse(&tag) else {
        log::debug!("ignoring unknown player message {tag:?}");
        return Ok(());
    };

    match request {
        PlayerRequest::SetTrayPlay => tray::set_playback_icon(&app, Playback::Playing),
        PlayerRequest::SetTrayPause => tray::set_playback_icon(&app, Playback::Paused),
        PlayerRequest::ToggleDockSetting => {
            dock::toggle_dock_setting(&app).map_err(|e| e.to_string())?;
        }
        PlayerRequest::SaveDefault(preset) => {
            // Persisted for the next launch; no notification back to the
            // window, it already knows which preset it picked.
            state
                .with_settings_mut(|settings| {
                    settings.audio_source = Some(preset.url().to_string());
                    settings.save()
                })
                .map_err(|e| e.to_string())?;
        }
        PlayerRequest::OpenAddAudio => add_source::open_add_audio(app).await,
    }
    Ok(())
}

/// Resolution target for the add-source prompt window.
#[tauri::command]
pub fn submit_source_input(app: AppHandle, value: Option<String>) {
    add_source::resolve_prompt(&app, value);
}
