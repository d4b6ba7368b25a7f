use crate::state::AppState;
use anyhow::Result;
use tauri::{AppHandle, Manager};
use tuner_core::DockVisibility;

/// Flip the dock setting: persist the new flag, apply the platform effect,
/// and surface the main window when the dock icon goes away.
pub fn toggle_dock_setting(app: &AppHandle) -> Result<()> {
    let state = app.state::<AppState>();
    let change = state.with_settings_mut(|settings| {
        let mut dock = DockVisibility::from_hidden(settings.hide_dock);
        let change = dock.toggle();
        settings.hide_dock = change.hide_dock;
        settings.save()?;
        Ok::<_, anyhow::Error>(change)
    })?;

    apply_hidden(app, change.hide_dock);
    if change.surface_window {
        crate::show_main_window(app);
    }
    Ok(())
}

/// Platform side of dock visibility. Best-effort; the persisted flag is the
/// source of truth either way.
pub fn apply_hidden(app: &AppHandle, hidden: bool) {
    #[cfg(target_os = "macos")]
    {
        use tauri::ActivationPolicy;
        let policy = if hidden {
            ActivationPolicy::Accessory
        } else {
            ActivationPolicy::Regular
        };
        if let Err(e) = app.set_activation_policy(policy) {
            log::warn!("failed to update dock visibility: {e}");
        }
    }
    #[cfg(not(target_os = "macos"))]
    {
        if let Some(window) = app.get_webview_window(crate::MAIN_WINDOW) {
            if let Err(e) = window.set_skip_taskbar(hidden) {
                log::warn!("failed to update taskbar visibility: {e}");
            }
        }
    }
}
