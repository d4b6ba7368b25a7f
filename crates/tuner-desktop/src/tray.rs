use crate::state::AppState;
use tauri::{
    AppHandle, Manager, WebviewUrl, WebviewWindowBuilder,
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
};
use tuner_core::{Playback, PlayerEvent};

// Static icons for each playback state (pre-loaded at compile time)
const ICON_PLAY: &[u8] = include_bytes!("../icons/play.png");
const ICON_PAUSE: &[u8] = include_bytes!("../icons/pause.png");

pub const TRAY_ID: &str = "tuner-tray";

const ABOUT_WINDOW: &str = "about";

pub fn setup_tray(app: &tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    let about = MenuItem::with_id(app, "about", "About", true, None::<&str>)?;
    let open = MenuItem::with_id(app, "open", "Open Player", true, None::<&str>)?;
    let sep = PredefinedMenuItem::separator(app)?;
    let quit = MenuItem::with_id(app, "quit", "Quit Tuner", true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&about, &open, &sep, &quit])?;

    // An undecodable bundled icon is a startup error, not a runtime one.
    let icon = decode_icon(ICON_PLAY).expect("failed to decode tray icon");

    let _tray = TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .tooltip("Tuner")
        .on_menu_event(|app, event| match event.id.as_ref() {
            "about" => open_about_window(app.clone()),
            "open" => crate::show_main_window(app),
            "quit" => {
                // Quit intent must be visible before the close requests land,
                // otherwise the main window would convert them into hides.
                app.state::<AppState>().request_quit();
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            // Primary activation is forwarded as-is; the window decides
            // whether it means play or pause and reports back.
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                crate::events::emit_to_player(tray.app_handle(), &PlayerEvent::TrayClicked);
            }
        })
        .build(app)?;

    Ok(())
}

/// Swap the displayed tray image. Best-effort at runtime.
pub fn set_playback_icon(app: &AppHandle, playback: Playback) {
    let Some(tray) = app.tray_by_id(TRAY_ID) else {
        return;
    };
    let bytes = match playback {
        Playback::Playing => ICON_PLAY,
        Playback::Paused => ICON_PAUSE,
    };
    match decode_icon(bytes) {
        Ok(icon) => {
            if let Err(e) = tray.set_icon(Some(icon)) {
                log::warn!("failed to set tray icon: {e}");
            }
        }
        Err(e) => log::warn!("failed to decode tray icon: {e}"),
    }
}

fn decode_icon(bytes: &[u8]) -> Result<Image<'static>, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Image::new_owned(rgba.into_raw(), width, height))
}

fn open_about_window(app: AppHandle) {
    if let Some(window) = app.get_webview_window(ABOUT_WINDOW) {
        let _ = window.show();
        let _ = window.set_focus();
        return;
    }

    let window = WebviewWindowBuilder::new(&app, ABOUT_WINDOW, WebviewUrl::App("about.html".into()))
        .title("Tuner - About")
        .inner_size(320.0, 360.0)
        .resizable(false)
        .build();

    match window {
        Ok(window) => {
            let _ = window.show();
        }
        Err(e) => log::error!("failed to create about window: {e}"),
    }
}
