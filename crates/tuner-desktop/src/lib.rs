mod add_source;
mod commands;
mod dock;
mod events;
mod state;
mod sync;
mod tray;

use state::AppState;
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use tuner_core::Settings;

pub const MAIN_WINDOW: &str = "main";

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tuner=info"))
        .init();

    // An existing but unreadable store is unrecoverable; refuse to start.
    let settings = Settings::load().expect("failed to read the settings store");

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            // Launching a second instance acts like an activate.
            show_main_window(app);
        }))
        .manage(AppState::new(settings))
        .setup(|app| {
            tray::setup_tray(app)?;
            WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::App("index.html".into()))
                .title("Tuner")
                .inner_size(580.0, 580.0)
                .build()?;
            Ok(())
        })
        .on_window_event(|window, event| match event {
            // Close converts into hide until quit intent is set; the window
            // and its content survive for the next Open Player.
            tauri::WindowEvent::CloseRequested { api, .. }
                if window.label() == MAIN_WINDOW =>
            {
                let state = window.state::<AppState>();
                if !state.quit_requested() {
                    api.prevent_close();
                    let _ = window.hide();
                }
            }
            tauri::WindowEvent::Destroyed if window.label() == add_source::PROMPT_WINDOW => {
                add_source::prompt_closed(window.app_handle());
            }
            _ => {}
        })
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), tauri::webview::PageLoadEvent::Finished)
                && webview.label() == MAIN_WINDOW
            {
                sync::catch_up(webview.app_handle());
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::player_message,
            commands::submit_source_input,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| match event {
        // The before-quit point: from here on a close request really closes.
        tauri::RunEvent::ExitRequested { .. } => {
            app.state::<AppState>().request_quit();
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen { .. } => show_main_window(app),
        _ => {}
    });
}

pub(crate) fn show_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
        let _ = window.show();
        let _ = window.set_focus();
    }
}
