use tauri::{AppHandle, Emitter};
use tuner_core::PlayerEvent;

/// Fire-and-forget delivery to the player window. At-most-once: a failed
/// emit is logged and dropped, never retried.
pub fn emit_to_player(app: &AppHandle, event: &PlayerEvent) {
    let result = match event.payload() {
        Some(payload) => app.emit(event.channel(), payload),
        None => app.emit(event.channel(), ()),
    };
    if let Err(e) = result {
        log::warn!("failed to deliver {} to the player: {e}", event.channel());
    }
}
