use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tuner_core::Settings;

pub struct AppState {
    /// In-memory mirror of the persisted store. Mutations save the store in
    /// the same locked section.
    pub settings: Mutex<Settings>,
    /// Set exactly once, right before teardown; gates close-to-hide.
    should_quit: AtomicBool,
    /// Whether the first-load catch-up has already run.
    synced: AtomicBool,
    /// Outcome channel for the add-source prompt, if one is open. Dropping
    /// the sender reads as a cancel on the awaiting side.
    pub pending_prompt: Mutex<Option<oneshot::Sender<Option<String>>>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
            should_quit: AtomicBool::new(false),
            synced: AtomicBool::new(false),
            pending_prompt: Mutex::new(None),
        }
    }

    /// Read settings with a closure
    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Settings) -> R,
    {
        f(&self.settings.lock().unwrap())
    }

    /// Modify settings with a closure
    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Settings) -> R,
    {
        f(&mut self.settings.lock().unwrap())
    }

    pub fn quit_requested(&self) -> bool {
        self.should_quit.load(Ordering::SeqCst)
    }

    pub fn request_quit(&self) {
        self.should_quit.store(true, Ordering::SeqCst);
    }

    /// True exactly once, on the first call.
    pub fn first_load(&self) -> bool {
        !self.synced.swap(true, Ordering::SeqCst)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_fires_once() {
        let state = AppState::default();
        assert!(state.first_load());
        assert!(!state.first_load());
        assert!(!state.first_load());
    }

    #[test]
    fn quit_intent_starts_unset() {
        let state = AppState::default();
        assert!(!state.quit_requested());
        state.request_quit();
        assert!(state.quit_requested());
    }
}
