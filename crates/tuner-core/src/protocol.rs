//! Message protocol between the backend and the player window.
//!
//! Both directions are fire-and-forget notifications identified by a string
//! tag plus an optional payload. Delivery is best-effort and at-most-once;
//! the protocol carries no version, so unknown tags are tolerated silently
//! instead of being reported as errors.

use crate::settings::Settings;

/// Which of the two tray icon images is shown. Visual only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

/// Built-in stream presets the window can select without going through the
/// add-source prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationPreset {
    AhFm,
    Revolution,
}

impl StationPreset {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ahFm" => Some(StationPreset::AhFm),
            "revolution" => Some(StationPreset::Revolution),
            _ => None,
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            StationPreset::AhFm => "http://us2.ah.fm/192k/;stream/1",
            StationPreset::Revolution => "https://revolutionradio.ru:8443/live.mp3",
        }
    }
}

/// Requests the player window sends to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRequest {
    SetTrayPlay,
    SetTrayPause,
    ToggleDockSetting,
    OpenAddAudio,
    SaveDefault(StationPreset),
}

impl PlayerRequest {
    /// Unknown tags (including unknown `save-default-*` names) map to
    /// `None` and are dropped by the dispatcher.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "set-tray-play" => Some(PlayerRequest::SetTrayPlay),
            "set-tray-pause" => Some(PlayerRequest::SetTrayPause),
            "toggle-dock-setting" => Some(PlayerRequest::ToggleDockSetting),
            "open-add-audio" => Some(PlayerRequest::OpenAddAudio),
            _ => tag
                .strip_prefix("save-default-")
                .and_then(StationPreset::parse)
                .map(PlayerRequest::SaveDefault),
        }
    }
}

/// Notifications the backend sends to the player window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    TrayClicked,
    SourceUpdate(String),
    DockSettingEnabled,
}

impl PlayerEvent {
    /// Event channel name on the wire.
    pub fn channel(&self) -> &'static str {
        match self {
            PlayerEvent::TrayClicked => "tray-clicked",
            PlayerEvent::SourceUpdate(_) => "source-update",
            PlayerEvent::DockSettingEnabled => "dock-setting-enabled",
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            PlayerEvent::SourceUpdate(url) => Some(url),
            _ => None,
        }
    }
}

/// One-time catch-up after the window's first content load: replays the
/// persisted preferences so the UI can render them. Later preference changes
/// flow through the normal event paths, never through this again.
pub fn catch_up_events(settings: &Settings) -> Vec<PlayerEvent> {
    let mut events = Vec::new();
    if settings.hide_dock {
        events.push(PlayerEvent::DockSettingEnabled);
    }
    if let Some(url) = &settings.audio_source {
        events.push(PlayerEvent::SourceUpdate(url.clone()));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_tag() {
        assert_eq!(
            PlayerRequest::parse("set-tray-play"),
            Some(PlayerRequest::SetTrayPlay)
        );
        assert_eq!(
            PlayerRequest::parse("set-tray-pause"),
            Some(PlayerRequest::SetTrayPause)
        );
        assert_eq!(
            PlayerRequest::parse("toggle-dock-setting"),
            Some(PlayerRequest::ToggleDockSetting)
        );
        assert_eq!(
            PlayerRequest::parse("open-add-audio"),
            Some(PlayerRequest::OpenAddAudio)
        );
        assert_eq!(
            PlayerRequest::parse("save-default-ahFm"),
            Some(PlayerRequest::SaveDefault(StationPreset::AhFm))
        );
        assert_eq!(
            PlayerRequest::parse("save-default-revolution"),
            Some(PlayerRequest::SaveDefault(StationPreset::Revolution))
        );
    }

    #[test]
    fn unknown_tags_are_ignored() {
        assert_eq!(PlayerRequest::parse(""), None);
        assert_eq!(PlayerRequest::parse("set-tray-stop"), None);
        assert_eq!(PlayerRequest::parse("save-default-"), None);
        assert_eq!(PlayerRequest::parse("save-default-someFm"), None);
        assert_eq!(PlayerRequest::parse("SAVE-DEFAULT-ahFm"), None);
    }

    #[test]
    fn event_channels_and_payloads() {
        let update = PlayerEvent::SourceUpdate("http://example.org".to_string());
        assert_eq!(update.channel(), "source-update");
        assert_eq!(update.payload(), Some("http://example.org"));
        assert_eq!(PlayerEvent::TrayClicked.channel(), "tray-clicked");
        assert_eq!(PlayerEvent::TrayClicked.payload(), None);
        assert_eq!(
            PlayerEvent::DockSettingEnabled.channel(),
            "dock-setting-enabled"
        );
    }

    #[test]
    fn empty_store_produces_no_catch_up() {
        assert!(catch_up_events(&Settings::default()).is_empty());
    }

    #[test]
    fn full_store_produces_both_events_once() {
        let settings = Settings {
            hide_dock: true,
            audio_source: Some("X".to_string()),
        };
        assert_eq!(
            catch_up_events(&settings),
            vec![
                PlayerEvent::DockSettingEnabled,
                PlayerEvent::SourceUpdate("X".to_string()),
            ]
        );
    }

    #[test]
    fn source_only_store_skips_the_dock_event() {
        let settings = Settings {
            hide_dock: false,
            audio_source: Some("http://example.org".to_string()),
        };
        assert_eq!(
            catch_up_events(&settings),
            vec![PlayerEvent::SourceUpdate("http://example.org".to_string())]
        );
    }
}
