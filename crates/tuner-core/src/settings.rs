//! Persisted preference store.
//!
//! One flat JSON document at `<config_dir>/tuner/settings.json` with the
//! string keys `setting.hideDock` and `audio.source`. An absent key is a
//! valid default, not an error. Callers that mutate a field save the
//! document in the same step, so the file never diverges from the
//! in-memory state after a settings-changing operation completes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the app's dock/taskbar presence is suppressed.
    #[serde(rename = "setting.hideDock", default)]
    pub hide_dock: bool,

    /// The stream URL the user last selected, if any.
    #[serde(
        rename = "audio.source",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_source: Option<String>,
}

impl Settings {
    /// Read the store, falling back to defaults when no file exists yet.
    /// An existing but unreadable file is an error; the caller treats that
    /// as fatal at startup.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::store_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings store at {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("settings store at {} is not valid JSON", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings store at {}", path.display()))?;
        Ok(())
    }

    pub fn store_path() -> Result<PathBuf> {
        let mut path =
            dirs::config_dir().context("could not determine the user config directory")?;
        path.push("tuner");
        path.push("settings.json");
        Ok(path)
    }
}
