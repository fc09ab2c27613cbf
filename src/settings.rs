//! Host settings
//!
//! Only presentation and loop concerns live here. Gameplay constants
//! (field size, speeds, grid) are fixed in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_DELAY_MS, MAX_SUBSTEPS};
use crate::error::SettingsError;

/// Key names bound to each action (browser-style `KeyboardEvent.key` names)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub pause: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into(), "A".into()],
            right: vec!["ArrowRight".into(), "d".into(), "D".into()],
            pause: vec!["Escape".into()],
        }
    }
}

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds per simulation tick
    pub frame_delay_ms: u64,
    /// Maximum ticks run per host frame when catching up
    pub max_substeps: u32,

    pub keys: KeyBindings,

    // === End-of-round images (logical asset names) ===
    pub win_image: String,
    pub lose_image: String,

    // === Demo ===
    /// Let the autopilot steer the paddle
    pub autopilot: bool,
    /// Ticks to run in the headless binary
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
            max_substeps: MAX_SUBSTEPS,
            keys: KeyBindings::default(),
            win_image: "win".into(),
            lose_image: "lose".into(),
            autopilot: true,
            demo_ticks: 60 * 60 * 5,
        }
    }
}

impl Settings {
    /// Reject values the host loop cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_delay_ms == 0 {
            return Err(SettingsError::Invalid("frame_delay_ms must be positive".into()));
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::Invalid("max_substeps must be positive".into()));
        }
        let keys = &self.keys;
        if keys.left.is_empty() || keys.right.is_empty() || keys.pause.is_empty() {
            return Err(SettingsError::Invalid("every action needs at least one key".into()));
        }
        if let Some(k) = keys
            .pause
            .iter()
            .find(|k| keys.left.contains(*k) || keys.right.contains(*k))
        {
            return Err(SettingsError::Invalid(format!(
                "key {k:?} is bound to pause and movement"
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
