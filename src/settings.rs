//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web build; native uses defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{AI_SPEED, DEFAULT_WINNING_SCORE};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Points needed to win the first match of a session
    pub winning_score: u32,
    /// Computer paddle speed (pixels per frame)
    pub ai_speed: f32,
    /// Fixed RNG seed for reproducible serves (random when unset)
    pub seed: Option<u64>,

    // === Display ===
    /// Draw the center divider line
    pub show_divider: bool,

    // === Accessibility ===
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            ai_speed: AI_SPEED,
            seed: None,

            show_divider: true,

            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_duel_settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break the simulation
    fn sanitized(mut self) -> Self {
        if self.winning_score == 0 {
            self.winning_score = DEFAULT_WINNING_SCORE;
        }
        if !self.ai_speed.is_finite() || self.ai_speed <= 0.0 {
            self.ai_speed = AI_SPEED;
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage {
            Some(storage) => {
                self.save_with(|key, json| storage.set_item(key, json));
            }
            None => log::warn!("LocalStorage unavailable, settings not saved"),
        }
    }

    /// Serialize and hand the JSON to `write`. Returns whether the write landed.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn save_with<F, E>(&self, write: F) -> bool
    where
        F: FnOnce(&str, &str) -> Result<(), E>,
        E: std::fmt::Debug,
    {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return false;
            }
        };
        match write(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::warn!("Failed to save settings: {:?}", e);
                false
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
