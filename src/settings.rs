//! Player settings
//!
//! Persisted in LocalStorage on the web. Native builds read overrides from
//! the environment instead.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_QUESTIONS_PER_BATTLE, GRADE_STEP};
use crate::quiz::GradeBand;

/// Settings/preferences the battle shell keeps between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Current grade level (0.0 = start of kindergarten)
    pub grade: f64,
    /// Fixed seed for reproducible question sequences; `None` uses entropy
    pub seed: Option<u64>,
    /// Questions asked per battle
    pub questions_per_battle: u32,
    /// Raise the grade after each won battle
    pub auto_advance: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grade: 0.0,
            seed: None,
            questions_per_battle: DEFAULT_QUESTIONS_PER_BATTLE,
            auto_advance: true,
        }
    }
}

impl Settings {
    /// Environment variables read by native builds
    pub const ENV_GRADE: &'static str = "MATH_NINJA_GRADE";
    pub const ENV_SEED: &'static str = "MATH_NINJA_SEED";
    pub const ENV_QUESTIONS: &'static str = "MATH_NINJA_QUESTIONS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn band(&self) -> GradeBand {
        GradeBand::of(self.grade)
    }

    /// Level up by one half grade. Returns the new grade.
    pub fn advance_grade(&mut self) -> f64 {
        self.grade += GRADE_STEP;
        log::info!("Grade advanced to {}", self.grade);
        self.grade
    }

    /// Apply overrides from `lookup` (environment-style key/value source).
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(Self::ENV_GRADE) {
            match raw.trim().parse::<f64>() {
                Ok(grade) if grade.is_finite() && grade >= 0.0 => self.grade = grade,
                _ => log::warn!("Ignoring {}={raw:?}", Self::ENV_GRADE),
            }
        }
        if let Some(raw) = lookup(Self::ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={raw:?}", Self::ENV_SEED),
            }
        }
        if let Some(raw) = lookup(Self::ENV_QUESTIONS) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => self.questions_per_battle = n,
                _ => log::warn!("Ignoring {}={raw:?}", Self::ENV_QUESTIONS),
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "math_ninja_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Discarding stored settings: {e}"),
                }
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

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Defaults plus environment overrides
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut settings = Self::default();
        settings.apply_overrides(|key| std::env::var(key).ok());
        log::info!("Loaded settings: {settings:?}");
        settings
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
