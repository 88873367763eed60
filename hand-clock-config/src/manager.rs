//! Loading, editing, persisting and resetting the clock configuration.
//!
//! Every mutation goes through `ConfigManager`, which clamps the record and
//! writes it back to the store immediately, so the persisted state always
//! mirrors what is on screen.

use crate::config::Config;
use crate::error::Result;
use crate::palette::UiPalette;
use crate::storage::{FileStore, KeyValueStore};
use crate::themes::{Color, ThemePreset};

/// Fixed store key holding the serialized record
pub const CONFIG_KEY: &str = "clock-config";

/// Owns the live `Config` and the store it is persisted to
pub struct ConfigManager {
    store: Box<dyn KeyValueStore>,
    config: Config,
}

impl ConfigManager {
    /// Load the record from `store`, falling back to defaults per field.
    ///
    /// A store read error is logged and treated like an empty store; the
    /// clock still starts with the default appearance.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let config = match store.get(CONFIG_KEY) {
            Ok(Some(raw)) => {
                log::info!("Loading stored config");
                Config::from_json_lenient(&raw)
            }
            Ok(None) => {
                log::info!("No stored config, using defaults");
                Config::default()
            }
            Err(e) => {
                log::error!("Failed to read stored config: {}", e);
                Config::default()
            }
        };
        Self { store, config }
    }

    /// Load from the file store in the platform config directory.
    pub fn load_default() -> Result<Self> {
        let store = FileStore::open_default()?;
        log::info!("Config dir: {:?}", store.dir());
        Ok(Self::load(Box::new(store)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Chrome colors for the current page background
    pub fn palette(&self) -> UiPalette {
        UiPalette::for_background(self.config.bg_color)
    }

    /// Raw stored record, bypassing the in-memory copy.
    pub fn stored_record(&self) -> Result<Option<String>> {
        self.store.get(CONFIG_KEY)
    }

    /// Write the current record to the store.
    pub fn save(&mut self) -> Result<()> {
        let json = self.config.to_json()?;
        self.store.set(CONFIG_KEY, &json)
    }

    /// Replace the whole record (clamped) and persist it if anything changed.
    ///
    /// Returns whether the record changed.
    pub fn replace(&mut self, config: Config) -> Result<bool> {
        let config = config.clamped();
        if config == self.config {
            return Ok(false);
        }
        self.config = config;
        self.save()?;
        Ok(true)
    }

    /// Apply an edit to a copy of the record, then `replace`.
    pub fn update(&mut self, edit: impl FnOnce(&mut Config)) -> Result<bool> {
        let mut next = self.config.clone();
        edit(&mut next);
        self.replace(next)
    }

    pub fn set_bg_color(&mut self, color: Color) -> Result<bool> {
        self.update(|c| c.bg_color = color)
    }

    pub fn set_hand_color(&mut self, color: Color) -> Result<bool> {
        self.update(|c| c.hand_color = color)
    }

    pub fn set_unit_bg(&mut self, color: Color) -> Result<bool> {
        self.update(|c| c.unit_bg = color)
    }

    pub fn set_unit_border(&mut self, color: Color) -> Result<bool> {
        self.update(|c| c.unit_border = color)
    }

    pub fn set_border_radius(&mut self, percent: u32) -> Result<bool> {
        self.update(|c| c.border_radius = percent)
    }

    pub fn set_border_width(&mut self, px: f32) -> Result<bool> {
        self.update(|c| c.border_width = px)
    }

    pub fn set_size(&mut self, percent: u32) -> Result<bool> {
        self.update(|c| c.size = percent)
    }

    pub fn set_speed(&mut self, ms: u32) -> Result<bool> {
        self.update(|c| c.speed = ms)
    }

    /// Overwrite the four color fields with `preset` and persist.
    ///
    /// Always writes, even when the colors already match, so the store
    /// holds a complete record afterwards.
    pub fn apply_preset(&mut self, preset: ThemePreset) -> Result<()> {
        log::info!("Applying theme preset {}", preset);
        self.config.apply_preset(preset);
        self.save()
    }

    /// Restore every field to its default and persist the result.
    ///
    /// The in-memory record is reset even when the store fails; the first
    /// store error is returned.
    pub fn reset(&mut self) -> Result<()> {
        log::info!("Resetting config to defaults");
        self.config = Config::default();
        let removed = self.store.remove(CONFIG_KEY);
        if let Err(e) = &removed {
            log::warn!("Failed to remove stored config: {}", e);
        }
        let saved = self.save();
        removed.and(saved)
    }
}

impl std::fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
