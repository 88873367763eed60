//! The flat configuration record persisted by the clock.
//!
//! Field names serialize in camelCase (`bgColor`, `handColor`, `unitBg`,
//! `unitBorder`, `borderRadius`, `borderWidth`, `size`, `speed`) so a stored
//! record stays a plain key/value object. Loading goes through
//! `Config::from_json_lenient` only, which owns the per-field defaults.

use crate::themes::{Color, ThemeColors, ThemePreset};
use serde::Serialize;
use serde_json::{Map, Value};
use std::ops::RangeInclusive;

/// Clock appearance settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Page background behind the clock face
    pub bg_color: Color,

    /// Color of every hand and center dot
    pub hand_color: Color,

    /// Fill of each two-hand cell
    pub unit_bg: Color,

    /// Outline of each two-hand cell
    pub unit_border: Color,

    /// Cell corner radius in percent of the cell side (0 = square, 50 = circle)
    pub border_radius: u32,

    /// Cell outline width in logical pixels
    pub border_width: f32,

    /// Face scale in percent
    pub size: u32,

    /// Hand rotation transition time in milliseconds
    pub speed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bg_color: crate::defaults::bg_color(),
            hand_color: crate::defaults::hand_color(),
            unit_bg: crate::defaults::unit_bg(),
            unit_border: crate::defaults::unit_border(),
            border_radius: crate::defaults::border_radius(),
            border_width: crate::defaults::border_width(),
            size: crate::defaults::size(),
            speed: crate::defaults::speed(),
        }
    }
}

impl Config {
    pub const BORDER_RADIUS_RANGE: RangeInclusive<u32> = 0..=50;
    pub const BORDER_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=5.0;
    pub const SIZE_RANGE: RangeInclusive<u32> = 50..=150;
    pub const SPEED_RANGE: RangeInclusive<u32> = 50..=500;

    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored record, substituting defaults field by field.
    ///
    /// A field that is missing, has the wrong JSON type, or holds an invalid
    /// color falls back to its default. Numbers (or numeric strings) outside
    /// the slider range are clamped into it. Text that is not a JSON object
    /// yields the full default record.
    pub fn from_json_lenient(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Stored config is not valid JSON, using defaults: {}", e);
                return Self::default();
            }
        };
        let Some(fields) = value.as_object() else {
            log::warn!("Stored config is not a JSON object, using defaults");
            return Self::default();
        };

        let mut config = Self::default();
        if let Some(color) = color_field(fields, "bgColor") {
            config.bg_color = color;
        }
        if let Some(color) = color_field(fields, "handColor") {
            config.hand_color = color;
        }
        if let Some(color) = color_field(fields, "unitBg") {
            config.unit_bg = color;
        }
        if let Some(color) = color_field(fields, "unitBorder") {
            config.unit_border = color;
        }
        if let Some(value) = number_field(fields, "borderRadius") {
            config.border_radius = clamp_u32(value, &Self::BORDER_RADIUS_RANGE);
        }
        if let Some(value) = number_field(fields, "borderWidth") {
            config.border_width = clamp_f32(value, &Self::BORDER_WIDTH_RANGE);
        }
        if let Some(value) = number_field(fields, "size") {
            config.size = clamp_u32(value, &Self::SIZE_RANGE);
        }
        if let Some(value) = number_field(fields, "speed") {
            config.speed = clamp_u32(value, &Self::SPEED_RANGE);
        }
        config
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Copy of this record with every numeric field clamped into its range.
    pub fn clamped(mut self) -> Self {
        self.border_radius = clamp_u32(self.border_radius as f64, &Self::BORDER_RADIUS_RANGE);
        self.border_width = clamp_f32(self.border_width as f64, &Self::BORDER_WIDTH_RANGE);
        self.size = clamp_u32(self.size as f64, &Self::SIZE_RANGE);
        self.speed = clamp_u32(self.speed as f64, &Self::SPEED_RANGE);
        self
    }

    pub fn theme_colors(&self) -> ThemeColors {
        ThemeColors {
            bg_color: self.bg_color,
            hand_color: self.hand_color,
            unit_bg: self.unit_bg,
            unit_border: self.unit_border,
        }
    }

    /// Overwrite the four color fields; numeric settings are left untouched.
    pub fn apply_theme_colors(&mut self, colors: ThemeColors) {
        self.bg_color = colors.bg_color;
        self.hand_color = colors.hand_color;
        self.unit_bg = colors.unit_bg;
        self.unit_border = colors.unit_border;
    }

    pub fn apply_preset(&mut self, preset: ThemePreset) {
        self.apply_theme_colors(preset.colors());
    }

    /// The preset whose colors match the current ones, if any.
    pub fn active_preset(&self) -> Option<ThemePreset> {
        ThemePreset::matching(&self.theme_colors())
    }

    /// Face scale as a multiplier (100% = 1.0)
    pub fn scale(&self) -> f32 {
        self.size as f32 / 100.0
    }

    /// Hand transition time in seconds
    pub fn animation_secs(&self) -> f32 {
        self.speed as f32 / 1000.0
    }
}

fn color_field(fields: &Map<String, Value>, key: &str) -> Option<Color> {
    let value = fields.get(key)?;
    let color = value.as_str().and_then(Color::parse_hex);
    if color.is_none() {
        log::warn!("Ignoring invalid stored color for {}: {}", key, value);
    }
    color
}

fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = fields.get(key)?;
    let number = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|n| n.is_finite());
    if number.is_none() {
        log::warn!("Ignoring invalid stored number for {}: {}", key, value);
    }
    number
}

fn clamp_u32(value: f64, range: &RangeInclusive<u32>) -> u32 {
    value
        .round()
        .clamp(*range.start() as f64, *range.end() as f64) as u32
}

fn clamp_f32(value: f64, range: &RangeInclusive<f32>) -> f32 {
    (value as f32).clamp(*range.start(), *range.end())
}
