//! Default values for the configuration record.
//!
//! Color defaults come from the `default` theme preset; the numeric
//! defaults match the initial slider positions of the settings panel.

use crate::themes::{Color, ThemePreset};

pub fn bg_color() -> Color {
    ThemePreset::Default.colors().bg_color
}

pub fn hand_color() -> Color {
    ThemePreset::Default.colors().hand_color
}

pub fn unit_bg() -> Color {
    ThemePreset::Default.colors().unit_bg
}

pub fn unit_border() -> Color {
    ThemePreset::Default.colors().unit_border
}

/// Corner radius as a percentage of the cell side (50 = circle)
pub fn border_radius() -> u32 {
    50
}

/// Cell border width in logical pixels
pub fn border_width() -> f32 {
    2.0
}

/// Face scale in percent
pub fn size() -> u32 {
    100
}

/// Hand rotation transition time in milliseconds
pub fn speed() -> u32 {
    250
}
