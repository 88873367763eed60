//! Chrome colors (menu button, settings panel) derived from the page background.
//!
//! Dark backgrounds get light, translucent chrome; light backgrounds get dark
//! text on a frosted white panel.

use crate::themes::Color;

/// Luminance below which a background counts as dark
pub const DARK_LUMINANCE_THRESHOLD: f32 = 0.5;

/// RGBA chrome colors for the current background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPalette {
    pub is_dark: bool,
    /// Text and icon color, slightly translucent
    pub text: [u8; 4],
    /// Opaque variant of `text`
    pub text_solid: [u8; 4],
    /// Panel and button fill
    pub panel_bg: [u8; 4],
    pub border: [u8; 4],
}

impl UiPalette {
    pub fn for_background(background: Color) -> Self {
        if background.luminance() < DARK_LUMINANCE_THRESHOLD {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Chrome for dark backgrounds
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: [255, 255, 255, 230],
            text_solid: [255, 255, 255, 255],
            panel_bg: [255, 255, 255, 26],
            border: [255, 255, 255, 51],
        }
    }

    /// Chrome for light backgrounds
    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: [0, 0, 0, 204],
            text_solid: [0, 0, 0, 255],
            panel_bg: [255, 255, 255, 153],
            border: [0, 0, 0, 38],
        }
    }
}
