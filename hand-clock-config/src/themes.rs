/// Theme presets and the hex color type used throughout the config record
use crate::error::ConfigError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A color in RGB format, persisted as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse a `#rrggbb` hex string. Case-insensitive; the leading `#` is required.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_rgb_u32)
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness in 0.0..=1.0 (ITU-R BT.601 weights).
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::parse_hex(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid hex color: {value:?}")))
    }
}

/// The four color fields a theme preset controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg_color: Color,
    pub hand_color: Color,
    pub unit_bg: Color,
    pub unit_border: Color,
}

/// Named color palettes selectable from the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreset {
    #[default]
    Default,
    Ocean,
    Sunset,
    Forest,
    Neon,
    Dream,
}

impl ThemePreset {
    /// All presets in panel order
    pub const ALL: [ThemePreset; 6] = [
        ThemePreset::Default,
        ThemePreset::Ocean,
        ThemePreset::Sunset,
        ThemePreset::Forest,
        ThemePreset::Neon,
        ThemePreset::Dream,
    ];

    /// Stable identifier used on the command line
    pub fn name(self) -> &'static str {
        match self {
            ThemePreset::Default => "default",
            ThemePreset::Ocean => "ocean",
            ThemePreset::Sunset => "sunset",
            ThemePreset::Forest => "forest",
            ThemePreset::Neon => "neon",
            ThemePreset::Dream => "dream",
        }
    }

    /// Human-readable label for the settings panel
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Default => "Default",
            ThemePreset::Ocean => "Ocean",
            ThemePreset::Sunset => "Sunset",
            ThemePreset::Forest => "Forest",
            ThemePreset::Neon => "Neon",
            ThemePreset::Dream => "Dream",
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub const fn colors(self) -> ThemeColors {
        match self {
            ThemePreset::Default => ThemeColors {
                bg_color: Color::from_rgb_u32(0xffffff),
                hand_color: Color::from_rgb_u32(0x000000),
                unit_bg: Color::from_rgb_u32(0xfafafa),
                unit_border: Color::from_rgb_u32(0xe8e8e8),
            },
            ThemePreset::Ocean => ThemeColors {
                bg_color: Color::from_rgb_u32(0x001a33),
                hand_color: Color::from_rgb_u32(0x00bfff),
                unit_bg: Color::from_rgb_u32(0x003366),
                unit_border: Color::from_rgb_u32(0x004d99),
            },
            ThemePreset::Sunset => ThemeColors {
                bg_color: Color::from_rgb_u32(0x1e0d00),
                hand_color: Color::from_rgb_u32(0xff8c42),
                unit_bg: Color::from_rgb_u32(0x361a00),
                unit_border: Color::from_rgb_u32(0x612e00),
            },
            ThemePreset::Forest => ThemeColors {
                bg_color: Color::from_rgb_u32(0x0a1a0a),
                hand_color: Color::from_rgb_u32(0x32cd32),
                unit_bg: Color::from_rgb_u32(0x1a331a),
                unit_border: Color::from_rgb_u32(0x264d26),
            },
            ThemePreset::Neon => ThemeColors {
                bg_color: Color::from_rgb_u32(0x0d0015),
                hand_color: Color::from_rgb_u32(0xda70d6),
                unit_bg: Color::from_rgb_u32(0x1a0026),
                unit_border: Color::from_rgb_u32(0x2d0040),
            },
            ThemePreset::Dream => ThemeColors {
                bg_color: Color::from_rgb_u32(0xfdecf2),
                hand_color: Color::from_rgb_u32(0xffb6c1),
                unit_bg: Color::from_rgb_u32(0xffffff),
                unit_border: Color::from_rgb_u32(0xffe4ec),
            },
        }
    }

    /// Find the preset whose four colors exactly match `colors`, if any.
    pub fn matching(colors: &ThemeColors) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.colors() == *colors)
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| ConfigError::UnknownTheme(s.to_string()))
    }
}
