//! Auto-contrast foreground selection
//!
//! Picks black or white text for an arbitrary background color using the
//! WCAG relative luminance formula.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Luminance split point between black and white text.
///
/// The textbook 0.5 midpoint picks white text on mid-tone backgrounds
/// where black is clearly more legible; ~0.179 matches the AA contrast
/// crossover.
const CONTRAST_THRESHOLD: f64 = 0.179;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a #RRGGBB hex color, got `{0}`")]
    InvalidHex(String),
}

/// An opaque sRGB color decoded from a `#RRGGBB` string.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a strict 6-digit `#RRGGBB` hex string.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        fn invalid(value: &str) -> ColorParseError {
            ColorParseError::InvalidHex(value.to_string())
        }
        let hex = value.strip_prefix('#').ok_or_else(|| invalid(value))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid(value));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid(value))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// The two foreground colors auto-contrast chooses between.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    /// CSS hex value for this foreground.
    pub fn as_hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }
}

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn to_linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * to_linear(color.r) + 0.7152 * to_linear(color.g) + 0.0722 * to_linear(color.b)
}

/// Pick the higher-contrast foreground for the given background.
pub fn contrast_color(background: Rgb) -> ContrastColor {
    if relative_luminance(background) > CONTRAST_THRESHOLD {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}
