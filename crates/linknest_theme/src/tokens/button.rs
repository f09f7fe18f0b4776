//! Button style token

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Visual treatment applied to link buttons on a page.
///
/// Styles are theme-relative (never hardcoded brand colors) so any
/// palette combination stays legible.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ButtonStyle {
    /// Solid surface-colored button. Also the fallback for unknown
    /// persisted values.
    Filled,
    /// Transparent with a 2px primary-colored border.
    Outline,
    /// Text-only, no chrome.
    Ghost,
    /// Filled, with a forced fully-rounded radius.
    Pill,
    /// Filled with a fixed floating shadow.
    Shadow,
    /// Transparent with an accent-colored border and glow.
    Neon,
    /// Translucent surface with a backdrop blur.
    Glass,
    /// Alias treatment for ghost, kept for legacy pages.
    Minimal,
}

impl ButtonStyle {
    /// Stable style id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Pill => "pill",
            Self::Shadow => "shadow",
            Self::Neon => "neon",
            Self::Glass => "glass",
            Self::Minimal => "minimal",
        }
    }

    /// Look up a style by its persisted id.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "filled" => Some(Self::Filled),
            "outline" => Some(Self::Outline),
            "ghost" => Some(Self::Ghost),
            "pill" => Some(Self::Pill),
            "shadow" => Some(Self::Shadow),
            "neon" => Some(Self::Neon),
            "glass" => Some(Self::Glass),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for ButtonStyle {
    /// Unknown ids are rejected. Write-time payloads ([`ThemePatch`],
    /// [`BlockStyleOverrides`]) must surface bad style ids to the
    /// caller instead of silently rewriting them.
    ///
    /// [`ThemePatch`]: super::ThemePatch
    /// [`BlockStyleOverrides`]: super::BlockStyleOverrides
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Self::from_id(&id).ok_or_else(|| D::Error::custom(format_args!("unknown button style `{id}`")))
    }
}

/// Lenient decode for the render path: unknown persisted ids fall back
/// to [`ButtonStyle::Filled`] so legacy pages keep rendering.
pub(crate) fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ButtonStyle, D::Error> {
    let id = String::deserialize(deserializer)?;
    Ok(ButtonStyle::from_id(&id).unwrap_or(ButtonStyle::Filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for style in [
            ButtonStyle::Filled,
            ButtonStyle::Outline,
            ButtonStyle::Ghost,
            ButtonStyle::Pill,
            ButtonStyle::Shadow,
            ButtonStyle::Neon,
            ButtonStyle::Glass,
            ButtonStyle::Minimal,
        ] {
            assert_eq!(ButtonStyle::from_id(style.id()), Some(style));
        }
    }

    #[test]
    fn unknown_ids_are_not_in_the_catalog() {
        assert_eq!(ButtonStyle::from_id("sparkle"), None);
    }

    #[test]
    fn decode_is_strict_by_default() {
        let style: ButtonStyle = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(style, ButtonStyle::Neon);
        assert!(serde_json::from_str::<ButtonStyle>("\"sparkle\"").is_err());
    }
}
