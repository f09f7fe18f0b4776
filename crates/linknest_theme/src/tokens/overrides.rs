//! Per-block style overrides

use serde::{Deserialize, Serialize};

use super::{BlockShadow, ButtonStyle};

/// Largest block corner radius a user may request, in px.
pub const MAX_BLOCK_RADIUS: u32 = 32;

/// A low-customization preset for a block's visual style, derived
/// entirely from the active theme. The only override free-tier users
/// may persist.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockVariant {
    /// Surface background with primary text.
    Primary,
    /// Tinted secondary background.
    Secondary,
    /// Transparent with a border.
    Outline,
    /// Background-colored with muted text.
    Subtle,
}

/// User-specified deviations from the theme for a single block, stored
/// inside the block's opaque content payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<BlockVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<BlockShadow>,
}

impl BlockStyleOverrides {
    /// No field is set; resolution is a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Any field other than `variant` is set. These are the fields the
    /// free tier may not persist.
    pub fn has_custom_fields(&self) -> bool {
        self.button_style.is_some()
            || self.bg_color.is_some()
            || self.text_color.is_some()
            || self.border_radius.is_some()
            || self.shadow.is_some()
    }
}
