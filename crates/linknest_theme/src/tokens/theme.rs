//! Complete theme token set and partial-theme merging

use serde::{Deserialize, Serialize};

use super::{BackgroundEffect, ButtonStyle, ShadowLevel};

/// Current theme token format. Forced on every merge so the persisted
/// format discriminator is never user-controllable.
pub const THEME_VERSION: u32 = 1;

/// Complete set of design tokens for a page.
///
/// A resolved theme always has every field populated: merging starts
/// from a template's complete default set, so no partial theme is ever
/// handed to the rendering layer.
///
/// Color fields hold CSS color strings; templates normally use 6-digit
/// hex, but `rgba(...)` values are allowed (the Glass template uses
/// them for its translucent surface).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub version: u32,

    // Colors
    pub color_background: String,
    pub color_surface: String,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_text: String,
    pub color_text_muted: String,
    pub color_accent: String,

    // Typography
    pub font_heading: String,
    pub font_body: String,
    pub font_size_base: u32,
    pub font_weight_heading: u32,
    pub line_height_body: f32,

    // Spacing & layout
    pub spacing_unit: u32,
    pub content_max_width: u32,
    pub block_gap: u32,
    pub page_padding_x: u32,
    pub page_padding_y: u32,

    // Borders & shapes
    pub border_radius: u32,
    pub border_width: u32,
    pub border_color: String,

    // Buttons
    //
    // Resolved themes are render-path data, so unknown persisted style
    // ids fall back to `filled` instead of failing the whole decode.
    #[serde(deserialize_with = "super::button::lenient")]
    pub button_style: ButtonStyle,
    pub button_radius: u32,
    pub button_padding_x: u32,
    pub button_padding_y: u32,

    // Effects
    pub shadow: ShadowLevel,
    pub background_effect: BackgroundEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<String>,

    // Branding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_branding: Option<bool>,
}

/// Per-page user overrides: the subset of [`ThemeTokens`] the user has
/// touched, persisted as an opaque JSON blob.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_text_muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_base: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_heading: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_body: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_unit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_gap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_padding_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_padding_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_padding_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_padding_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_effect: Option<BackgroundEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_branding: Option<bool>,
}

impl ThemePatch {
    /// The color values this patch overrides, for palette gating.
    pub fn color_overrides(&self) -> impl Iterator<Item = &str> {
        [
            &self.color_background,
            &self.color_surface,
            &self.color_primary,
            &self.color_secondary,
            &self.color_text,
            &self.color_text_muted,
            &self.color_accent,
            &self.border_color,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
    }

    /// The font stacks this patch overrides, for catalog gating.
    pub fn font_overrides(&self) -> impl Iterator<Item = &str> {
        [&self.font_heading, &self.font_body]
            .into_iter()
            .filter_map(|field| field.as_deref())
    }
}

/// Shallow right-biased merge of user overrides onto a complete base.
///
/// The result is always a complete token set, and `version` is forced
/// back to [`THEME_VERSION`] after the merge.
pub fn merge_theme(base: &ThemeTokens, patch: &ThemePatch) -> ThemeTokens {
    fn apply<T: Clone>(slot: &mut T, value: &Option<T>) {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }

    let mut theme = base.clone();
    apply(&mut theme.color_background, &patch.color_background);
    apply(&mut theme.color_surface, &patch.color_surface);
    apply(&mut theme.color_primary, &patch.color_primary);
    apply(&mut theme.color_secondary, &patch.color_secondary);
    apply(&mut theme.color_text, &patch.color_text);
    apply(&mut theme.color_text_muted, &patch.color_text_muted);
    apply(&mut theme.color_accent, &patch.color_accent);
    apply(&mut theme.font_heading, &patch.font_heading);
    apply(&mut theme.font_body, &patch.font_body);
    apply(&mut theme.font_size_base, &patch.font_size_base);
    apply(&mut theme.font_weight_heading, &patch.font_weight_heading);
    apply(&mut theme.line_height_body, &patch.line_height_body);
    apply(&mut theme.spacing_unit, &patch.spacing_unit);
    apply(&mut theme.content_max_width, &patch.content_max_width);
    apply(&mut theme.block_gap, &patch.block_gap);
    apply(&mut theme.page_padding_x, &patch.page_padding_x);
    apply(&mut theme.page_padding_y, &patch.page_padding_y);
    apply(&mut theme.border_radius, &patch.border_radius);
    apply(&mut theme.border_width, &patch.border_width);
    apply(&mut theme.border_color, &patch.border_color);
    apply(&mut theme.button_style, &patch.button_style);
    apply(&mut theme.button_radius, &patch.button_radius);
    apply(&mut theme.button_padding_x, &patch.button_padding_x);
    apply(&mut theme.button_padding_y, &patch.button_padding_y);
    apply(&mut theme.shadow, &patch.shadow);
    apply(&mut theme.background_effect, &patch.background_effect);
    if patch.background_gradient.is_some() {
        theme.background_gradient = patch.background_gradient.clone();
    }
    if patch.hide_branding.is_some() {
        theme.hide_branding = patch.hide_branding;
    }
    theme.version = THEME_VERSION;
    theme
}
