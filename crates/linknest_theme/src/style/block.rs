//! Block style override resolution

use crate::contrast::{contrast_color, Rgb};
use crate::tokens::{BlockStyleOverrides, BlockVariant, ThemeTokens};

use super::{prop, resolve_button_style, with_alpha_suffix, StyleMap};

/// Ordered resolution pipeline. Each stage may overwrite keys written
/// by an earlier one; the order is a hard contract:
/// variant → button style → explicit fields → auto-contrast.
const STAGES: [fn(&ThemeTokens, &BlockStyleOverrides, &mut StyleMap); 4] = [
    variant_stage,
    button_style_stage,
    explicit_stage,
    auto_contrast_stage,
];

/// Resolve a block's style overrides against the page's merged theme
/// into a flat inline-style map.
///
/// Empty overrides resolve to an exactly-empty map so callers can skip
/// applying inline style at all.
pub fn resolve_block_style(theme: &ThemeTokens, overrides: &BlockStyleOverrides) -> StyleMap {
    let mut style = StyleMap::new();
    for stage in STAGES {
        stage(theme, overrides, &mut style);
    }
    style
}

fn set(style: &mut StyleMap, property: &str, value: impl Into<String>) {
    style.insert(property.to_string(), value.into());
}

/// Stage 1: seed from the preset variant, derived entirely from the
/// active theme.
fn variant_stage(theme: &ThemeTokens, overrides: &BlockStyleOverrides, style: &mut StyleMap) {
    let Some(variant) = overrides.variant else {
        return;
    };
    match variant {
        BlockVariant::Primary => {
            set(style, prop::BACKGROUND_COLOR, theme.color_surface.clone());
            set(style, prop::COLOR, theme.color_primary.clone());
        }
        BlockVariant::Secondary => {
            set(
                style,
                prop::BACKGROUND_COLOR,
                with_alpha_suffix(&theme.color_secondary, "20"),
            );
            set(style, prop::COLOR, theme.color_text.clone());
        }
        BlockVariant::Outline => {
            set(style, prop::BACKGROUND_COLOR, "transparent");
            set(style, prop::COLOR, theme.color_text.clone());
            set(style, prop::BORDER_WIDTH, "1px");
            set(style, prop::BORDER_COLOR, theme.border_color.clone());
            set(style, prop::BORDER_STYLE, "solid");
        }
        BlockVariant::Subtle => {
            set(style, prop::BACKGROUND_COLOR, theme.color_background.clone());
            set(style, prop::COLOR, theme.color_text_muted.clone());
            set(style, prop::BORDER_WIDTH, "1px");
            set(
                style,
                prop::BORDER_COLOR,
                with_alpha_suffix(&theme.border_color, "60"),
            );
            set(style, prop::BORDER_STYLE, "solid");
        }
    }
}

/// Stage 2: recompute the button style resolver against a theme clone
/// with the block's button style swapped in, so a single block can
/// become e.g. a neon button regardless of the page-wide style.
fn button_style_stage(theme: &ThemeTokens, overrides: &BlockStyleOverrides, style: &mut StyleMap) {
    let Some(button_style) = overrides.button_style else {
        return;
    };
    let mut block_theme = theme.clone();
    block_theme.button_style = button_style;
    let vars = resolve_button_style(&block_theme);

    set(style, prop::BACKGROUND_COLOR, vars.bg);
    set(style, prop::COLOR, vars.text);
    if vars.border_width != "0" {
        set(style, prop::BORDER_WIDTH, vars.border_width);
        set(style, prop::BORDER_COLOR, vars.border_color);
        set(style, prop::BORDER_STYLE, "solid");
    } else {
        set(style, prop::BORDER_WIDTH, "0");
        set(style, prop::BORDER_COLOR, vars.border_color);
    }
    set(style, prop::BOX_SHADOW, vars.shadow);
    if vars.backdrop != "none" {
        set(style, prop::BACKDROP_FILTER, vars.backdrop);
    }
    if let Some(radius) = vars.radius {
        set(style, prop::BORDER_RADIUS, radius);
    }
}

/// Stage 3: explicit fields win over both variant and button style.
fn explicit_stage(_theme: &ThemeTokens, overrides: &BlockStyleOverrides, style: &mut StyleMap) {
    if let Some(bg) = &overrides.bg_color {
        set(style, prop::BACKGROUND_COLOR, bg.clone());
    }
    if let Some(text) = &overrides.text_color {
        set(style, prop::COLOR, text.clone());
    }
    if let Some(radius) = overrides.border_radius {
        set(style, prop::BORDER_RADIUS, format!("{radius}px"));
    }
    if let Some(shadow) = overrides.shadow {
        set(style, prop::BOX_SHADOW, shadow.css());
    }
}

/// Stage 4: when only a background was chosen, pick a legible text
/// color for it. An explicit text color suppresses this entirely.
///
/// The background passed shape validation at write time; if a legacy
/// value no longer parses, the stage is skipped rather than failing
/// the render.
fn auto_contrast_stage(_theme: &ThemeTokens, overrides: &BlockStyleOverrides, style: &mut StyleMap) {
    if overrides.text_color.is_some() {
        return;
    }
    let Some(bg) = &overrides.bg_color else {
        return;
    };
    if let Ok(rgb) = Rgb::parse(bg) {
        set(style, prop::COLOR, contrast_color(rgb).as_hex());
    }
}
