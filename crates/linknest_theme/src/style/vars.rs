//! CSS custom property projection

use crate::tokens::{BackgroundEffect, ThemeTokens};

use super::{resolve_button_style, StyleMap};

/// Project a resolved theme into CSS custom properties for the page's
/// root scope.
///
/// One entry per token (numeric tokens px-suffixed), followed by the
/// button style resolver's output. The button-derived variables are
/// deliberately written last: `pill`'s forced radius must win over the
/// raw `buttonRadius` token.
pub fn theme_css_vars(theme: &ThemeTokens) -> StyleMap {
    let mut vars = StyleMap::new();
    let mut set = |name: &str, value: String| {
        vars.insert(name.to_string(), value);
    };

    set("--ln-color-bg", theme.color_background.clone());
    set("--ln-color-surface", theme.color_surface.clone());
    set("--ln-color-primary", theme.color_primary.clone());
    set("--ln-color-secondary", theme.color_secondary.clone());
    set("--ln-color-text", theme.color_text.clone());
    set("--ln-color-text-muted", theme.color_text_muted.clone());
    set("--ln-color-accent", theme.color_accent.clone());

    set("--ln-font-heading", theme.font_heading.clone());
    set("--ln-font-body", theme.font_body.clone());
    set("--ln-font-size-base", format!("{}px", theme.font_size_base));
    set(
        "--ln-font-weight-heading",
        theme.font_weight_heading.to_string(),
    );
    set("--ln-line-height-body", theme.line_height_body.to_string());

    set("--ln-spacing-unit", format!("{}px", theme.spacing_unit));
    set(
        "--ln-content-max-width",
        format!("{}px", theme.content_max_width),
    );
    set("--ln-block-gap", format!("{}px", theme.block_gap));
    set("--ln-page-px", format!("{}px", theme.page_padding_x));
    set("--ln-page-py", format!("{}px", theme.page_padding_y));

    set("--ln-border-radius", format!("{}px", theme.border_radius));
    set("--ln-border-width", format!("{}px", theme.border_width));
    set("--ln-border-color", theme.border_color.clone());

    set("--ln-shadow", theme.shadow.css().to_string());
    if theme.background_effect == BackgroundEffect::Gradient {
        if let Some(gradient) = &theme.background_gradient {
            set("--ln-bg-gradient", gradient.clone());
        }
    }

    set("--ln-btn-radius", format!("{}px", theme.button_radius));
    set("--ln-btn-px", format!("{}px", theme.button_padding_x));
    set("--ln-btn-py", format!("{}px", theme.button_padding_y));

    // Button-style-derived variables are the last writers by contract.
    let button = resolve_button_style(theme);
    set("--ln-btn-bg", button.bg);
    set("--ln-btn-text", button.text);
    set("--ln-btn-border-w", button.border_width);
    set("--ln-btn-border-c", button.border_color);
    set("--ln-btn-shadow", button.shadow);
    set("--ln-btn-backdrop", button.backdrop);
    if let Some(radius) = button.radius {
        set("--ln-btn-radius", radius);
    }

    vars
}
