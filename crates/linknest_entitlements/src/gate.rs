//! Entitlement gates
//!
//! Two-phase validation of proposed overrides: shape first (applies to
//! every plan, specific messages, short-circuits), then plan gating.
//! Enum-valued fields are shape-checked by the type system when the
//! persisted JSON is deserialized; the checks here cover what the
//! types cannot express.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

use linknest_theme::catalog::{system_font, PRO_BUTTON_STYLES};
use linknest_theme::{
    BlockStyleOverrides, Rgb, Template, ThemePatch, Tier, MAX_BLOCK_RADIUS,
};

use crate::error::ValidationError;
use crate::plan::Plan;

/// Validate a block's proposed style overrides against the caller's
/// plan, before persisting them.
///
/// Free-tier users may pick a preset variant but no other field, even
/// in combination with a variant.
pub fn validate_style_overrides(
    overrides: &BlockStyleOverrides,
    plan: Plan,
) -> Result<(), ValidationError> {
    // Shape validation (all plans)
    if let Some(bg) = &overrides.bg_color {
        if Rgb::parse(bg).is_err() {
            return Err(ValidationError::InvalidBackgroundColor);
        }
    }
    if let Some(text) = &overrides.text_color {
        if Rgb::parse(text).is_err() {
            return Err(ValidationError::InvalidTextColor);
        }
    }
    if let Some(radius) = overrides.border_radius {
        if radius > MAX_BLOCK_RADIUS {
            return Err(ValidationError::BorderRadiusOutOfRange);
        }
    }
    if let Some(style) = overrides.button_style {
        if !PRO_BUTTON_STYLES.contains(&style) {
            return Err(ValidationError::InvalidButtonStyle);
        }
    }

    // Plan gating
    if !plan.limits().custom_colors && overrides.has_custom_fields() {
        tracing::debug!(plan = plan.id(), "block style overrides rejected");
        return Err(ValidationError::BlockStyleRequiresPro);
    }

    Ok(())
}

/// Validate a proposed page theme patch against the caller's plan.
///
/// Free-tier users are restricted to the curated palettes, the system
/// font catalog, and the basic button styles; hiding the badge is
/// Pro-only. Pro users pass unconditionally (shape is structural).
pub fn validate_theme_patch(patch: &ThemePatch, plan: Plan) -> Result<(), ValidationError> {
    let limits = plan.limits();

    if !limits.custom_colors {
        let allowed = palette_color_set();
        if patch.color_overrides().any(|color| !allowed.contains(color)) {
            tracing::debug!(plan = plan.id(), "non-palette color rejected");
            return Err(ValidationError::CustomColorsRequirePro);
        }
    }
    if !limits.google_fonts && patch.font_overrides().any(|font| !system_font(font)) {
        tracing::debug!(plan = plan.id(), "non-system font rejected");
        return Err(ValidationError::GoogleFontsRequirePro);
    }
    if !limits.animated_buttons {
        if let Some(style) = patch.button_style {
            if !linknest_theme::button_styles_for(Tier::Free).contains(&style) {
                return Err(ValidationError::ButtonStyleRequiresPro);
            }
        }
    }
    if patch.hide_branding == Some(true) && !limits.remove_badge {
        return Err(ValidationError::HideBrandingRequiresPro);
    }

    Ok(())
}

/// Validate that the caller's plan may select a template.
pub fn validate_template_choice(template: Template, plan: Plan) -> Result<(), ValidationError> {
    if template.tier() == Tier::Pro && !plan.limits().premium_templates {
        tracing::debug!(template = template.id(), "premium template rejected");
        return Err(ValidationError::TemplateRequiresPro);
    }
    Ok(())
}

/// Every color value appearing in any curated palette.
fn palette_color_set() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        linknest_theme::ColorPalette::all()
            .iter()
            .flat_map(|palette| palette.colors.values())
            .collect()
    })
}
