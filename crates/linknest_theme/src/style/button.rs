//! Button style variable resolution

use crate::tokens::{ButtonStyle, ThemeTokens};

use super::with_alpha_suffix;

/// Box shadow that defines the `shadow` button style. Fixed on purpose:
/// the style keeps its signature elevation even when the page-level
/// shadow token is `none`.
const FLOATING_SHADOW: &str = "0 4px 14px rgba(0,0,0,0.15)";

/// Concrete visual properties for a button style, resolved against the
/// active theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyleVars {
    pub bg: String,
    pub text: String,
    /// CSS length, `"0"` when the style has no border.
    pub border_width: String,
    pub border_color: String,
    pub shadow: String,
    pub backdrop: String,
    /// Forced corner radius; `None` means the theme's `button_radius`
    /// token applies.
    pub radius: Option<String>,
}

impl ButtonStyleVars {
    fn plain(bg: &str, text: &str, shadow: &str) -> Self {
        Self {
            bg: bg.to_string(),
            text: text.to_string(),
            border_width: "0".to_string(),
            border_color: "transparent".to_string(),
            shadow: shadow.to_string(),
            backdrop: "none".to_string(),
            radius: None,
        }
    }
}

/// Resolve the theme's button style into concrete visual properties.
///
/// Every arm derives its colors from the theme so that any palette
/// stays legible; only `shadow` and `neon` override the page-level
/// shadow token, because those styles encode their own effect.
pub fn resolve_button_style(theme: &ThemeTokens) -> ButtonStyleVars {
    match theme.button_style {
        ButtonStyle::Filled => ButtonStyleVars::plain(
            &theme.color_surface,
            &theme.color_primary,
            theme.shadow.css(),
        ),
        ButtonStyle::Outline => ButtonStyleVars {
            bg: "transparent".to_string(),
            text: theme.color_primary.clone(),
            border_width: "2px".to_string(),
            border_color: theme.color_primary.clone(),
            shadow: theme.shadow.css().to_string(),
            backdrop: "none".to_string(),
            radius: None,
        },
        ButtonStyle::Pill => ButtonStyleVars {
            radius: Some("999px".to_string()),
            ..ButtonStyleVars::plain(
                &theme.color_surface,
                &theme.color_primary,
                theme.shadow.css(),
            )
        },
        ButtonStyle::Shadow => ButtonStyleVars::plain(
            &theme.color_surface,
            &theme.color_primary,
            FLOATING_SHADOW,
        ),
        ButtonStyle::Neon => {
            let accent = &theme.color_accent;
            ButtonStyleVars {
                bg: "transparent".to_string(),
                text: accent.clone(),
                border_width: "2px".to_string(),
                border_color: accent.clone(),
                shadow: format!(
                    "0 0 16px {}, 0 0 4px {}",
                    with_alpha_suffix(accent, "66"),
                    with_alpha_suffix(accent, "33"),
                ),
                backdrop: "none".to_string(),
                radius: None,
            }
        }
        ButtonStyle::Glass => {
            let surface_is_rgba = theme.color_surface.starts_with("rgba");
            let bg = if surface_is_rgba {
                // Already translucent; use as-is.
                theme.color_surface.clone()
            } else {
                with_alpha_suffix(&theme.color_surface, "20")
            };
            let border_color = if surface_is_rgba {
                "rgba(255, 255, 255, 0.1)".to_string()
            } else {
                with_alpha_suffix(&theme.color_surface, "40")
            };
            ButtonStyleVars {
                bg,
                text: theme.color_primary.clone(),
                border_width: "1px".to_string(),
                border_color,
                shadow: "none".to_string(),
                backdrop: "blur(12px)".to_string(),
                radius: None,
            }
        }
        ButtonStyle::Ghost | ButtonStyle::Minimal => {
            ButtonStyleVars::plain("transparent", &theme.color_primary, "none")
        }
    }
}
