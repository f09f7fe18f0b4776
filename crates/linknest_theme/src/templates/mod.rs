//! Built-in page template catalog
//!
//! Templates are code-defined at build time and never mutated at
//! runtime: a fixed, named starting theme plus a layout. Pages persist
//! only the template id; lookups fall back to the default template so
//! rendering succeeds even against stale persisted ids.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::tier::Tier;
use crate::tokens::{BackgroundEffect, ButtonStyle, ShadowLevel, ThemeTokens, THEME_VERSION};

/// Arrangement of blocks on the published page.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    CenteredStack,
    LeftAligned,
    CardGrid,
    BentoGrid,
}

/// Editorial grouping shown in the template picker.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Minimal,
    Bold,
    Playful,
    Professional,
    Creative,
}

/// A catalog entry: identity, picker copy, tier, layout, and the
/// complete default token set merges start from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub tier: Tier,
    pub layout: LayoutKind,
    pub default_theme: ThemeTokens,
}

/// Built-in template catalog.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Template {
    CleanSlate,
    Midnight,
    CoralReef,
    Ink,
    PastelDream,
    NeonGlow,
    Glass,
    BentoBox,
}

impl Template {
    /// Fallback for unknown persisted template ids.
    pub const DEFAULT: Template = Template::CleanSlate;

    /// Stable template id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::CleanSlate => "clean-slate",
            Self::Midnight => "midnight",
            Self::CoralReef => "coral-reef",
            Self::Ink => "ink",
            Self::PastelDream => "pastel-dream",
            Self::NeonGlow => "neon-glow",
            Self::Glass => "glass",
            Self::BentoBox => "bento-box",
        }
    }

    /// Full catalog list, picker order.
    pub fn all() -> &'static [Template] {
        const TEMPLATES: [Template; 8] = [
            Template::CleanSlate,
            Template::Midnight,
            Template::CoralReef,
            Template::Ink,
            Template::PastelDream,
            Template::NeonGlow,
            Template::Glass,
            Template::BentoBox,
        ];
        &TEMPLATES
    }

    /// Look up a template by its persisted id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.id() == id)
    }

    /// Look up a template by id, falling back to [`Template::DEFAULT`]
    /// on a miss. Never fails: pages with stale ids still render.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!("unknown template id {id:?}, falling back to {:?}", Self::DEFAULT);
            Self::DEFAULT
        })
    }

    /// Subscription tier required to select this template.
    pub fn tier(self) -> Tier {
        match self {
            Self::Glass | Self::BentoBox => Tier::Pro,
            _ => Tier::Free,
        }
    }

    /// Full catalog entry for this template.
    pub fn definition(self) -> TemplateDefinition {
        match self {
            Self::CleanSlate => clean_slate(),
            Self::Midnight => midnight(),
            Self::CoralReef => coral_reef(),
            Self::Ink => ink(),
            Self::PastelDream => pastel_dream(),
            Self::NeonGlow => neon_glow(),
            Self::Glass => glass(),
            Self::BentoBox => bento_box(),
        }
    }

    /// The complete default token set for this template.
    pub fn default_theme(self) -> ThemeTokens {
        self.definition().default_theme
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Default theme for a persisted template id, with fallback.
pub fn default_theme_for(template_id: &str) -> ThemeTokens {
    Template::resolve(template_id).default_theme()
}

fn clean_slate() -> TemplateDefinition {
    TemplateDefinition {
        id: "clean-slate",
        name: "Clean Slate",
        description: "Minimal and universally clean. The perfect starting point.",
        category: TemplateCategory::Minimal,
        tier: Tier::Free,
        layout: LayoutKind::CenteredStack,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#FFFFFF".into(),
            color_surface: "#F8F9FA".into(),
            color_primary: "#1A1A2E".into(),
            color_secondary: "#6C63FF".into(),
            color_text: "#1A1A1A".into(),
            color_text_muted: "#6B7280".into(),
            color_accent: "#6C63FF".into(),
            font_heading: "Inter, system-ui, sans-serif".into(),
            font_body: "Inter, system-ui, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 700,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 680,
            block_gap: 16,
            page_padding_x: 20,
            page_padding_y: 40,
            border_radius: 12,
            border_width: 0,
            border_color: "#E5E7EB".into(),
            button_style: ButtonStyle::Filled,
            button_radius: 8,
            button_padding_x: 24,
            button_padding_y: 14,
            shadow: ShadowLevel::None,
            background_effect: BackgroundEffect::None,
            background_gradient: None,
            hide_branding: None,
        },
    }
}

fn midnight() -> TemplateDefinition {
    TemplateDefinition {
        id: "midnight",
        name: "Midnight",
        description: "Dark mode elegance for creators and musicians.",
        category: TemplateCategory::Bold,
        tier: Tier::Free,
        layout: LayoutKind::CenteredStack,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#0F0F1A".into(),
            color_surface: "#1A1A2E".into(),
            color_primary: "#E0E0E0".into(),
            color_secondary: "#7C7CFF".into(),
            color_text: "#E8E8E8".into(),
            color_text_muted: "#9CA3AF".into(),
            color_accent: "#7C7CFF".into(),
            font_heading: "Inter, system-ui, sans-serif".into(),
            font_body: "Inter, system-ui, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 700,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 680,
            block_gap: 16,
            page_padding_x: 20,
            page_padding_y: 40,
            border_radius: 12,
            border_width: 1,
            border_color: "#2D2D44".into(),
            button_style: ButtonStyle::Outline,
            button_radius: 8,
            button_padding_x: 24,
            button_padding_y: 14,
            shadow: ShadowLevel::None,
            background_effect: BackgroundEffect::None,
            background_gradient: None,
            hide_branding: None,
        },
    }
}

fn coral_reef() -> TemplateDefinition {
    TemplateDefinition {
        id: "coral-reef",
        name: "Coral Reef",
        description: "Warm gradients and rounded corners for lifestyle brands.",
        category: TemplateCategory::Playful,
        tier: Tier::Free,
        layout: LayoutKind::CenteredStack,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#FFF5F0".into(),
            color_surface: "#FFE8DB".into(),
            color_primary: "#C2410C".into(),
            color_secondary: "#FB923C".into(),
            color_text: "#431407".into(),
            color_text_muted: "#9A7568".into(),
            color_accent: "#FB923C".into(),
            font_heading: "Georgia, serif".into(),
            font_body: "Inter, system-ui, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 700,
            line_height_body: 1.6,
            spacing_unit: 8,
            content_max_width: 680,
            block_gap: 16,
            page_padding_x: 24,
            page_padding_y: 48,
            border_radius: 16,
            border_width: 0,
            border_color: "#FECACA".into(),
            button_style: ButtonStyle::Pill,
            button_radius: 999,
            button_padding_x: 28,
            button_padding_y: 14,
            shadow: ShadowLevel::Sm,
            background_effect: BackgroundEffect::Gradient,
            background_gradient: Some("linear-gradient(180deg, #FFF5F0 0%, #FFE8DB 100%)".into()),
            hide_branding: None,
        },
    }
}

fn ink() -> TemplateDefinition {
    TemplateDefinition {
        id: "ink",
        name: "Ink",
        description: "High contrast and bold typography for writers.",
        category: TemplateCategory::Professional,
        tier: Tier::Free,
        layout: LayoutKind::LeftAligned,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#FAFAFA".into(),
            color_surface: "#FFFFFF".into(),
            color_primary: "#000000".into(),
            color_secondary: "#374151".into(),
            color_text: "#000000".into(),
            color_text_muted: "#6B7280".into(),
            color_accent: "#000000".into(),
            font_heading: "Georgia, serif".into(),
            font_body: "Georgia, serif".into(),
            font_size_base: 17,
            font_weight_heading: 700,
            line_height_body: 1.7,
            spacing_unit: 8,
            content_max_width: 640,
            block_gap: 20,
            page_padding_x: 24,
            page_padding_y: 48,
            border_radius: 4,
            border_width: 2,
            border_color: "#000000".into(),
            button_style: ButtonStyle::Outline,
            button_radius: 0,
            button_padding_x: 24,
            button_padding_y: 14,
            shadow: ShadowLevel::None,
            background_effect: BackgroundEffect::None,
            background_gradient: None,
            hide_branding: None,
        },
    }
}

fn pastel_dream() -> TemplateDefinition {
    TemplateDefinition {
        id: "pastel-dream",
        name: "Pastel Dream",
        description: "Soft pastels and playful energy for Gen-Z creators.",
        category: TemplateCategory::Playful,
        tier: Tier::Free,
        layout: LayoutKind::CenteredStack,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#FDF4FF".into(),
            color_surface: "#FAE8FF".into(),
            color_primary: "#A855F7".into(),
            color_secondary: "#EC4899".into(),
            color_text: "#3B0764".into(),
            color_text_muted: "#7E47A0".into(),
            color_accent: "#EC4899".into(),
            font_heading: "system-ui, -apple-system, sans-serif".into(),
            font_body: "system-ui, -apple-system, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 800,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 680,
            block_gap: 14,
            page_padding_x: 20,
            page_padding_y: 40,
            border_radius: 20,
            border_width: 0,
            border_color: "#E9D5FF".into(),
            button_style: ButtonStyle::Pill,
            button_radius: 999,
            button_padding_x: 28,
            button_padding_y: 16,
            shadow: ShadowLevel::Sm,
            background_effect: BackgroundEffect::Gradient,
            background_gradient: Some(
                "linear-gradient(135deg, #FDF4FF 0%, #FAE8FF 50%, #FFF1F2 100%)".into(),
            ),
            hide_branding: None,
        },
    }
}

fn neon_glow() -> TemplateDefinition {
    TemplateDefinition {
        id: "neon-glow",
        name: "Neon Glow",
        description: "Dark with neon accents for DJs, gaming, and nightlife.",
        category: TemplateCategory::Bold,
        tier: Tier::Free,
        layout: LayoutKind::CenteredStack,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#09090B".into(),
            color_surface: "#18181B".into(),
            color_primary: "#22D3EE".into(),
            color_secondary: "#A78BFA".into(),
            color_text: "#F4F4F5".into(),
            color_text_muted: "#A1A1AA".into(),
            color_accent: "#22D3EE".into(),
            font_heading: "system-ui, -apple-system, sans-serif".into(),
            font_body: "system-ui, -apple-system, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 800,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 680,
            block_gap: 16,
            page_padding_x: 20,
            page_padding_y: 40,
            border_radius: 12,
            border_width: 1,
            border_color: "#27272A".into(),
            button_style: ButtonStyle::Outline,
            button_radius: 8,
            button_padding_x: 24,
            button_padding_y: 14,
            shadow: ShadowLevel::Md,
            background_effect: BackgroundEffect::None,
            background_gradient: None,
            hide_branding: None,
        },
    }
}

fn glass() -> TemplateDefinition {
    TemplateDefinition {
        id: "glass",
        name: "Glass",
        description: "Glassmorphism with blur effects. Visually striking.",
        category: TemplateCategory::Creative,
        tier: Tier::Pro,
        layout: LayoutKind::CardGrid,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#1E1E2E".into(),
            color_surface: "rgba(255, 255, 255, 0.08)".into(),
            color_primary: "#CDD6F4".into(),
            color_secondary: "#89B4FA".into(),
            color_text: "#CDD6F4".into(),
            color_text_muted: "#9399B2".into(),
            color_accent: "#89B4FA".into(),
            font_heading: "Inter, system-ui, sans-serif".into(),
            font_body: "Inter, system-ui, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 600,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 720,
            block_gap: 16,
            page_padding_x: 24,
            page_padding_y: 40,
            border_radius: 16,
            border_width: 1,
            border_color: "rgba(255, 255, 255, 0.1)".into(),
            button_style: ButtonStyle::Glass,
            button_radius: 12,
            button_padding_x: 24,
            button_padding_y: 14,
            shadow: ShadowLevel::Lg,
            background_effect: BackgroundEffect::Gradient,
            background_gradient: Some(
                "linear-gradient(135deg, #1E1E2E 0%, #2D2B55 50%, #1E1E2E 100%)".into(),
            ),
            hide_branding: None,
        },
    }
}

fn bento_box() -> TemplateDefinition {
    TemplateDefinition {
        id: "bento-box",
        name: "Bento Box",
        description: "Bento grid layout with varied sizes. High wow factor.",
        category: TemplateCategory::Creative,
        tier: Tier::Pro,
        layout: LayoutKind::BentoGrid,
        default_theme: ThemeTokens {
            version: THEME_VERSION,
            color_background: "#FAFAF9".into(),
            color_surface: "#FFFFFF".into(),
            color_primary: "#1C1917".into(),
            color_secondary: "#A16207".into(),
            color_text: "#1C1917".into(),
            color_text_muted: "#78716C".into(),
            color_accent: "#A16207".into(),
            font_heading: "system-ui, -apple-system, sans-serif".into(),
            font_body: "system-ui, -apple-system, sans-serif".into(),
            font_size_base: 16,
            font_weight_heading: 700,
            line_height_body: 1.5,
            spacing_unit: 8,
            content_max_width: 740,
            block_gap: 12,
            page_padding_x: 20,
            page_padding_y: 32,
            border_radius: 16,
            border_width: 1,
            border_color: "#E7E5E4".into(),
            button_style: ButtonStyle::Filled,
            button_radius: 12,
            button_padding_x: 20,
            button_padding_y: 12,
            shadow: ShadowLevel::Sm,
            background_effect: BackgroundEffect::None,
            background_gradient: None,
            hide_branding: None,
        },
    }
}
