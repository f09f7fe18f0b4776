//! Curated color palettes (free tier)

/// The eight color token values a palette pins down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColors {
    pub color_background: &'static str,
    pub color_surface: &'static str,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    pub color_text: &'static str,
    pub color_text_muted: &'static str,
    pub color_accent: &'static str,
    pub border_color: &'static str,
}

impl PaletteColors {
    /// All eight values, for membership checks.
    pub fn values(&self) -> [&'static str; 8] {
        [
            self.color_background,
            self.color_surface,
            self.color_primary,
            self.color_secondary,
            self.color_text,
            self.color_text_muted,
            self.color_accent,
            self.border_color,
        ]
    }
}

/// A named, fixed color set offered to free-tier users in place of a
/// raw color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: PaletteColors,
}

impl ColorPalette {
    /// Full palette catalog, picker order.
    pub fn all() -> &'static [ColorPalette] {
        &COLOR_PALETTES
    }

    /// Look up a palette by id.
    pub fn from_id(id: &str) -> Option<&'static ColorPalette> {
        COLOR_PALETTES.iter().find(|p| p.id == id)
    }
}

/// Whether a color value appears in any curated palette.
pub fn palette_color(value: &str) -> bool {
    COLOR_PALETTES
        .iter()
        .any(|palette| palette.colors.values().into_iter().any(|c| c == value))
}

const COLOR_PALETTES: [ColorPalette; 5] = [
    ColorPalette {
        id: "classic",
        name: "Classic",
        colors: PaletteColors {
            color_background: "#FFFFFF",
            color_surface: "#F8F9FA",
            color_primary: "#1A1A2E",
            color_secondary: "#6C63FF",
            color_text: "#1A1A1A",
            color_text_muted: "#6B7280",
            color_accent: "#6C63FF",
            border_color: "#E5E7EB",
        },
    },
    ColorPalette {
        id: "midnight",
        name: "Midnight",
        colors: PaletteColors {
            color_background: "#0F0F1A",
            color_surface: "#1A1A2E",
            color_primary: "#E0E0E0",
            color_secondary: "#7C7CFF",
            color_text: "#E8E8E8",
            color_text_muted: "#9CA3AF",
            color_accent: "#7C7CFF",
            border_color: "#2D2D44",
        },
    },
    ColorPalette {
        id: "warm",
        name: "Warm",
        colors: PaletteColors {
            color_background: "#FFF8F0",
            color_surface: "#FFF0E0",
            color_primary: "#8B4513",
            color_secondary: "#E07C4F",
            color_text: "#3D2B1F",
            color_text_muted: "#8B7355",
            color_accent: "#E07C4F",
            border_color: "#E8D5C4",
        },
    },
    ColorPalette {
        id: "ocean",
        name: "Ocean",
        colors: PaletteColors {
            color_background: "#F0F7FF",
            color_surface: "#E0EFFF",
            color_primary: "#1E3A5F",
            color_secondary: "#3B82F6",
            color_text: "#1A2A3A",
            color_text_muted: "#64748B",
            color_accent: "#3B82F6",
            border_color: "#CBD5E1",
        },
    },
    ColorPalette {
        id: "rose",
        name: "Rose",
        colors: PaletteColors {
            color_background: "#FFF5F7",
            color_surface: "#FFE4E8",
            color_primary: "#831843",
            color_secondary: "#EC4899",
            color_text: "#2D1B28",
            color_text_muted: "#9D7A8A",
            color_accent: "#EC4899",
            border_color: "#F3D1D8",
        },
    },
];
