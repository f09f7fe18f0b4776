//! Font catalogs

use crate::tier::Tier;

/// A selectable font: stable id, picker name, CSS font-family stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

/// System font stacks, available on every tier.
pub const SYSTEM_FONTS: [FontEntry; 6] = [
    FontEntry {
        id: "inter",
        name: "Inter",
        value: "Inter, system-ui, sans-serif",
    },
    FontEntry {
        id: "georgia",
        name: "Georgia",
        value: "Georgia, serif",
    },
    FontEntry {
        id: "system",
        name: "System",
        value: "system-ui, -apple-system, sans-serif",
    },
    FontEntry {
        id: "mono",
        name: "Mono",
        value: "ui-monospace, monospace",
    },
    FontEntry {
        id: "helvetica",
        name: "Helvetica",
        value: "'Helvetica Neue', Helvetica, Arial, sans-serif",
    },
    FontEntry {
        id: "times",
        name: "Times",
        value: "'Times New Roman', Times, serif",
    },
];

/// Google-hosted fonts, Pro tier only.
pub const GOOGLE_FONTS: [FontEntry; 30] = [
    FontEntry {
        id: "poppins",
        name: "Poppins",
        value: "'Poppins', sans-serif",
    },
    FontEntry {
        id: "roboto",
        name: "Roboto",
        value: "'Roboto', sans-serif",
    },
    FontEntry {
        id: "lato",
        name: "Lato",
        value: "'Lato', sans-serif",
    },
    FontEntry {
        id: "open-sans",
        name: "Open Sans",
        value: "'Open Sans', sans-serif",
    },
    FontEntry {
        id: "montserrat",
        name: "Montserrat",
        value: "'Montserrat', sans-serif",
    },
    FontEntry {
        id: "raleway",
        name: "Raleway",
        value: "'Raleway', sans-serif",
    },
    FontEntry {
        id: "playfair",
        name: "Playfair Display",
        value: "'Playfair Display', serif",
    },
    FontEntry {
        id: "merriweather",
        name: "Merriweather",
        value: "'Merriweather', serif",
    },
    FontEntry {
        id: "lora",
        name: "Lora",
        value: "'Lora', serif",
    },
    FontEntry {
        id: "nunito",
        name: "Nunito",
        value: "'Nunito', sans-serif",
    },
    FontEntry {
        id: "work-sans",
        name: "Work Sans",
        value: "'Work Sans', sans-serif",
    },
    FontEntry {
        id: "rubik",
        name: "Rubik",
        value: "'Rubik', sans-serif",
    },
    FontEntry {
        id: "karla",
        name: "Karla",
        value: "'Karla', sans-serif",
    },
    FontEntry {
        id: "space-grotesk",
        name: "Space Grotesk",
        value: "'Space Grotesk', sans-serif",
    },
    FontEntry {
        id: "dm-sans",
        name: "DM Sans",
        value: "'DM Sans', sans-serif",
    },
    FontEntry {
        id: "dm-serif",
        name: "DM Serif Display",
        value: "'DM Serif Display', serif",
    },
    FontEntry {
        id: "josefin",
        name: "Josefin Sans",
        value: "'Josefin Sans', sans-serif",
    },
    FontEntry {
        id: "quicksand",
        name: "Quicksand",
        value: "'Quicksand', sans-serif",
    },
    FontEntry {
        id: "fira-sans",
        name: "Fira Sans",
        value: "'Fira Sans', sans-serif",
    },
    FontEntry {
        id: "source-serif",
        name: "Source Serif 4",
        value: "'Source Serif 4', serif",
    },
    FontEntry {
        id: "cabin",
        name: "Cabin",
        value: "'Cabin', sans-serif",
    },
    FontEntry {
        id: "barlow",
        name: "Barlow",
        value: "'Barlow', sans-serif",
    },
    FontEntry {
        id: "bitter",
        name: "Bitter",
        value: "'Bitter', serif",
    },
    FontEntry {
        id: "libre-baskerville",
        name: "Libre Baskerville",
        value: "'Libre Baskerville', serif",
    },
    FontEntry {
        id: "crimson-text",
        name: "Crimson Text",
        value: "'Crimson Text', serif",
    },
    FontEntry {
        id: "inconsolata",
        name: "Inconsolata",
        value: "'Inconsolata', monospace",
    },
    FontEntry {
        id: "jetbrains-mono",
        name: "JetBrains Mono",
        value: "'JetBrains Mono', monospace",
    },
    FontEntry {
        id: "overpass",
        name: "Overpass",
        value: "'Overpass', sans-serif",
    },
    FontEntry {
        id: "archivo",
        name: "Archivo",
        value: "'Archivo', sans-serif",
    },
    FontEntry {
        id: "sora",
        name: "Sora",
        value: "'Sora', sans-serif",
    },
];

/// Whether a font-family stack is in the system (free) catalog.
pub fn system_font(value: &str) -> bool {
    SYSTEM_FONTS.iter().any(|font| font.value == value)
}

/// Whether a font-family stack is known to either catalog.
pub fn known_font(value: &str) -> bool {
    system_font(value) || GOOGLE_FONTS.iter().any(|font| font.value == value)
}

/// Font catalogs available to a tier. The Pro slice extends, not
/// replaces, the system catalog.
pub fn fonts_for(tier: Tier) -> &'static [FontEntry] {
    match tier {
        Tier::Free => &SYSTEM_FONTS,
        Tier::Pro => &GOOGLE_FONTS,
    }
}
