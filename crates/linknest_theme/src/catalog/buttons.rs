//! Button style catalogs

use crate::tier::Tier;
use crate::tokens::ButtonStyle;

/// Button styles selectable on the free tier.
pub const FREE_BUTTON_STYLES: [ButtonStyle; 3] =
    [ButtonStyle::Filled, ButtonStyle::Outline, ButtonStyle::Pill];

/// Full selectable set on the Pro tier. `ghost` and `minimal` exist as
/// template defaults but are not offered in the picker.
pub const PRO_BUTTON_STYLES: [ButtonStyle; 6] = [
    ButtonStyle::Filled,
    ButtonStyle::Outline,
    ButtonStyle::Pill,
    ButtonStyle::Shadow,
    ButtonStyle::Neon,
    ButtonStyle::Glass,
];

/// Selectable button styles for a tier.
pub fn button_styles_for(tier: Tier) -> &'static [ButtonStyle] {
    match tier {
        Tier::Free => &FREE_BUTTON_STYLES,
        Tier::Pro => &PRO_BUTTON_STYLES,
    }
}
