//! Style resolution
//!
//! Pure functions that project a resolved theme (and optional per-block
//! overrides) into flat string-keyed style maps. The rendering layer
//! applies the page-level map as CSS custom properties on a root scope
//! and the block-level map as inline style on the block element; both
//! use the same property vocabulary so they merge generically.

mod block;
mod button;
mod vars;

pub use block::resolve_block_style;
pub use button::{resolve_button_style, ButtonStyleVars};
pub use vars::theme_css_vars;

use indexmap::IndexMap;

/// Flat, order-preserving style property map, directly serializable.
pub type StyleMap = IndexMap<String, String>;

/// CSS property names shared by block-level style maps.
pub mod prop {
    pub const BACKGROUND_COLOR: &str = "background-color";
    pub const COLOR: &str = "color";
    pub const BORDER_WIDTH: &str = "border-width";
    pub const BORDER_COLOR: &str = "border-color";
    pub const BORDER_STYLE: &str = "border-style";
    pub const BORDER_RADIUS: &str = "border-radius";
    pub const BOX_SHADOW: &str = "box-shadow";
    pub const BACKDROP_FILTER: &str = "backdrop-filter";
}

/// Append a two-digit hex alpha suffix to a `#RRGGBB` color.
///
/// Non-hex colors (the Glass template stores `rgba(...)` strings) are
/// returned untouched rather than producing an invalid CSS value.
pub(crate) fn with_alpha_suffix(color: &str, alpha: &str) -> String {
    if color.starts_with('#') && color.len() == 7 {
        format!("{color}{alpha}")
    } else {
        color.to_string()
    }
}
