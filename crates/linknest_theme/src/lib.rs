//! Linknest Theme Engine
//!
//! The token-based design system behind every published Linknest page.
//!
//! # Overview
//!
//! The theme engine provides:
//! - **Design tokens**: [`ThemeTokens`] — colors, typography, spacing,
//!   shapes, button treatment, and effects for a page
//! - **Templates**: a fixed catalog of starting themes ([`Template`])
//! - **Catalogs**: tier-partitioned palettes, fonts, and button styles
//! - **Style resolution**: pure functions that turn tokens and per-block
//!   overrides into flat style maps for the rendering layer
//!
//! # Quick Start
//!
//! ```rust
//! use linknest_theme::{merge_theme, theme_css_vars, Template, ThemePatch};
//!
//! // A page stores only its template id plus a partial theme.
//! let base = Template::resolve("clean-slate").default_theme();
//! let theme = merge_theme(&base, &ThemePatch::default());
//!
//! // Project the resolved theme into CSS custom properties.
//! let vars = theme_css_vars(&theme);
//! assert_eq!(vars["--ln-color-bg"], theme.color_background);
//! ```
//!
//! # Architecture
//!
//! Every function in this crate is pure and total: resolution takes its
//! complete input as arguments and returns a new value, so concurrent
//! renders never interfere and rendering always succeeds even against
//! legacy persisted data (unknown template ids and button styles fall
//! back instead of failing).
//!
//! Write-time validation of user overrides lives in the
//! `linknest_entitlements` crate; this crate only defines the shapes.

pub mod catalog;
pub mod contrast;
pub mod style;
pub mod templates;
pub mod tier;
pub mod tokens;

// Re-export commonly used types
pub use catalog::{button_styles_for, ColorPalette, FontEntry, GOOGLE_FONTS, SYSTEM_FONTS};
pub use contrast::{contrast_color, relative_luminance, ColorParseError, ContrastColor, Rgb};
pub use style::{resolve_block_style, resolve_button_style, theme_css_vars, ButtonStyleVars, StyleMap};
pub use templates::{LayoutKind, Template, TemplateCategory, TemplateDefinition};
pub use tier::Tier;
pub use tokens::*;
