//! Design tokens for page themes
//!
//! Tokens are the atomic values that make up a page's look:
//! - Colors
//! - Typography (font stacks, sizes, weights)
//! - Spacing and layout
//! - Shapes (radii, borders)
//! - Button treatment
//! - Effects (shadows, backgrounds)

mod button;
mod effect;
mod overrides;
mod shadow;
mod theme;

pub use button::*;
pub use effect::*;
pub use overrides::*;
pub use shadow::*;
pub use theme::*;
