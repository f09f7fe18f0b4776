//! Tier-partitioned catalogs
//!
//! Fixed, enumerable sets of allowed values: curated color palettes
//! (the free tier's replacement for a raw color picker), font stacks,
//! and button styles. All static data, initialized at compile time.

mod buttons;
mod fonts;
mod palettes;

pub use buttons::*;
pub use fonts::*;
pub use palettes::*;
