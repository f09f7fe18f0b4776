//! Linknest Entitlements
//!
//! The only place plan limits are defined, plus the validation gates
//! that check proposed theme and block overrides against a caller's
//! subscription plan before they are persisted.
//!
//! Gates are pure predicate checks against the static catalogs in
//! `linknest_theme`; no billing state is consulted beyond the caller's
//! already-resolved [`Plan`].
//!
//! ```rust
//! use linknest_entitlements::{validate_style_overrides, Plan};
//! use linknest_theme::{BlockStyleOverrides, BlockVariant};
//!
//! let overrides = BlockStyleOverrides {
//!     variant: Some(BlockVariant::Primary),
//!     ..Default::default()
//! };
//! assert!(validate_style_overrides(&overrides, Plan::Free).is_ok());
//! ```

mod error;
mod gate;
mod plan;

pub use error::ValidationError;
pub use gate::{validate_style_overrides, validate_template_choice, validate_theme_patch};
pub use plan::{Plan, PlanLimits};
