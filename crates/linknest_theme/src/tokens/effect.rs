//! Background effect token

use serde::{Deserialize, Serialize};

/// Decorative page-background treatment.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundEffect {
    None,
    /// Uses the theme's `background_gradient` string.
    Gradient,
    Pattern,
    Blur,
}
