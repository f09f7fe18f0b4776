//! Shadow tokens

use serde::{Deserialize, Serialize};

/// Page-level elevation scale.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    None,
    Sm,
    Md,
    Lg,
}

impl ShadowLevel {
    /// CSS `box-shadow` value for this level.
    pub fn css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "0 1px 3px rgba(0,0,0,0.08)",
            Self::Md => "0 4px 14px rgba(0,0,0,0.15)",
            Self::Lg => "0 8px 30px rgba(0,0,0,0.2)",
        }
    }
}

/// Shadow levels a block override may select.
///
/// Blocks stop at `md`; the `lg` elevation is reserved for page-level
/// theming.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockShadow {
    None,
    Sm,
    Md,
}

impl BlockShadow {
    /// CSS `box-shadow` value, shared with the page-level table.
    pub fn css(self) -> &'static str {
        match self {
            Self::None => ShadowLevel::None.css(),
            Self::Sm => ShadowLevel::Sm.css(),
            Self::Md => ShadowLevel::Md.css(),
        }
    }
}
