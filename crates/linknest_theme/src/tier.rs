//! Subscription tiers used to partition templates and catalogs

use serde::{Deserialize, Serialize};

/// Subscription tier a template or catalog entry is available on.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
}

impl Tier {
    /// Stable tier id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}
