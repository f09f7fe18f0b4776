//! Plan matrix

use serde::{Deserialize, Serialize};

/// A workspace's resolved subscription plan.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
}

/// Everything a plan entitles a workspace to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanLimits {
    pub max_pages: u32,
    pub max_blocks_per_page: u32,
    /// Pro-tier templates selectable.
    pub premium_templates: bool,
    /// Full hex color picker; free users get curated palettes only.
    pub custom_colors: bool,
    /// Google font catalog; free users get system stacks only.
    pub google_fonts: bool,
    /// Premium button styles (shadow, neon, glass).
    pub animated_buttons: bool,
    /// Analytics retention window, days.
    pub analytics_days: u32,
    /// May hide the product badge on published pages.
    pub remove_badge: bool,
    /// Total uploaded asset budget, bytes.
    pub max_asset_bytes: u64,
}

const FREE_LIMITS: PlanLimits = PlanLimits {
    max_pages: 1,
    max_blocks_per_page: 50,
    premium_templates: false,
    custom_colors: false,
    google_fonts: false,
    animated_buttons: false,
    analytics_days: 7,
    remove_badge: false,
    max_asset_bytes: 50_000_000,
};

const PRO_LIMITS: PlanLimits = PlanLimits {
    max_pages: 5,
    max_blocks_per_page: 100,
    premium_templates: true,
    custom_colors: true,
    google_fonts: true,
    animated_buttons: true,
    analytics_days: 90,
    remove_badge: true,
    max_asset_bytes: 500_000_000,
};

impl Plan {
    /// Stable plan id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }

    /// The full limit set for this plan.
    pub fn limits(self) -> &'static PlanLimits {
        match self {
            Self::Free => &FREE_LIMITS,
            Self::Pro => &PRO_LIMITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_plan_is_fully_restricted() {
        let limits = Plan::Free.limits();
        assert!(!limits.premium_templates);
        assert!(!limits.custom_colors);
        assert!(!limits.google_fonts);
        assert!(!limits.animated_buttons);
        assert!(!limits.remove_badge);
        assert_eq!(limits.max_pages, 1);
        assert_eq!(limits.analytics_days, 7);
    }

    #[test]
    fn pro_plan_unlocks_everything() {
        let limits = Plan::Pro.limits();
        assert!(limits.premium_templates);
        assert!(limits.custom_colors);
        assert!(limits.google_fonts);
        assert!(limits.animated_buttons);
        assert!(limits.remove_badge);
        assert_eq!(limits.max_pages, 5);
        assert_eq!(limits.max_asset_bytes, 500_000_000);
    }

    #[test]
    fn plan_ids_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Plan::Free).unwrap(), "\"free\"");
        assert_eq!(serde_json::to_string(&Plan::Pro).unwrap(), "\"pro\"");
    }
}
