//! Wardrobe analytics
//!
//! Read-only projections over item and wear-log snapshots: inventory health
//! metrics and temporal outfit classification. Nothing here mutates its
//! inputs; every call allocates fresh output values.

mod insights;
mod wear;

pub use insights::{compute_insights, MostWornItem, WardrobeInsights};
pub use wear::{
    classify_by_wear, frequently_worn_outfits, logs_for_day, rarely_worn_outfits,
    seasonal_suggestions, WearClassification, WornOutfit,
};

/// Items not worn for this many months count toward the unworn percentage.
pub const UNWORN_AFTER_MONTHS: u32 = 6;

/// An outfit whose latest wear is strictly older than this is rarely worn.
pub const RARELY_WORN_AFTER_DAYS: i64 = 30;

/// Wear-log count at which an outfit counts as frequently worn.
pub const FREQUENTLY_WORN_THRESHOLD: usize = 5;

/// Items worn at most this many times count as low-usage.
pub const LOW_USAGE_MAX_WEARS: u32 = 3;

/// Cap on seasonal suggestion results.
pub const SEASONAL_SUGGESTION_LIMIT: usize = 5;
