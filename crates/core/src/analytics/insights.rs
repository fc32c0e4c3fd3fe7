//! Point-in-time inventory health metrics

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::domain::item::{ClothingItem, ItemId, Season};
use crate::generator::Slot;

/// The single most-worn item, reported by id and display name so the caller
/// does not have to join back against the inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MostWornItem {
    pub id: ItemId,
    pub name: String,
    pub times_worn: u32,
}

/// Usage metrics over one inventory snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WardrobeInsights {
    /// Share of items unworn within the staleness window, rounded to the
    /// nearest whole percent.
    pub unworn_percentage: u32,
    /// Slot group with the highest summed wear count; `None` when no item
    /// maps onto a slot.
    pub most_worn_slot: Option<Slot>,
    pub most_worn_item: MostWornItem,
    /// Items worn at most the configured low-usage maximum.
    pub low_usage_items: usize,
    /// Items whose declared seasons exclude both the current season and the
    /// universal tag.
    pub seasonal_mismatch: usize,
}

/// Compute inventory health for a snapshot as of the given instant.
///
/// Pure and idempotent: the same snapshot and instant always produce the
/// same metrics. Returns `None` for an empty snapshot, which callers are
/// expected to render as "nothing to analyze".
pub fn compute_insights(
    items: &[ClothingItem],
    as_of: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Option<WardrobeInsights> {
    if items.is_empty() {
        return None;
    }

    let stale_before = as_of - Months::new(config.unworn_after_months);
    let unworn = items
        .iter()
        .filter(|item| item.last_worn.map_or(true, |worn| worn < stale_before))
        .count();
    let unworn_percentage = ((unworn as f64 / items.len() as f64) * 100.0).round() as u32;

    // Ordered tally so ties resolve to the first-encountered slot, in
    // caller-supplied item order.
    let mut slot_tally: Vec<(Slot, u64)> = Vec::new();
    for item in items {
        if let Some(slot) = Slot::for_type(&item.kind) {
            match slot_tally.iter_mut().find(|(seen, _)| *seen == slot) {
                Some(entry) => entry.1 += u64::from(item.times_worn),
                None => slot_tally.push((slot, u64::from(item.times_worn))),
            }
        }
    }
    let mut most_worn_slot: Option<(Slot, u64)> = None;
    for (slot, total) in slot_tally {
        match most_worn_slot {
            None => most_worn_slot = Some((slot, total)),
            Some((_, best)) if total > best => most_worn_slot = Some((slot, total)),
            Some(_) => {}
        }
    }

    let mut top_item = &items[0];
    for item in &items[1..] {
        if item.times_worn > top_item.times_worn {
            top_item = item;
        }
    }

    let low_usage_items =
        items.iter().filter(|item| item.times_worn <= config.low_usage_max_wears).count();

    let current_season = Season::for_date(as_of);
    let seasonal_mismatch = items
        .iter()
        .filter(|item| {
            !item.seasons.is_empty()
                && !item.seasons.contains(&current_season)
                && !item.seasons.contains(&Season::All)
        })
        .count();

    Some(WardrobeInsights {
        unworn_percentage,
        most_worn_slot: most_worn_slot.map(|(slot, _)| slot),
        most_worn_item: MostWornItem {
            id: top_item.id.clone(),
            name: top_item.name.clone(),
            times_worn: top_item.times_worn,
        },
        low_usage_items,
        seasonal_mismatch,
    })
}
