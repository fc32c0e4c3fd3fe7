//! Season narrowing with a sparse-wardrobe fallback

use crate::domain::item::{ClothingItem, Season};

/// Narrow a slot's candidates to those wearable in the target season.
pub fn filter_by_season<'a>(items: &[&'a ClothingItem], season: Season) -> Vec<&'a ClothingItem> {
    items.iter().copied().filter(|item| item.fits_season(season)).collect()
}

/// Seasonal candidates for a mandatory slot. When filtering leaves fewer
/// than `min_candidates`, the unfiltered slot is used instead: off-season
/// picks beat failing to dress the user. Optional slots do not get this
/// fallback and simply stay empty.
pub(crate) fn mandatory_candidates<'a>(
    items: &[&'a ClothingItem],
    season: Season,
    min_candidates: usize,
) -> Vec<&'a ClothingItem> {
    let filtered = filter_by_season(items, season);
    if filtered.len() < min_candidates {
        return items.to_vec();
    }
    filtered
}
