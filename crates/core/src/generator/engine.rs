//! Outfit synthesis

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::domain::item::{ClothingItem, ItemId, Season};
use crate::domain::outfit::{Outfit, OutfitId};
use crate::domain::weather::WeatherSnapshot;

use super::seasonal::{filter_by_season, mandatory_candidates};
use super::slots::{Slot, SlotInventory};
use super::{BASELINE_OCCASION, GENERATED_ID_PREFIX, OUTFIT_NAME_SUFFIXES, PERSONALITY_TAGS};

/// Synthesizes season-appropriate outfits from a wardrobe snapshot.
///
/// Selection is uniformly random over the eligible candidates; callers pass
/// the random source so tests can seed it and production can use entropy.
#[derive(Debug, Clone)]
pub struct OutfitGenerator {
    config: GeneratorConfig,
}

impl OutfitGenerator {
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce up to `count` outfits for the target season.
    ///
    /// Top, bottom, and footwear are mandatory: if any of those slots is
    /// empty before season filtering, the result is empty. That is an
    /// insufficient wardrobe, not an error. Item reuse across the batch is
    /// avoided while enough distinct candidates remain, and silently
    /// permitted once a mandatory slot runs out (the overflow policy for
    /// small wardrobes).
    pub fn generate<R: Rng>(
        &self,
        items: &[ClothingItem],
        season: Season,
        weather: Option<&WeatherSnapshot>,
        count: usize,
        as_of: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Outfit> {
        let inventory = SlotInventory::classify(items);
        if !inventory.has_mandatory_slots() {
            return Vec::new();
        }

        let min = self.config.min_seasonal_candidates;
        let tops = mandatory_candidates(inventory.slot(Slot::Top), season, min);
        let bottoms = mandatory_candidates(inventory.slot(Slot::Bottom), season, min);
        let footwear = mandatory_candidates(inventory.slot(Slot::Footwear), season, min);
        let outerwear = filter_by_season(inventory.slot(Slot::Outerwear), season);
        let accessories = filter_by_season(inventory.slot(Slot::Accessory), season);

        let layering_weather = weather
            .map_or(false, |snapshot| snapshot.temperature < self.config.outerwear_below_celsius);

        let mut used: HashSet<ItemId> = HashSet::new();
        let mut outfits = Vec::with_capacity(count);

        for index in 0..count {
            let Some(top) = pick_mandatory(rng, &tops, &used) else { break };
            let Some(bottom) = pick_mandatory(rng, &bottoms, &used) else { break };
            let Some(shoe) = pick_mandatory(rng, &footwear, &used) else { break };

            used.insert(top.id.clone());
            used.insert(bottom.id.clone());
            used.insert(shoe.id.clone());

            let outer = if layering_weather { pick(rng, &outerwear) } else { None };
            if let Some(outer) = outer {
                used.insert(outer.id.clone());
            }

            let accessory = if !accessories.is_empty()
                && rng.gen_bool(self.config.accessory_probability)
            {
                pick(rng, &accessories)
            } else {
                None
            };
            if let Some(accessory) = accessory {
                used.insert(accessory.id.clone());
            }

            // Occasion is carried by the core garments; layers and
            // accessories do not vote.
            let occasion = derive_occasion(&[top, bottom, shoe]);

            let members: Vec<&ClothingItem> =
                [Some(top), Some(bottom), Some(shoe), outer, accessory]
                    .into_iter()
                    .flatten()
                    .collect();

            outfits.push(Outfit {
                id: OutfitId(format!("{GENERATED_ID_PREFIX}-{index}")),
                name: outfit_name(season, index),
                items: members.iter().map(|member| member.id.clone()).collect(),
                seasons: vec![season],
                occasions: vec![occasion.clone()],
                occasion,
                colors: members.iter().filter_map(|member| member.color.clone()).collect(),
                personality_tags: PERSONALITY_TAGS.iter().map(|tag| (*tag).to_string()).collect(),
                date_added: as_of,
            });
        }

        outfits
    }
}

impl Default for OutfitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a ClothingItem]) -> Option<&'a ClothingItem> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}

/// Uniform draw preferring items not yet placed in this batch; once the slot
/// is exhausted the full candidate pool is reused.
fn pick_mandatory<'a, R: Rng>(
    rng: &mut R,
    candidates: &[&'a ClothingItem],
    used: &HashSet<ItemId>,
) -> Option<&'a ClothingItem> {
    let unused: Vec<&ClothingItem> =
        candidates.iter().copied().filter(|item| !used.contains(&item.id)).collect();

    if unused.is_empty() {
        return pick(rng, candidates);
    }
    pick(rng, &unused)
}

/// Most frequent occasion tag across the mandatory members, seeded with the
/// baseline so a bare wardrobe still resolves. Ties go to the tag counted
/// first, which puts the baseline ahead of everything else.
fn derive_occasion(members: &[&ClothingItem]) -> String {
    let mut tally: Vec<(String, u32)> = vec![(BASELINE_OCCASION.to_string(), 1)];

    for member in members {
        for tag in &member.occasions {
            match tally.iter_mut().find(|(seen, _)| seen == tag) {
                Some(entry) => entry.1 += 1,
                None => tally.push((tag.clone(), 1)),
            }
        }
    }

    let mut best = 0;
    for (index, entry) in tally.iter().enumerate().skip(1) {
        if entry.1 > tally[best].1 {
            best = index;
        }
    }

    tally.swap_remove(best).0
}

fn outfit_name(season: Season, index: usize) -> String {
    match OUTFIT_NAME_SUFFIXES.get(index) {
        Some(suffix) => format!("{} {suffix}", season.label()),
        None => format!("{} Outfit", season.label()),
    }
}
