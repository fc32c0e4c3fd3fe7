//! Outfit generation pipeline
//!
//! Partitions an inventory into wearable slots, narrows each slot to the
//! target season, and synthesizes a bounded batch of outfits conditioned on
//! current weather.

mod engine;
mod seasonal;
mod slots;

pub use engine::OutfitGenerator;
pub use seasonal::filter_by_season;
pub use slots::{Slot, SlotInventory};

/// Outfits produced per generation batch.
pub const DEFAULT_OUTFIT_BATCH: usize = 3;

/// Below this many seasonal candidates, a mandatory slot falls back to its
/// unfiltered inventory so generation does not starve in sparse wardrobes.
pub const MIN_SEASONAL_CANDIDATES: usize = 2;

/// Outerwear is layered on only when the known temperature is below this.
pub const OUTERWEAR_BELOW_CELSIUS: f64 = 18.0;

/// Chance that an outfit picks up an accessory, drawn once per outfit.
pub const ACCESSORY_PROBABILITY: f64 = 0.3;

/// Occasion tag seeded into every tally; wins true ties by being counted
/// first.
pub const BASELINE_OCCASION: &str = "casual";

/// Tag pair attached to every generated outfit.
pub const PERSONALITY_TAGS: [&str; 2] = ["trendy", "casual"];

/// Season-qualified name suffixes indexed by batch position.
pub const OUTFIT_NAME_SUFFIXES: [&str; 3] = ["Daily Look", "Casual Style", "Ensemble"];

/// Id prefix for synthesized outfits; the batch index makes ids unique
/// within one generation call.
pub const GENERATED_ID_PREFIX: &str = "generated";
