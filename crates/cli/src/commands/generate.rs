use std::path::Path;

use chrono::Utc;
use drobe_core::{OutfitGenerator, Season, WeatherSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{load_config, load_snapshot, CommandResult};

pub fn run(
    wardrobe: &Path,
    season: Option<Season>,
    temperature: Option<f64>,
    condition: Option<&str>,
    count: Option<usize>,
    rng_seed: Option<u64>,
) -> CommandResult {
    let config = match load_config("generate") {
        Ok(config) => config,
        Err(result) => return result,
    };
    let snapshot = match load_snapshot("generate", wardrobe) {
        Ok(snapshot) => snapshot,
        Err(result) => return result,
    };

    let now = Utc::now();
    let season = season.unwrap_or_else(|| Season::for_date(now));
    let weather = temperature
        .map(|temperature| WeatherSnapshot::new(temperature, condition.unwrap_or_default()));
    // Same ceiling the config layer enforces for batch_size.
    let count = count.unwrap_or(config.generator.batch_size).clamp(1, 50);

    let generator = OutfitGenerator::with_config(config.generator);
    let mut rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outfits =
        generator.generate(&snapshot.items, season, weather.as_ref(), count, now, &mut rng);
    tracing::debug!(requested = count, produced = outfits.len(), %season, "generation finished");

    if outfits.is_empty() {
        return CommandResult::success_with_data(
            "generate",
            "wardrobe is missing a mandatory slot (top, bottom, or footwear); nothing generated",
            serde_json::json!([]),
        );
    }

    match serde_json::to_value(&outfits) {
        Ok(data) => CommandResult::success_with_data(
            "generate",
            format!("generated {} outfit(s) for {season}", outfits.len()),
            data,
        ),
        Err(error) => CommandResult::failure("generate", "serialization", error.to_string(), 5),
    }
}
