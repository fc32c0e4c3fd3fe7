use std::path::Path;

use chrono::Utc;
use drobe_core::classify_by_wear;

use crate::commands::{load_config, load_snapshot, CommandResult};

pub fn run(wardrobe: &Path) -> CommandResult {
    let config = match load_config("wear") {
        Ok(config) => config,
        Err(result) => return result,
    };
    let snapshot = match load_snapshot("wear", wardrobe) {
        Ok(snapshot) => snapshot,
        Err(result) => return result,
    };

    let classification =
        classify_by_wear(&snapshot.outfits, &snapshot.logs, Utc::now(), &config.analytics);

    match serde_json::to_value(&classification) {
        Ok(data) => CommandResult::success_with_data(
            "wear",
            format!(
                "{} rarely worn, {} frequently worn of {} outfit(s)",
                classification.rarely_worn.len(),
                classification.frequently_worn.len(),
                snapshot.outfits.len()
            ),
            data,
        ),
        Err(error) => CommandResult::failure("wear", "serialization", error.to_string(), 5),
    }
}
