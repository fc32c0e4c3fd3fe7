use std::path::Path;

use chrono::Utc;
use drobe_core::compute_insights;

use crate::commands::{load_config, load_snapshot, CommandResult};

pub fn run(wardrobe: &Path) -> CommandResult {
    let config = match load_config("insights") {
        Ok(config) => config,
        Err(result) => return result,
    };
    let snapshot = match load_snapshot("insights", wardrobe) {
        Ok(snapshot) => snapshot,
        Err(result) => return result,
    };

    // An empty inventory has no meaningful percentages; surface it as an
    // explicit outcome instead of rendering zeros.
    let Some(insights) = compute_insights(&snapshot.items, Utc::now(), &config.analytics) else {
        return CommandResult::failure(
            "insights",
            "empty_wardrobe",
            "the snapshot has no items to analyze",
            4,
        );
    };

    match serde_json::to_value(&insights) {
        Ok(data) => CommandResult::success_with_data(
            "insights",
            format!("analyzed {} item(s)", snapshot.items.len()),
            data,
        ),
        Err(error) => CommandResult::failure("insights", "serialization", error.to_string(), 5),
    }
}
