use std::path::Path;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use drobe_core::{seasonal_suggestions, Season};

use crate::commands::{load_config, load_snapshot, CommandResult};

pub fn run(wardrobe: &Path, date: Option<NaiveDate>) -> CommandResult {
    let config = match load_config("suggest") {
        Ok(config) => config,
        Err(result) => return result,
    };
    let snapshot = match load_snapshot("suggest", wardrobe) {
        Ok(snapshot) => snapshot,
        Err(result) => return result,
    };

    let on = match date {
        Some(day) => Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)),
        None => Utc::now(),
    };
    let season = Season::for_date(on);

    let suggestions =
        seasonal_suggestions(&snapshot.outfits, &snapshot.logs, on, &config.analytics);
    tracing::debug!(suggested = suggestions.len(), %season, "seasonal suggestions computed");

    match serde_json::to_value(&suggestions) {
        Ok(data) => CommandResult::success_with_data(
            "suggest",
            format!("{} suggestion(s) for {season}", suggestions.len()),
            data,
        ),
        Err(error) => CommandResult::failure("suggest", "serialization", error.to_string(), 5),
    }
}
