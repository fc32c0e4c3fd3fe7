//! Temporal outfit classification from the wear-event log

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::domain::item::Season;
use crate::domain::outfit::Outfit;
use crate::domain::wear::WearLog;

/// An outfit paired with its exact wear-log count. The count comes from the
/// log, never from a stored counter on the outfit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WornOutfit {
    #[serde(flatten)]
    pub outfit: Outfit,
    pub times_worn: usize,
}

/// Rarely- and frequently-worn projections over one outfit snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WearClassification {
    pub rarely_worn: Vec<Outfit>,
    pub frequently_worn: Vec<WornOutfit>,
}

/// Wear events logged for an exact calendar day, ignoring time of day.
pub fn logs_for_day(logs: &[WearLog], day: NaiveDate) -> Vec<WearLog> {
    logs.iter().filter(|log| log.on_day(day)).cloned().collect()
}

fn latest_wear(outfit: &Outfit, logs: &[WearLog]) -> Option<DateTime<Utc>> {
    logs.iter().filter(|log| log.outfit_id == outfit.id).map(|log| log.date).max()
}

fn wear_count(outfit: &Outfit, logs: &[WearLog]) -> usize {
    logs.iter().filter(|log| log.outfit_id == outfit.id).count()
}

fn is_rarely_worn(
    outfit: &Outfit,
    logs: &[WearLog],
    as_of: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> bool {
    match latest_wear(outfit, logs) {
        None => true,
        Some(latest) => (as_of - latest).num_days() > config.rarely_worn_after_days,
    }
}

/// Outfits with no wear events at all, or whose latest event is strictly
/// older than the configured window.
pub fn rarely_worn_outfits(
    outfits: &[Outfit],
    logs: &[WearLog],
    as_of: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Vec<Outfit> {
    outfits
        .iter()
        .filter(|outfit| is_rarely_worn(outfit, logs, as_of, config))
        .cloned()
        .collect()
}

/// Outfits whose log count meets the configured threshold, each carrying its
/// exact count.
pub fn frequently_worn_outfits(
    outfits: &[Outfit],
    logs: &[WearLog],
    config: &AnalyticsConfig,
) -> Vec<WornOutfit> {
    outfits
        .iter()
        .filter_map(|outfit| {
            let times_worn = wear_count(outfit, logs);
            (times_worn >= config.frequently_worn_threshold)
                .then(|| WornOutfit { outfit: outfit.clone(), times_worn })
        })
        .collect()
}

/// Both wear projections in one pass over the snapshot.
pub fn classify_by_wear(
    outfits: &[Outfit],
    logs: &[WearLog],
    as_of: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> WearClassification {
    WearClassification {
        rarely_worn: rarely_worn_outfits(outfits, logs, as_of, config),
        frequently_worn: frequently_worn_outfits(outfits, logs, config),
    }
}

/// Season-appropriate outfits worth resurfacing on the given date: eligible
/// for the date's season (or universally tagged), rarely worn, capped at the
/// configured limit in input order.
pub fn seasonal_suggestions(
    outfits: &[Outfit],
    logs: &[WearLog],
    on: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Vec<Outfit> {
    let season = Season::for_date(on);

    outfits
        .iter()
        .filter(|outfit| outfit.fits_season(season))
        .filter(|outfit| is_rarely_worn(outfit, logs, on, config))
        .take(config.seasonal_suggestion_limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use crate::domain::item::ItemId;
    use crate::domain::outfit::OutfitId;
    use crate::domain::wear::WearLogId;

    use super::*;

    fn outfit(id: &str, seasons: Vec<Season>) -> Outfit {
        Outfit {
            id: OutfitId(id.to_string()),
            name: id.to_string(),
            items: vec![ItemId("a".to_string()), ItemId("b".to_string()), ItemId("c".to_string())],
            seasons,
            occasions: vec!["casual".to_string()],
            occasion: "casual".to_string(),
            colors: vec![],
            personality_tags: vec![],
            date_added: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn log(id: &str, outfit_id: &str, date: DateTime<Utc>) -> WearLog {
        WearLog {
            id: WearLogId(id.to_string()),
            outfit_id: OutfitId(outfit_id.to_string()),
            date,
            time_of_day: "morning".to_string(),
            weather_condition: None,
            temperature: None,
            notes: None,
        }
    }

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn day_lookup_matches_calendar_date_only() {
        let logs = vec![
            log("l1", "o1", Utc.with_ymd_and_hms(2025, 7, 4, 8, 0, 0).unwrap()),
            log("l2", "o2", Utc.with_ymd_and_hms(2025, 7, 4, 22, 30, 0).unwrap()),
            log("l3", "o1", Utc.with_ymd_and_hms(2025, 7, 5, 8, 0, 0).unwrap()),
        ];

        let day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let matched = logs_for_day(&logs, day);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|log| log.on_day(day)));
    }

    #[test]
    fn unlogged_outfits_are_always_rarely_worn() {
        let outfits = vec![outfit("o1", vec![Season::Summer])];
        let rare = rarely_worn_outfits(&outfits, &[], as_of(), &AnalyticsConfig::default());
        assert_eq!(rare.len(), 1);
    }

    #[test]
    fn rarely_worn_boundary_is_strictly_past_the_window() {
        let outfits = vec![outfit("o1", vec![Season::Summer])];
        let config = AnalyticsConfig::default();

        let aged = |days: i64| vec![log("l1", "o1", as_of() - Duration::days(days))];

        assert_eq!(rarely_worn_outfits(&outfits, &aged(31), as_of(), &config).len(), 1);
        assert_eq!(rarely_worn_outfits(&outfits, &aged(30), as_of(), &config).len(), 0);
        assert_eq!(rarely_worn_outfits(&outfits, &aged(29), as_of(), &config).len(), 0);
    }

    #[test]
    fn only_the_latest_wear_decides_rarity() {
        let outfits = vec![outfit("o1", vec![Season::Summer])];
        let logs = vec![
            log("l1", "o1", as_of() - Duration::days(200)),
            log("l2", "o1", as_of() - Duration::days(3)),
        ];

        let rare = rarely_worn_outfits(&outfits, &logs, as_of(), &AnalyticsConfig::default());
        assert!(rare.is_empty());
    }

    #[test]
    fn frequently_worn_needs_the_full_threshold() {
        let outfits = vec![outfit("o1", vec![Season::Summer]), outfit("o2", vec![Season::Summer])];
        let mut logs = Vec::new();
        for index in 0..5 {
            logs.push(log(&format!("a{index}"), "o1", as_of() - Duration::days(index)));
        }
        for index in 0..4 {
            logs.push(log(&format!("b{index}"), "o2", as_of() - Duration::days(index)));
        }

        let frequent = frequently_worn_outfits(&outfits, &logs, &AnalyticsConfig::default());
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent[0].outfit.id, OutfitId("o1".to_string()));
        // The count is the exact log tally, not a stored counter.
        assert_eq!(frequent[0].times_worn, 5);
    }

    #[test]
    fn classification_returns_both_projections() {
        let outfits = vec![outfit("fresh", vec![Season::Summer]), outfit("staple", vec![Season::All])];
        let mut logs = Vec::new();
        for index in 0..6 {
            logs.push(log(&format!("s{index}"), "staple", as_of() - Duration::days(index)));
        }

        let classified = classify_by_wear(&outfits, &logs, as_of(), &AnalyticsConfig::default());
        assert_eq!(classified.rarely_worn.len(), 1);
        assert_eq!(classified.rarely_worn[0].id, OutfitId("fresh".to_string()));
        assert_eq!(classified.frequently_worn.len(), 1);
        assert_eq!(classified.frequently_worn[0].times_worn, 6);
    }

    #[test]
    fn seasonal_suggestions_cap_at_the_configured_limit() {
        let outfits: Vec<Outfit> =
            (0..10).map(|index| outfit(&format!("o{index}"), vec![Season::Summer])).collect();

        let suggested = seasonal_suggestions(&outfits, &[], as_of(), &AnalyticsConfig::default());
        assert_eq!(suggested.len(), 5);
        // Input order is preserved.
        let ids: Vec<&str> = suggested.iter().map(|outfit| outfit.id.0.as_str()).collect();
        assert_eq!(ids, vec!["o0", "o1", "o2", "o3", "o4"]);
    }

    #[test]
    fn seasonal_suggestions_skip_off_season_and_recently_worn() {
        let outfits = vec![
            outfit("summer-fresh", vec![Season::Summer]),
            outfit("winter", vec![Season::Winter]),
            outfit("universal-recent", vec![Season::All]),
        ];
        let logs = vec![log("l1", "universal-recent", as_of() - Duration::days(2))];

        let suggested = seasonal_suggestions(&outfits, &logs, as_of(), &AnalyticsConfig::default());
        let ids: Vec<&str> = suggested.iter().map(|outfit| outfit.id.0.as_str()).collect();
        assert_eq!(ids, vec!["summer-fresh"]);
    }
}
