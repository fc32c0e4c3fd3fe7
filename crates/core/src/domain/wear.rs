use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::outfit::OutfitId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WearLogId(pub String);

/// A record asserting that an outfit was (or is planned to be) worn on a
/// given day. Append-only from this core's perspective: entries are created
/// by the external logging flow and only ever read here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WearLog {
    pub id: WearLogId,
    pub outfit_id: OutfitId,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub weather_condition: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WearLog {
    /// Calendar-day match, ignoring the time-of-day component of `date`.
    pub fn on_day(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn day_match_ignores_clock_time() {
        let log = WearLog {
            id: WearLogId("log-1".to_string()),
            outfit_id: OutfitId("outfit-1".to_string()),
            date: Utc.with_ymd_and_hms(2025, 7, 4, 23, 15, 0).unwrap(),
            time_of_day: "evening".to_string(),
            weather_condition: None,
            temperature: None,
            notes: None,
        };

        assert!(log.on_day(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()));
        assert!(!log.on_day(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()));
    }
}
