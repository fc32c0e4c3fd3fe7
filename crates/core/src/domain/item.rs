use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Wearing seasons an item or outfit is declared for. `All` is the universal
/// tag and matches every target season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    All,
}

impl Season {
    /// Calendar season for a date: March-May spring, June-August summer,
    /// September-November autumn, December-February winter.
    pub fn for_date(date: DateTime<Utc>) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::All => "All-Season",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            "all" => Ok(Season::All),
            other => Err(format!(
                "unknown season `{other}` (expected spring|summer|autumn|winter|all)"
            )),
        }
    }
}

/// A single piece of clothing as materialized from the external store.
///
/// This core never mutates an item: `times_worn` and `last_worn` are advanced
/// by the external wear-logging flow, and edits happen in the wardrobe
/// management surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    /// Type tag, e.g. `t-shirt` or `sneakers`. Mapped onto a slot by the
    /// inventory classifier; unmapped tags are ignored by generation.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub times_worn: u32,
}

impl ClothingItem {
    /// An item fits a season when it declares no seasons at all, declares the
    /// target season, or carries the universal `all` tag.
    pub fn fits_season(&self, season: Season) -> bool {
        self.seasons.is_empty()
            || self.seasons.contains(&season)
            || self.seasons.contains(&Season::All)
    }
}
