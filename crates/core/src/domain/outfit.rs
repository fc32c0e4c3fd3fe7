use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::item::{ItemId, Season};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitId(pub String);

/// A combination of wardrobe items, either synthesized by the generator or
/// curated externally. Every id in `items` referenced an existing
/// [`crate::domain::item::ClothingItem`] at assembly time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    #[serde(default)]
    pub name: String,
    /// Member item ids in slot order: top, bottom, footwear, then optional
    /// outerwear and accessory.
    pub items: Vec<ItemId>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub occasions: Vec<String>,
    /// Single dominant occasion tag derived from the members.
    #[serde(default)]
    pub occasion: String,
    /// Member colors in slot order, duplicates retained.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub personality_tags: Vec<String>,
    pub date_added: DateTime<Utc>,
}

impl Outfit {
    /// An outfit fits a season when it declares the target season or the
    /// universal `all` tag. Unlike items, an outfit without season data does
    /// not match everything: curated outfits are expected to be tagged.
    pub fn fits_season(&self, season: Season) -> bool {
        self.seasons.contains(&season) || self.seasons.contains(&Season::All)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn outfit(seasons: Vec<Season>) -> Outfit {
        Outfit {
            id: OutfitId("outfit-1".to_string()),
            name: "Summer Ensemble".to_string(),
            items: vec![ItemId("a".to_string()), ItemId("b".to_string())],
            seasons,
            occasions: vec!["casual".to_string()],
            occasion: "casual".to_string(),
            colors: vec![],
            personality_tags: vec![],
            date_added: Utc::now(),
        }
    }

    #[test]
    fn season_fit_requires_explicit_tag_or_universal() {
        assert!(outfit(vec![Season::Summer]).fits_season(Season::Summer));
        assert!(outfit(vec![Season::All]).fits_season(Season::Summer));
        assert!(!outfit(vec![Season::Winter]).fits_season(Season::Summer));
        assert!(!outfit(vec![]).fits_season(Season::Summer));
    }
}
