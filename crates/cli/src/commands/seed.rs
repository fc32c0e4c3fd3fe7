use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use drobe_core::{
    ClothingItem, ItemId, Outfit, OutfitId, Season, WardrobeSnapshot, WearLog, WearLogId,
};
use uuid::Uuid;

use crate::commands::CommandResult;

struct ItemSeed {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    color: &'static str,
    seasons: &'static [Season],
    occasions: &'static [&'static str],
    times_worn: u32,
    last_worn_days_ago: Option<i64>,
}

const ITEM_SEEDS: &[ItemSeed] = &[
    ItemSeed {
        id: "white-tee",
        name: "White Tee",
        kind: "t-shirt",
        color: "white",
        seasons: &[Season::All],
        occasions: &["casual"],
        times_worn: 24,
        last_worn_days_ago: Some(2),
    },
    ItemSeed {
        id: "oxford-shirt",
        name: "Oxford Shirt",
        kind: "shirt",
        color: "light blue",
        seasons: &[Season::Spring, Season::Autumn],
        occasions: &["office"],
        times_worn: 8,
        last_worn_days_ago: Some(45),
    },
    ItemSeed {
        id: "navy-hoodie",
        name: "Navy Hoodie",
        kind: "hoodie",
        color: "navy",
        seasons: &[Season::Autumn, Season::Winter],
        occasions: &["casual"],
        times_worn: 3,
        last_worn_days_ago: Some(90),
    },
    ItemSeed {
        id: "linen-shirt",
        name: "Linen Shirt",
        kind: "shirt",
        color: "beige",
        seasons: &[Season::Summer],
        occasions: &["casual", "vacation"],
        times_worn: 0,
        last_worn_days_ago: None,
    },
    ItemSeed {
        id: "dark-jeans",
        name: "Dark Jeans",
        kind: "jeans",
        color: "indigo",
        seasons: &[Season::All],
        occasions: &["casual"],
        times_worn: 30,
        last_worn_days_ago: Some(1),
    },
    ItemSeed {
        id: "grey-trousers",
        name: "Grey Trousers",
        kind: "trousers",
        color: "grey",
        seasons: &[Season::Spring, Season::Autumn],
        occasions: &["office"],
        times_worn: 6,
        last_worn_days_ago: Some(45),
    },
    ItemSeed {
        id: "khaki-shorts",
        name: "Khaki Shorts",
        kind: "shorts",
        color: "khaki",
        seasons: &[Season::Summer],
        occasions: &["casual"],
        times_worn: 2,
        last_worn_days_ago: Some(200),
    },
    ItemSeed {
        id: "white-sneakers",
        name: "White Sneakers",
        kind: "sneakers",
        color: "white",
        seasons: &[Season::All],
        occasions: &["casual"],
        times_worn: 28,
        last_worn_days_ago: Some(1),
    },
    ItemSeed {
        id: "brown-boots",
        name: "Brown Boots",
        kind: "boots",
        color: "brown",
        seasons: &[Season::Autumn, Season::Winter],
        occasions: &["casual"],
        times_worn: 5,
        last_worn_days_ago: Some(120),
    },
    ItemSeed {
        id: "black-loafers",
        name: "Black Loafers",
        kind: "loafers",
        color: "black",
        seasons: &[Season::All],
        occasions: &["office"],
        times_worn: 4,
        last_worn_days_ago: Some(45),
    },
    ItemSeed {
        id: "wool-coat",
        name: "Wool Coat",
        kind: "coat",
        color: "charcoal",
        seasons: &[Season::Winter],
        occasions: &[],
        times_worn: 7,
        last_worn_days_ago: Some(150),
    },
    ItemSeed {
        id: "denim-jacket",
        name: "Denim Jacket",
        kind: "jacket",
        color: "blue",
        seasons: &[Season::Spring, Season::Autumn],
        occasions: &[],
        times_worn: 3,
        last_worn_days_ago: Some(60),
    },
    ItemSeed {
        id: "leather-belt",
        name: "Leather Belt",
        kind: "belt",
        color: "brown",
        seasons: &[Season::All],
        occasions: &[],
        times_worn: 12,
        last_worn_days_ago: Some(3),
    },
    ItemSeed {
        id: "wool-scarf",
        name: "Wool Scarf",
        kind: "scarf",
        color: "red",
        seasons: &[Season::Winter],
        occasions: &[],
        times_worn: 1,
        last_worn_days_ago: Some(210),
    },
];

fn demo_items(now: DateTime<Utc>) -> Vec<ClothingItem> {
    ITEM_SEEDS
        .iter()
        .map(|seed| ClothingItem {
            id: ItemId(seed.id.to_string()),
            name: seed.name.to_string(),
            kind: seed.kind.to_string(),
            color: Some(seed.color.to_string()),
            seasons: seed.seasons.to_vec(),
            occasions: seed.occasions.iter().map(|tag| (*tag).to_string()).collect(),
            last_worn: seed.last_worn_days_ago.map(|days| now - Duration::days(days)),
            times_worn: seed.times_worn,
        })
        .collect()
}

fn demo_outfit(
    id: &str,
    name: &str,
    item_ids: &[&str],
    seasons: Vec<Season>,
    occasion: &str,
    colors: &[&str],
    added: DateTime<Utc>,
) -> Outfit {
    Outfit {
        id: OutfitId(id.to_string()),
        name: name.to_string(),
        items: item_ids.iter().map(|item| ItemId((*item).to_string())).collect(),
        seasons,
        occasions: vec![occasion.to_string()],
        occasion: occasion.to_string(),
        colors: colors.iter().map(|color| (*color).to_string()).collect(),
        personality_tags: vec!["trendy".to_string(), "casual".to_string()],
        date_added: added,
    }
}

fn demo_outfits(now: DateTime<Utc>) -> Vec<Outfit> {
    vec![
        demo_outfit(
            "office-staple",
            "Office Staple",
            &["oxford-shirt", "grey-trousers", "black-loafers"],
            vec![Season::Spring, Season::Autumn],
            "office",
            &["light blue", "grey", "black"],
            now - Duration::days(120),
        ),
        demo_outfit(
            "weekend-uniform",
            "Weekend Uniform",
            &["white-tee", "dark-jeans", "white-sneakers"],
            vec![Season::All],
            "casual",
            &["white", "indigo", "white"],
            now - Duration::days(200),
        ),
        demo_outfit(
            "summer-stroll",
            "Summer Stroll",
            &["linen-shirt", "khaki-shorts", "white-sneakers"],
            vec![Season::Summer],
            "casual",
            &["beige", "khaki", "white"],
            now - Duration::days(60),
        ),
    ]
}

fn demo_logs(now: DateTime<Utc>) -> Vec<WearLog> {
    let mut logs: Vec<WearLog> = (0..6)
        .map(|week| WearLog {
            id: WearLogId(Uuid::new_v4().to_string()),
            outfit_id: OutfitId("weekend-uniform".to_string()),
            date: now - Duration::days(1 + week * 3),
            time_of_day: "morning".to_string(),
            weather_condition: Some("clear".to_string()),
            temperature: Some(19.0),
            notes: None,
        })
        .collect();

    logs.push(WearLog {
        id: WearLogId(Uuid::new_v4().to_string()),
        outfit_id: OutfitId("office-staple".to_string()),
        date: now - Duration::days(45),
        time_of_day: "morning".to_string(),
        weather_condition: Some("overcast".to_string()),
        temperature: Some(14.0),
        notes: Some("quarterly review".to_string()),
    });

    logs
}

pub fn run(out: &Path) -> CommandResult {
    let now = Utc::now();
    let snapshot = WardrobeSnapshot {
        items: demo_items(now),
        outfits: demo_outfits(now),
        logs: demo_logs(now),
    };

    if let Err(error) = snapshot.write_file(out) {
        return CommandResult::failure("seed", "snapshot_write", error.to_string(), 5);
    }
    tracing::info!(path = %out.display(), "demo wardrobe snapshot written");

    let message = [
        format!(
            "wrote demo wardrobe snapshot to {} ({} items, {} outfits, {} wear logs)",
            out.display(),
            snapshot.items.len(),
            snapshot.outfits.len(),
            snapshot.logs.len()
        ),
        "  - weekend-uniform: 6 recent wear logs (frequently worn)".to_string(),
        "  - office-staple: last worn 45 days ago (rarely worn)".to_string(),
        "  - summer-stroll: never worn (always a suggestion candidate)".to_string(),
    ]
    .join("\n");

    CommandResult::success("seed", message)
}
