//! Inventory classification into wearable slots

use serde::{Deserialize, Serialize};

use crate::domain::item::ClothingItem;

/// Semantic role a clothing type tag maps into. Top, bottom, and footwear
/// are mandatory for every outfit; outerwear and accessories are additive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Footwear,
    Outerwear,
    Accessory,
}

const TOP_TYPES: &[&str] =
    &["shirt", "t-shirt", "blouse", "tank-top", "crop-top", "sweater", "sweatshirt", "hoodie", "top"];

const BOTTOM_TYPES: &[&str] =
    &["jeans", "pants", "trousers", "chinos", "shorts", "skirt", "leggings", "joggers", "bottom"];

const FOOTWEAR_TYPES: &[&str] =
    &["sneakers", "shoes", "boots", "sandals", "heels", "loafers", "flats", "footwear"];

const OUTERWEAR_TYPES: &[&str] =
    &["jacket", "coat", "blazer", "cardigan", "parka", "raincoat", "trench", "outerwear"];

const ACCESSORY_TYPES: &[&str] =
    &["hat", "cap", "scarf", "belt", "bag", "watch", "sunglasses", "necklace", "bracelet", "accessory"];

impl Slot {
    pub const ALL: [Slot; 5] =
        [Slot::Top, Slot::Bottom, Slot::Footwear, Slot::Outerwear, Slot::Accessory];

    /// The fixed type tags this slot claims. The five tables are pairwise
    /// disjoint; see the disjointness test below.
    pub fn type_tags(self) -> &'static [&'static str] {
        match self {
            Slot::Top => TOP_TYPES,
            Slot::Bottom => BOTTOM_TYPES,
            Slot::Footwear => FOOTWEAR_TYPES,
            Slot::Outerwear => OUTERWEAR_TYPES,
            Slot::Accessory => ACCESSORY_TYPES,
        }
    }

    /// Resolve a free-form type tag to its slot. Unknown tags resolve to
    /// `None` and the item is silently excluded from generation.
    pub fn for_type(kind: &str) -> Option<Slot> {
        let normalized = kind.trim();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.type_tags().iter().any(|tag| tag.eq_ignore_ascii_case(normalized)))
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Footwear => "footwear",
            Slot::Outerwear => "outerwear",
            Slot::Accessory => "accessory",
        }
    }
}

/// A wardrobe partitioned by slot. Borrows from the caller's snapshot; the
/// partition is a pure function of the input order.
#[derive(Debug, Default)]
pub struct SlotInventory<'a> {
    tops: Vec<&'a ClothingItem>,
    bottoms: Vec<&'a ClothingItem>,
    footwear: Vec<&'a ClothingItem>,
    outerwear: Vec<&'a ClothingItem>,
    accessories: Vec<&'a ClothingItem>,
}

impl<'a> SlotInventory<'a> {
    pub fn classify(items: &'a [ClothingItem]) -> Self {
        let mut inventory = Self::default();

        for item in items {
            match Slot::for_type(&item.kind) {
                Some(Slot::Top) => inventory.tops.push(item),
                Some(Slot::Bottom) => inventory.bottoms.push(item),
                Some(Slot::Footwear) => inventory.footwear.push(item),
                Some(Slot::Outerwear) => inventory.outerwear.push(item),
                Some(Slot::Accessory) => inventory.accessories.push(item),
                None => {}
            }
        }

        inventory
    }

    pub fn slot(&self, slot: Slot) -> &[&'a ClothingItem] {
        match slot {
            Slot::Top => &self.tops,
            Slot::Bottom => &self.bottoms,
            Slot::Footwear => &self.footwear,
            Slot::Outerwear => &self.outerwear,
            Slot::Accessory => &self.accessories,
        }
    }

    /// True when every mandatory slot has at least one candidate, before any
    /// season filtering.
    pub fn has_mandatory_slots(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty() && !self.footwear.is_empty()
    }
}
