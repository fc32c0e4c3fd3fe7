pub mod analytics;
pub mod config;
pub mod domain;
pub mod generator;
pub mod snapshot;

pub use analytics::{
    classify_by_wear, compute_insights, frequently_worn_outfits, logs_for_day,
    rarely_worn_outfits, seasonal_suggestions, MostWornItem, WardrobeInsights,
    WearClassification, WornOutfit,
};
pub use config::{
    AnalyticsConfig, AppConfig, ConfigError, ConfigOverrides, GeneratorConfig, LoadOptions,
    LogFormat, LoggingConfig,
};
pub use domain::item::{ClothingItem, ItemId, Season};
pub use domain::outfit::{Outfit, OutfitId};
pub use domain::wear::{WearLog, WearLogId};
pub use domain::weather::WeatherSnapshot;
pub use generator::{OutfitGenerator, Slot, SlotInventory};
pub use snapshot::{SnapshotError, WardrobeSnapshot};
