//! Wardrobe materialization format
//!
//! The core operates on already-materialized collections: a host
//! application fetches items, outfits, and wear logs from wherever it keeps
//! them and hands the core one of these snapshots. The JSON shape doubles
//! as the CLI's on-disk format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::item::ClothingItem;
use crate::domain::outfit::Outfit;
use crate::domain::wear::WearLog;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WardrobeSnapshot {
    #[serde(default)]
    pub items: Vec<ClothingItem>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub logs: Vec<WearLog>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not read wardrobe snapshot `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not write wardrobe snapshot `{path}`: {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },
    #[error("malformed wardrobe snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WardrobeSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| SnapshotError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_json(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_file(&self, path: &Path) -> Result<(), SnapshotError> {
        let raw = self.to_json_pretty()?;
        fs::write(path, raw)
            .map_err(|source| SnapshotError::WriteFile { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::item::ItemId;

    use super::*;

    #[test]
    fn parses_a_minimal_snapshot() {
        let raw = r#"{
            "items": [
                {"id": "item-1", "type": "shirt", "color": "white"},
                {"id": "item-2", "type": "jeans"}
            ]
        }"#;

        let snapshot = WardrobeSnapshot::from_json(raw).unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].id, ItemId("item-1".to_string()));
        assert!(snapshot.outfits.is_empty());
        assert!(snapshot.logs.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            WardrobeSnapshot::from_json("{not json"),
            Err(SnapshotError::Parse(_))
        ));
    }

    #[test]
    fn json_round_trip_preserves_the_snapshot() {
        let raw = r#"{
            "items": [{"id": "item-1", "type": "boots", "seasons": ["winter"], "times_worn": 4}]
        }"#;

        let snapshot = WardrobeSnapshot::from_json(raw).unwrap();
        let rendered = snapshot.to_json_pretty().unwrap();
        let reparsed = WardrobeSnapshot::from_json(&rendered).unwrap();
        assert_eq!(snapshot, reparsed);
    }

    #[test]
    fn file_round_trip_via_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wardrobe.json");

        let snapshot = WardrobeSnapshot::from_json(
            r#"{"items": [{"id": "item-1", "type": "shirt"}]}"#,
        )
        .unwrap();

        snapshot.write_file(&path).unwrap();
        let loaded = WardrobeSnapshot::from_file(&path).unwrap();
        assert_eq!(snapshot, loaded);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = WardrobeSnapshot::from_file(Path::new("/nonexistent/wardrobe.json"))
            .expect_err("missing file should fail");
        assert!(error.to_string().contains("/nonexistent/wardrobe.json"));
    }
}
