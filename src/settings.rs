//! Persisted wall settings
//!
//! The editor remembers the last applied wall configuration as a small JSON
//! blob:
//!
//! ```json
//! {"resolution":"4k","rows":2,"cols":2}
//! ```
//!
//! Older blobs stored `rows` and `cols` as strings; both forms are read.
//! Missing, empty or zero values fall back to a 4k 1×1 wall.
//!
//! Storage failures never reach the user. A blob that cannot be read is
//! treated as absent and a failed write is logged.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error, warn};

use crate::wall::{Resolution, WallConfig};

/// Persisted wall configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSettings {
    /// Output resolution key
    #[serde(default)]
    pub resolution: Resolution,

    /// Grid rows
    #[serde(default = "default_count", deserialize_with = "count_from_any")]
    pub rows: u32,

    /// Grid columns
    #[serde(default = "default_count", deserialize_with = "count_from_any")]
    pub cols: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u32),
    Text(String),
}

fn count_from_any<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Count::deserialize(deserializer)? {
        Count::Number(n) => n,
        Count::Text(s) if s.trim().is_empty() => 0,
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom)?,
    };

    Ok(if value == 0 { default_count() } else { value })
}

impl Default for WallSettings {
    fn default() -> Self {
        WallConfig::default().into()
    }
}

impl From<WallConfig> for WallSettings {
    fn from(config: WallConfig) -> Self {
        Self {
            resolution: config.resolution,
            rows: config.rows,
            cols: config.cols,
        }
    }
}

impl From<WallSettings> for WallConfig {
    fn from(settings: WallSettings) -> Self {
        WallConfig::new(settings.resolution, settings.rows, settings.cols)
    }
}

/// Storage seam for [`WallSettings`]
pub trait SettingsStore {
    /// Saved settings, or `None` when absent or unreadable
    fn load(&self) -> Option<WallSettings>;

    /// Persist settings; failures are logged, not returned
    fn save(&mut self, settings: &WallSettings);
}

/// Settings stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Option<WallSettings> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved settings at {:?}", self.path);
                return None;
            }
            Err(e) => {
                error!("Error loading settings from {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Ignoring unreadable settings in {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&mut self, settings: &WallSettings) {
        let json = match serde_json::to_string(settings) {
            Ok(json) => json,
            Err(e) => {
                error!("Error serializing settings: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Error creating settings directory {:?}: {}", parent, e);
                return;
            }
        }

        match fs::write(&self.path, json) {
            Ok(()) => debug!("Saved settings to {:?}", self.path),
            Err(e) => error!("Error saving settings to {:?}: {}", self.path, e),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<WallSettings>,
}

impl MemoryStore {
    /// Store pre-seeded with `settings`
    pub fn with_settings(settings: WallSettings) -> Self {
        Self {
            saved: Some(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Option<WallSettings> {
        self.saved
    }

    fn save(&mut self, settings: &WallSettings) {
        self.saved = Some(*settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_numeric_and_string_counts() {
        let numeric: WallSettings =
            serde_json::from_str(r#"{"resolution":"2k","rows":2,"cols":3}"#).unwrap();
        let legacy: WallSettings =
            serde_json::from_str(r#"{"resolution":"2k","rows":"2","cols":"3"}"#).unwrap();

        assert_eq!(numeric, legacy);
        assert_eq!(WallConfig::from(numeric), WallConfig::new(Resolution::Qhd, 2, 3));
    }

    #[test]
    fn test_missing_and_empty_fields_default() {
        let settings: WallSettings = serde_json::from_str(r#"{"rows":"","cols":0}"#).unwrap();
        assert_eq!(settings, WallSettings::default());
        assert_eq!(settings.resolution, Resolution::Uhd);
    }

    #[test]
    fn test_serializes_numbers() {
        let settings = WallSettings::from(WallConfig::new(Resolution::Uhd, 2, 2));
        assert_eq!(
            serde_json::to_string(&settings).unwrap(),
            r#"{"resolution":"4k","rows":2,"cols":2}"#
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("wall.json"));
        assert_eq!(store.load(), None);

        let settings = WallSettings::from(WallConfig::new(Resolution::Qhd, 1, 4));
        store.save(&settings);
        assert_eq!(store.load(), Some(settings));
    }

    #[test]
    fn test_file_store_swallows_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wall.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(JsonFileStore::new(&path).load(), None);

        std::fs::write(&path, r#"{"resolution":"8k"}"#).unwrap();
        assert_eq!(JsonFileStore::new(&path).load(), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), None);
        store.save(&WallSettings::default());
        assert_eq!(store.load(), Some(WallSettings::default()));
    }
}
