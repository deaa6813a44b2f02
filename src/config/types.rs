//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wall::{Resolution, WallConfig};

/// Initial wall configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSection {
    /// Output resolution ("4k", "2k")
    #[serde(default)]
    pub resolution: Resolution,

    /// Output rows
    #[serde(default = "default_count")]
    pub rows: u32,

    /// Output columns
    #[serde(default = "default_count")]
    pub cols: u32,

    /// Saved settings file (JSON); overrides the values above when present
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
}

fn default_count() -> u32 {
    1
}

impl Default for WallSection {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            rows: default_count(),
            cols: default_count(),
            settings_path: None,
        }
    }
}

impl WallSection {
    /// Grid described by this section
    pub fn wall_config(&self) -> WallConfig {
        WallConfig::new(self.resolution, self.rows, self.cols)
    }
}

/// Rendering surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Container width the surface is fitted into
    pub container_width: f64,

    /// Container height the surface is fitted into
    pub container_height: f64,

    /// Padding on each side of the container
    pub padding: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            container_width: 1280.0,
            container_height: 720.0,
            padding: 0.0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Output format ("pretty", "compact", "json")
    pub format: String,

    /// Directory for log files (None = console only)
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            log_dir: None,
        }
    }
}
