//! Configuration management
//!
//! Handles loading, validation, and merging of tool configuration from:
//! - TOML files
//! - CLI arguments
//!
//! Every section is optional; an empty file yields the defaults.
//!
//! ```toml
//! [wall]
//! resolution = "4k"
//! rows = 2
//! cols = 2
//!
//! [limits]
//! min_resize_width = 150.0
//!
//! [surface]
//! container_width = 1280.0
//! container_height = 720.0
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod types;

pub use types::{LoggingConfig, SurfaceConfig, WallSection};

use crate::editor::EditorOptions;
use crate::geometry::ScreenSize;
use crate::interaction::HitZones;
use crate::registry::WindowLimits;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Initial wall
    #[serde(default)]
    pub wall: WallSection,
    /// Window size thresholds
    #[serde(default)]
    pub limits: WindowLimits,
    /// Window chrome sizes
    #[serde(default)]
    pub hit_zones: HitZones,
    /// Rendering surface
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EditorConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: EditorConfig = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.wall
            .wall_config()
            .validate()
            .context("Invalid [wall] section")?;

        let limits = &self.limits;
        for (name, value) in [
            ("min_create_width", limits.min_create_width),
            ("min_create_height", limits.min_create_height),
            ("min_resize_width", limits.min_resize_width),
            ("min_resize_height", limits.min_resize_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Invalid limit {}: {}", name, value);
            }
        }

        let zones = &self.hit_zones;
        if zones.resize_handle <= 0.0 || zones.header_height <= 0.0 || zones.control_width <= 0.0 {
            anyhow::bail!("Hit zone sizes must be positive");
        }

        if !self.surface.padding.is_finite() || self.surface.padding < 0.0 {
            anyhow::bail!("Invalid surface padding: {}", self.surface.padding);
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            _ => anyhow::bail!("Invalid log format: {}", self.logging.format),
        }

        Ok(())
    }

    /// Override config with CLI arguments
    pub fn with_overrides(mut self, container: Option<ScreenSize>, padding: Option<f64>) -> Self {
        if let Some(container) = container {
            self.surface.container_width = container.width;
            self.surface.container_height = container.height;
        }
        if let Some(padding) = padding {
            self.surface.padding = padding;
        }

        self
    }

    /// Editor tunables from this configuration
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            limits: self.limits,
            zones: self.hit_zones,
            padding: self.surface.padding,
        }
    }

    /// Container the surface is fitted into
    pub fn container(&self) -> ScreenSize {
        ScreenSize::new(self.surface.container_width, self.surface.container_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::{Resolution, WallConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default_config();
        assert_eq!(config.wall.resolution, Resolution::Uhd);
        assert_eq!(config.wall.rows, 1);
        assert_eq!(config.limits.min_resize_width, 150.0);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[wall]\nresolution = \"2k\"\nrows = 2\ncols = 4\n\n[limits]\nmin_create_width = 80.0\n"
        )
        .unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.wall.resolution, Resolution::Qhd);
        assert_eq!(config.wall.cols, 4);
        assert_eq!(config.limits.min_create_width, 80.0);
        assert_eq!(config.limits.min_create_height, 50.0);
        assert_eq!(config.surface.container_width, 1280.0);
    }

    #[test]
    fn test_validation_rejects_large_wall() {
        let mut config = EditorConfig::default_config();
        config.wall.rows = 3;
        config.wall.cols = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let mut config = EditorConfig::default_config();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = EditorConfig::default_config()
            .with_overrides(Some(ScreenSize::new(800.0, 600.0)), None);

        assert_eq!(config.container(), ScreenSize::new(800.0, 600.0));
        assert_eq!(config.surface.padding, 0.0);
        assert_eq!(config.wall.wall_config(), WallConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = EditorConfig::load("/nonexistent/videowall.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
