//! Wall configuration and output derivation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Result, WallError, MAX_OUTPUTS};
use crate::geometry::{CoordinateSpace, ScreenPoint, ScreenRect, VirtualCanvas, VirtualRect};

/// Per-output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// 3840×2160
    #[default]
    #[serde(rename = "4k")]
    Uhd,

    /// 2560×1440
    #[serde(rename = "2k")]
    Qhd,
}

impl Resolution {
    /// All supported resolutions, in picker order
    pub const ALL: [Resolution; 2] = [Resolution::Uhd, Resolution::Qhd];

    /// Persisted key
    pub fn key(&self) -> &'static str {
        match self {
            Resolution::Uhd => "4k",
            Resolution::Qhd => "2k",
        }
    }

    /// Output width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::Uhd => (3840, 2160),
            Resolution::Qhd => (2560, 1440),
        }
    }

    /// Label for user-facing pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            Resolution::Uhd => "4K (3840×2160)",
            Resolution::Qhd => "2K (2560×1440)",
        }
    }
}

impl FromStr for Resolution {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WallError::UnknownResolution(s.to_string()))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Wall grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallConfig {
    /// Resolution of every output
    pub resolution: Resolution,

    /// Output rows
    pub rows: u32,

    /// Output columns
    pub cols: u32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::Uhd,
            rows: 1,
            cols: 1,
        }
    }
}

impl WallConfig {
    /// Create a new configuration (not yet validated)
    pub const fn new(resolution: Resolution, rows: u32, cols: u32) -> Self {
        Self {
            resolution,
            rows,
            cols,
        }
    }

    /// Width of a single output
    pub fn output_width(&self) -> u32 {
        self.resolution.dimensions().0
    }

    /// Height of a single output
    pub fn output_height(&self) -> u32 {
        self.resolution.dimensions().1
    }

    /// Number of outputs in the grid
    pub fn output_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Check the grid against [`MAX_OUTPUTS`]
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(WallError::InvalidDimensions(self.rows, self.cols));
        }

        let requested = self.output_count();
        if requested > MAX_OUTPUTS as u64 {
            return Err(WallError::TooManyOutputs {
                rows: self.rows,
                cols: self.cols,
                requested,
                max: MAX_OUTPUTS,
            });
        }

        Ok(())
    }

    /// Total virtual canvas spanned by the grid
    pub fn canvas(&self) -> VirtualCanvas {
        VirtualCanvas::new(
            self.cols.saturating_mul(self.output_width()),
            self.rows.saturating_mul(self.output_height()),
        )
    }

    /// Row-major output sequence, freshly derived from this configuration
    ///
    /// A configuration that fails [`WallConfig::validate`] has no outputs.
    pub fn outputs(&self) -> Outputs {
        let count = match self.validate() {
            Ok(()) => self.output_count() as u32,
            Err(_) => 0,
        };

        Outputs {
            config: *self,
            next: 0,
            count,
        }
    }
}

/// One physical display in the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// 1-based row-major index
    pub index: u32,

    /// Grid row (0-based)
    pub row: u32,

    /// Grid column (0-based)
    pub col: u32,

    /// Region covered in virtual space
    pub virtual_rect: VirtualRect,
}

impl Output {
    /// Region covered on the current surface
    pub fn screen_rect(&self, space: &CoordinateSpace) -> Option<ScreenRect> {
        space.rect_to_screen(&self.virtual_rect)
    }
}

/// Iterator over the outputs of a [`WallConfig`]
///
/// Finite and cheap to recreate: call [`WallConfig::outputs`] again for a
/// fresh pass from output 1.
#[derive(Debug, Clone)]
pub struct Outputs {
    config: WallConfig,
    next: u32,
    count: u32,
}

impl Iterator for Outputs {
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        if self.next >= self.count {
            return None;
        }

        let idx = self.next;
        self.next += 1;

        let row = idx / self.config.cols;
        let col = idx % self.config.cols;
        let (width, height) = self.config.resolution.dimensions();

        Some(Output {
            index: idx + 1,
            row,
            col,
            virtual_rect: VirtualRect::new(
                (col * width) as i32,
                (row * height) as i32,
                width,
                height,
            ),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Outputs {}

/// Canvas dimensions before and after a configuration change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasChange {
    /// Canvas before the change
    pub old: VirtualCanvas,

    /// Canvas after the change
    pub new: VirtualCanvas,
}

impl CanvasChange {
    /// True when the canvas dimensions actually changed
    pub fn is_resize(&self) -> bool {
        self.old != self.new
    }
}

/// Active wall configuration
#[derive(Debug, Clone, Default)]
pub struct WallLayout {
    config: WallConfig,
}

impl WallLayout {
    /// Create a layout from an initial configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configuration exceeds [`MAX_OUTPUTS`]
    pub fn new(config: WallConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Replace the configuration
    ///
    /// Nothing changes when validation fails.
    ///
    /// # Returns
    ///
    /// Old and new canvas so window geometry can be rescaled
    pub fn apply(&mut self, config: WallConfig) -> Result<CanvasChange> {
        if let Err(e) = config.validate() {
            warn!("Rejected wall configuration {}x{}: {}", config.rows, config.cols, e);
            return Err(e);
        }

        let old = self.config.canvas();
        self.config = config;
        let new = self.config.canvas();

        info!(
            "Wall configured: {}x{} @ {} -> canvas {}x{}",
            config.rows, config.cols, config.resolution, new.total_width, new.total_height
        );

        Ok(CanvasChange { old, new })
    }

    /// Current configuration
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Current virtual canvas
    pub fn canvas(&self) -> VirtualCanvas {
        self.config.canvas()
    }

    /// Outputs of the current configuration
    pub fn outputs(&self) -> Outputs {
        self.config.outputs()
    }

    /// First output whose screen rectangle contains `point`
    pub fn output_at(&self, point: ScreenPoint, space: &CoordinateSpace) -> Option<Output> {
        let found = self.outputs().find(|output| {
            output
                .screen_rect(space)
                .is_some_and(|rect| rect.contains(point))
        });

        if let Some(output) = &found {
            debug!("Output {} under ({:.1}, {:.1})", output.index, point.x, point.y);
        }

        found
    }

    /// Screen rectangles of every output quadrant (2×2 per output)
    pub fn quadrants(&self, space: &CoordinateSpace) -> Vec<ScreenRect> {
        self.outputs()
            .filter_map(|output| output.screen_rect(space))
            .flat_map(|rect| rect.quadrants())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScreenSize;
    use proptest::prelude::*;

    fn space_for(config: &WallConfig, surface: ScreenSize) -> CoordinateSpace {
        CoordinateSpace::new(surface, config.canvas())
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[test]
    fn test_resolution_keys() {
        assert_eq!("4k".parse::<Resolution>().unwrap(), Resolution::Uhd);
        assert_eq!("2K".parse::<Resolution>().unwrap(), Resolution::Qhd);
        assert_eq!(Resolution::Qhd.dimensions(), (2560, 1440));
        assert!(matches!(
            "8k".parse::<Resolution>(),
            Err(WallError::UnknownResolution(_))
        ));
    }

    #[test]
    fn test_resolution_serde_key() {
        let json = serde_json::to_string(&Resolution::Qhd).unwrap();
        assert_eq!(json, "\"2k\"");
        let parsed: Resolution = serde_json::from_str("\"4k\"").unwrap();
        assert_eq!(parsed, Resolution::Uhd);
    }

    // =========================================================================
    // Output derivation
    // =========================================================================

    #[test]
    fn test_outputs_2x2_row_major() {
        let config = WallConfig::new(Resolution::Uhd, 2, 2);
        let outputs: Vec<Output> = config.outputs().collect();

        assert_eq!(outputs.len(), 4);
        let origins: Vec<(u32, i32, i32)> = outputs
            .iter()
            .map(|o| (o.index, o.virtual_rect.x, o.virtual_rect.y))
            .collect();
        assert_eq!(
            origins,
            vec![(1, 0, 0), (2, 3840, 0), (3, 0, 2160), (4, 3840, 2160)]
        );
    }

    #[test]
    fn test_outputs_restartable() {
        let config = WallConfig::new(Resolution::Qhd, 1, 3);
        let first: Vec<Output> = config.outputs().collect();
        let second: Vec<Output> = config.outputs().collect();

        assert_eq!(first, second);
        assert_eq!(config.outputs().len(), 3);
    }

    #[test]
    fn test_outputs_of_invalid_config_empty() {
        let huge = WallConfig::new(Resolution::Uhd, 1, 2_000_000);
        assert_eq!(huge.outputs().len(), 0);
        assert!(huge.outputs().next().is_none());

        assert!(WallConfig::new(Resolution::Qhd, 0, 3).outputs().next().is_none());
        assert!(WallConfig::new(Resolution::Uhd, 3, 3).outputs().next().is_none());
    }

    #[test]
    fn test_canvas_totals() {
        let config = WallConfig::new(Resolution::Qhd, 2, 4);
        assert_eq!(config.canvas(), VirtualCanvas::new(10240, 2880));
    }

    // =========================================================================
    // Apply
    // =========================================================================

    #[test]
    fn test_apply_reports_canvas_change() {
        let mut layout = WallLayout::default();
        let change = layout.apply(WallConfig::new(Resolution::Uhd, 2, 2)).unwrap();

        assert_eq!(change.old, VirtualCanvas::new(3840, 2160));
        assert_eq!(change.new, VirtualCanvas::new(7680, 4320));
        assert!(change.is_resize());
    }

    #[test]
    fn test_apply_3x3_rejected_keeps_previous() {
        let mut layout = WallLayout::new(WallConfig::new(Resolution::Qhd, 2, 3)).unwrap();
        let before: Vec<Output> = layout.outputs().collect();

        let err = layout.apply(WallConfig::new(Resolution::Uhd, 3, 3)).unwrap_err();
        assert_eq!(
            err,
            WallError::TooManyOutputs {
                rows: 3,
                cols: 3,
                requested: 9,
                max: 8
            }
        );
        assert_eq!(*layout.config(), WallConfig::new(Resolution::Qhd, 2, 3));
        assert_eq!(layout.outputs().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_apply_zero_dimension_rejected() {
        let mut layout = WallLayout::default();
        let err = layout.apply(WallConfig::new(Resolution::Uhd, 0, 2)).unwrap_err();
        assert_eq!(err, WallError::InvalidDimensions(0, 2));
    }

    #[test]
    fn test_too_many_outputs_message() {
        let err = WallConfig::new(Resolution::Uhd, 3, 3).validate().unwrap_err();
        assert_eq!(err.to_string(), "Too many outputs: 3x3 = 9. Max allowed is 8.");
    }

    // =========================================================================
    // Screen-space queries
    // =========================================================================

    #[test]
    fn test_output_at_point() {
        let config = WallConfig::new(Resolution::Uhd, 2, 2);
        let layout = WallLayout::new(config).unwrap();
        let space = space_for(&config, ScreenSize::new(768.0, 432.0));

        assert_eq!(layout.output_at(ScreenPoint::new(10.0, 10.0), &space).unwrap().index, 1);
        assert_eq!(layout.output_at(ScreenPoint::new(500.0, 300.0), &space).unwrap().index, 4);
        // Shared edge resolves to the first output in row-major order
        assert_eq!(layout.output_at(ScreenPoint::new(384.0, 10.0), &space).unwrap().index, 1);
        assert!(layout.output_at(ScreenPoint::new(800.0, 10.0), &space).is_none());
    }

    #[test]
    fn test_output_at_degenerate_surface() {
        let config = WallConfig::default();
        let layout = WallLayout::new(config).unwrap();
        let space = space_for(&config, ScreenSize::new(0.0, 0.0));

        assert!(layout.output_at(ScreenPoint::new(0.0, 0.0), &space).is_none());
    }

    #[test]
    fn test_quadrants_count() {
        let config = WallConfig::new(Resolution::Uhd, 1, 2);
        let layout = WallLayout::new(config).unwrap();
        let space = space_for(&config, ScreenSize::new(800.0, 225.0));

        let quads = layout.quadrants(&space);
        assert_eq!(quads.len(), 8);
        assert_eq!(quads[0], ScreenRect::new(0.0, 0.0, 200.0, 112.5));
        assert_eq!(quads[7], ScreenRect::new(600.0, 112.5, 200.0, 112.5));
    }

    proptest! {
        #[test]
        fn prop_outputs_tile_canvas(rows in 1u32..=8, cols in 1u32..=8, qhd in any::<bool>()) {
            prop_assume!(rows * cols <= MAX_OUTPUTS);
            let resolution = if qhd { Resolution::Qhd } else { Resolution::Uhd };
            let config = WallConfig::new(resolution, rows, cols);
            let canvas = config.canvas();
            let outputs: Vec<Output> = config.outputs().collect();

            prop_assert_eq!(outputs.len() as u32, rows * cols);

            let mut area: u64 = 0;
            for (i, output) in outputs.iter().enumerate() {
                prop_assert_eq!(output.index, i as u32 + 1);
                prop_assert_eq!(output.row * cols + output.col, i as u32);
                prop_assert!(output.virtual_rect.right() <= canvas.total_width as i64);
                prop_assert!(output.virtual_rect.bottom() <= canvas.total_height as i64);
                area += output.virtual_rect.width as u64 * output.virtual_rect.height as u64;

                for other in &outputs[..i] {
                    let a = output.virtual_rect;
                    let b = other.virtual_rect;
                    let overlap = (a.x as i64) < b.right()
                        && (b.x as i64) < a.right()
                        && (a.y as i64) < b.bottom()
                        && (b.y as i64) < a.bottom();
                    prop_assert!(!overlap);
                }
            }

            // Disjoint and inside the canvas with equal area means no gaps
            prop_assert_eq!(area, canvas.total_width as u64 * canvas.total_height as u64);
        }

        #[test]
        fn prop_oversized_grid_rejected(rows in 1u32..=16, cols in 1u32..=16) {
            prop_assume!(rows * cols > MAX_OUTPUTS);
            let mut layout = WallLayout::default();
            let before = *layout.config();

            let result = layout.apply(WallConfig::new(Resolution::Uhd, rows, cols));
            let is_too_many = matches!(result, Err(WallError::TooManyOutputs { .. }));
            prop_assert!(is_too_many);
            prop_assert_eq!(*layout.config(), before);
        }
    }
}
