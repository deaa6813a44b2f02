//! Video Wall Layout
//!
//! Models the physical wall as a `rows × cols` grid of identical outputs and
//! derives the virtual canvas and per-output rectangles from it.
//!
//! # Grid
//!
//! Outputs are numbered row-major starting at 1:
//!
//! ```text
//! ┌────────┬────────┬────────┐
//! │   1    │   2    │   3    │
//! ├────────┼────────┼────────┤
//! │   4    │   5    │   6    │
//! └────────┴────────┴────────┘
//! ```
//!
//! Output `n` at `(row, col)` covers
//! `{ x: col × output_width, y: row × output_height, output_width, output_height }`
//! in virtual space, so the outputs tile the canvas with no gaps or overlaps.
//!
//! # Applying a configuration
//!
//! [`WallLayout::apply`] replaces the configuration wholesale. A grid with
//! more than [`MAX_OUTPUTS`] outputs is rejected and the previous
//! configuration stays active.
//!
//! ```rust
//! use lamco_videowall::wall::{Resolution, WallConfig, WallError, WallLayout};
//!
//! let mut layout = WallLayout::default();
//! let change = layout.apply(WallConfig::new(Resolution::Uhd, 2, 2)).unwrap();
//! assert_eq!(change.new.total_width, 7680);
//!
//! let err = layout.apply(WallConfig::new(Resolution::Uhd, 3, 3)).unwrap_err();
//! assert!(matches!(err, WallError::TooManyOutputs { .. }));
//! assert_eq!(layout.config().rows, 2);
//! ```

mod layout;

pub use layout::{CanvasChange, Output, Outputs, Resolution, WallConfig, WallLayout};

use thiserror::Error;

/// Maximum number of physical outputs a wall may combine
pub const MAX_OUTPUTS: u32 = 8;

/// Wall layout result type
pub type Result<T> = std::result::Result<T, WallError>;

/// Wall layout error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WallError {
    /// Grid has more outputs than the wall controller can drive
    #[error("Too many outputs: {rows}x{cols} = {requested}. Max allowed is {max}.")]
    TooManyOutputs {
        /// Requested rows
        rows: u32,
        /// Requested columns
        cols: u32,
        /// rows × cols
        requested: u64,
        /// Maximum supported
        max: u32,
    },

    /// Grid with a zero dimension
    #[error("Invalid wall dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    /// Resolution key not in the supported enumeration
    #[error("Unknown resolution: {0}")]
    UnknownResolution(String),
}
