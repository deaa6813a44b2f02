//! Window Registry
//!
//! Authoritative collection of the windows placed on the wall.
//!
//! # Geometry ownership
//!
//! Every [`WindowEntry`] carries two rectangles:
//!
//! - `virtual_rect` - durable, expressed in physical wall pixels
//! - `screen_rect` - cache for the current rendering surface
//!
//! Pointer-driven mutations (move, resize, maximize) edit the screen rect and
//! immediately re-derive the virtual rect from it. Layout-driven changes go
//! through [`WindowRegistry::rescale_all`], whose [`RescaleTrigger`] states
//! which rectangle is authoritative for that event.
//!
//! # Numbering
//!
//! Windows keep creation order. After every creation or removal the
//! survivors are renumbered densely `1..=N` (`ordinal`), which is what the
//! window headers display. Ids never change and are never reused.
//!
//! # Per-input index
//!
//! The registry also indexes window ids by assigned input so the input
//! palette can show per-input counts without scanning. The index stores ids
//! only; the entry itself lives in one place.
//!
//! # No-op semantics
//!
//! Continuous interactions never fail loudly. Operations on an unknown id, on
//! a surface with no area, or that would shrink a window below the resize
//! minimum return `None` and leave the registry untouched.

mod events;
mod window;
mod windows;

pub use events::{Authority, RegistryEvent, RescaleTrigger};
pub use window::{WindowEntry, WindowId};
pub use windows::WindowRegistry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry result type
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Registry error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Requested rectangle is below the creation minimum
    #[error("Window too small: {width:.1}x{height:.1} (minimum {min_width}x{min_height})")]
    TooSmall {
        /// Requested width (screen pixels)
        width: f64,
        /// Requested height (screen pixels)
        height: f64,
        /// Exclusive minimum width
        min_width: f64,
        /// Exclusive minimum height
        min_height: f64,
    },

    /// Rendering surface has no area yet
    #[error("Rendering surface has no area")]
    DegenerateSurface,

    /// Window id no longer present
    #[error("Unknown window: {0}")]
    UnknownWindow(WindowId),
}

/// Size thresholds in screen pixels (all exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowLimits {
    /// Width a new window must exceed
    #[serde(default = "default_min_create_width")]
    pub min_create_width: f64,

    /// Height a new window must exceed
    #[serde(default = "default_min_create_height")]
    pub min_create_height: f64,

    /// Width a resized window must exceed
    #[serde(default = "default_min_resize_width")]
    pub min_resize_width: f64,

    /// Height a resized window must exceed
    #[serde(default = "default_min_resize_height")]
    pub min_resize_height: f64,
}

fn default_min_create_width() -> f64 {
    50.0
}

fn default_min_create_height() -> f64 {
    50.0
}

fn default_min_resize_width() -> f64 {
    150.0
}

fn default_min_resize_height() -> f64 {
    100.0
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self {
            min_create_width: default_min_create_width(),
            min_create_height: default_min_create_height(),
            min_resize_width: default_min_resize_width(),
            min_resize_height: default_min_resize_height(),
        }
    }
}
