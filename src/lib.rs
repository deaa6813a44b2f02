//! # lamco-videowall
//!
//! Headless model of a video wall layout editor.
//!
//! A video wall is a `rows × cols` grid of identical physical outputs that
//! together form one virtual canvas. The editor lets a user draw windows on
//! a scaled-down rendering of that canvas, move and resize them, snap them
//! to output quadrants and assign each a video input. This crate owns every
//! bit of state and geometry behind such an editor; the host only forwards
//! pointer events and paints what [`view::RenderSnapshot`] describes.
//!
//! # Architecture
//!
//! ```text
//! lamco-videowall
//!   ├─> WallEditor (facade, event queue, views, settings)
//!   │     ├─> InteractionController (gestures, hit testing, drag and drop)
//!   │     ├─> WindowRegistry (windows, per-input index, rescaling)
//!   │     └─> WallLayout (grid, canvas, outputs)
//!   └─> Geometry (screen ↔ virtual scaling, aspect fit, overlap tests)
//! ```
//!
//! # Coordinate Spaces
//!
//! - **Screen space**: fractional pixels on the current rendering surface.
//!   Changes whenever the host layout changes.
//! - **Virtual space**: integer pixels on the physical wall. Stable; this is
//!   what window placement means.
//!
//! # Example
//!
//! ```rust
//! use lamco_videowall::editor::{EditorOptions, WallEditor};
//! use lamco_videowall::geometry::{ScreenPoint, ScreenSize, VirtualRect};
//! use lamco_videowall::interaction::PointerEvent;
//! use lamco_videowall::wall::{Resolution, WallConfig};
//!
//! let mut editor =
//!     WallEditor::new(WallConfig::new(Resolution::Uhd, 2, 2), EditorOptions::default()).unwrap();
//! editor.set_surface_size(ScreenSize::new(768.0, 432.0));
//!
//! editor.handle_pointer(PointerEvent::Down(ScreenPoint::new(10.0, 10.0)));
//! editor.handle_pointer(PointerEvent::Up(ScreenPoint::new(80.0, 80.0)));
//!
//! assert_eq!(editor.windows()[0].virtual_rect, VirtualRect::new(100, 100, 700, 700));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Tool configuration
pub mod config;

/// Editor facade
pub mod editor;

/// Editor error type and classification
pub mod error;

/// Screen and virtual coordinate geometry
pub mod geometry;

/// Pointer and drag-and-drop handling
pub mod interaction;

/// Window collection
pub mod registry;

/// Persisted wall settings
pub mod settings;

/// Video input sources
pub mod source;

/// Utility functions
pub mod utils;

/// Render contract
pub mod view;

/// Wall grid and outputs
pub mod wall;

pub use editor::{EditorEvent, EditorOptions, SettingsAccess, View, WallEditor};
pub use error::{classify, EditorError, ErrorDisposition};
