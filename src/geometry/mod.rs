//! Geometry and Scaling
//!
//! Coordinate types and pure conversions between the two spaces the editor
//! works in:
//!
//! - **Screen space:** fractional pixels of the rendering surface. Changes
//!   whenever the host re-lays out the canvas element.
//! - **Virtual space:** integer pixels of the assembled physical wall
//!   (`cols × output_width` by `rows × output_height`).
//!
//! # Conversions
//!
//! Both directions are linear and independent per axis:
//!
//! ```text
//! virtual = round(screen × virtual_extent / surface_extent)
//! screen  = virtual × surface_extent / virtual_extent
//! ```
//!
//! Only the screen → virtual leg rounds, so a round trip lands within one
//! screen pixel of the starting point.
//!
//! A surface with no area (the canvas has not been laid out yet) makes every
//! conversion return `None`. Callers treat that as "skip this recompute" and
//! retry on the next geometry-affecting event.
//!
//! # Example
//!
//! ```rust
//! use lamco_videowall::geometry::{CoordinateSpace, ScreenRect, ScreenSize, VirtualCanvas};
//!
//! let space = CoordinateSpace::new(
//!     ScreenSize::new(768.0, 432.0),
//!     VirtualCanvas::new(7680, 4320),
//! );
//!
//! let virt = space.rect_to_virtual(&ScreenRect::new(10.0, 10.0, 70.0, 70.0)).unwrap();
//! assert_eq!((virt.x, virt.y, virt.width, virt.height), (100, 100, 700, 700));
//! ```

mod rect;
mod scaling;

pub use rect::{ScreenPoint, ScreenRect, ScreenSize, VirtualCanvas, VirtualRect};
pub use scaling::{aspect_fit, to_screen, to_virtual, CoordinateSpace};
