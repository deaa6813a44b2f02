//! Interaction Controller
//!
//! Turns raw pointer and drag-and-drop events into window registry
//! operations.
//!
//! # Gestures
//!
//! ```text
//!            down on empty canvas (create mode)
//!   Idle ─────────────────────────────────────────▶ Selecting ──up──▶ Idle (+ create)
//!    │  down on window body                            │
//!    ├───────────────────────▶ Dragging ──up──▶ Idle   │ move: update band
//!    │  down on resize handle                          │
//!    ├───────────────────────▶ Resizing ──up──▶ Idle   leave: discard
//!    │  down on header control
//!    └───────────────────────▶ maximize / close (stays Idle)
//! ```
//!
//! The whole gesture lives in one [`Gesture`] value owned by the
//! [`InteractionController`]; nothing is captured per window. Dropping the
//! gesture (pointer leave) never needs to undo registry state because each
//! step is applied as it happens.
//!
//! # Drag and drop
//!
//! Input badges are dragged onto the surface. Dropping on a window
//! reassigns its input; dropping on an output without a window creates a
//! window covering that whole output.

mod controller;
mod gesture;
mod hit;

pub use controller::InteractionController;
pub use gesture::{DragEvent, DragSession, EditMode, Gesture, PointerEvent};
pub use hit::{HitTarget, HitZones, WindowControl};
