//! Pointer gesture records and host events

use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenPoint, ScreenRect};
use crate::registry::WindowId;
use crate::source::InputSource;

/// Pointer event in surface-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(ScreenPoint),
    /// Pointer moved
    Move(ScreenPoint),
    /// Primary button released
    Up(ScreenPoint),
    /// Pointer left the surface or the gesture was cancelled
    Leave,
}

/// Drag-and-drop event for an input badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Badge picked up
    Start(InputSource),
    /// Badge hovering over the surface
    Over(ScreenPoint),
    /// Badge released over the surface
    Drop(ScreenPoint),
    /// Drag finished or cancelled
    End,
}

/// Canvas editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Rubber-band on empty canvas creates windows
    #[default]
    Create,
    /// Rubber-band disabled; windows can still be moved and resized
    Select,
}

/// In-flight pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture
    #[default]
    Idle,

    /// Rubber-band selection
    Selecting {
        /// Press position
        origin: ScreenPoint,
        /// Latest pointer position
        current: ScreenPoint,
    },

    /// Moving a window
    Dragging {
        /// Window being moved
        id: WindowId,
        /// Pointer position relative to the window origin at press time
        offset: ScreenPoint,
    },

    /// Resizing a window from its handle
    Resizing {
        /// Window being resized
        id: WindowId,
    },
}

impl Gesture {
    /// True when no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Normalized rubber band, while selecting
    pub fn selection_rect(&self) -> Option<ScreenRect> {
        match self {
            Gesture::Selecting { origin, current } => Some(ScreenRect::from_corners(*origin, *current)),
            _ => None,
        }
    }

    /// Window the gesture acts on
    pub fn target(&self) -> Option<WindowId> {
        match self {
            Gesture::Dragging { id, .. } | Gesture::Resizing { id } => Some(*id),
            Gesture::Idle | Gesture::Selecting { .. } => None,
        }
    }
}

/// Input badge drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Input being dragged
    pub input: InputSource,

    /// Output currently under the badge
    pub highlighted: Option<u32>,
}
