//! Registry change notifications

use serde::{Deserialize, Serialize};

use super::window::{WindowEntry, WindowId};
use crate::geometry::{ScreenRect, ScreenSize, VirtualCanvas, VirtualRect};
use crate::source::InputSource;

/// Which rectangle drives a rescale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    /// Virtual rects are kept; screen rects are derived from them
    VirtualRect,

    /// Screen rects are recomputed for the new surface (ratios preserved),
    /// then virtual rects are re-derived from them
    ScreenRect,
}

/// Event that invalidates cached screen geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RescaleTrigger {
    /// Wall configuration changed the virtual canvas
    Resolution {
        /// Canvas before the change
        old: VirtualCanvas,
        /// Canvas after the change
        new: VirtualCanvas,
    },

    /// Rendering surface was resized (container resize, tab re-activation)
    Surface {
        /// Surface before the change
        old: ScreenSize,
        /// Surface after the change
        new: ScreenSize,
    },
}

impl RescaleTrigger {
    /// Rectangle that is authoritative for this trigger
    pub fn authority(&self) -> Authority {
        match self {
            RescaleTrigger::Resolution { .. } => Authority::VirtualRect,
            RescaleTrigger::Surface { .. } => Authority::ScreenRect,
        }
    }
}

/// Registry mutation notification
///
/// Every successful mutation yields exactly one event; no-ops yield none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// Window created
    Created(WindowEntry),

    /// Window dragged
    Moved {
        /// Window id
        id: WindowId,
        /// New screen rect
        screen_rect: ScreenRect,
        /// New virtual rect
        virtual_rect: VirtualRect,
    },

    /// Window resized from its handle
    Resized {
        /// Window id
        id: WindowId,
        /// New screen rect
        screen_rect: ScreenRect,
        /// New virtual rect
        virtual_rect: VirtualRect,
    },

    /// Window snapped to output quadrants
    Maximized {
        /// Window id
        id: WindowId,
        /// New screen rect
        screen_rect: ScreenRect,
        /// New virtual rect
        virtual_rect: VirtualRect,
        /// Number of quadrants covered
        quadrants: usize,
    },

    /// Window switched to another input
    InputReassigned {
        /// Window id
        id: WindowId,
        /// Previous input
        from: InputSource,
        /// New input
        to: InputSource,
    },

    /// Window closed
    Removed {
        /// Window id
        id: WindowId,
        /// Input it was showing
        input: InputSource,
    },

    /// All windows closed
    Cleared {
        /// Number of windows removed
        removed: usize,
    },

    /// Screen geometry re-derived for every window
    Rescaled {
        /// What caused the rescale
        trigger: RescaleTrigger,
        /// Number of windows rescaled
        windows: usize,
    },
}

impl RegistryEvent {
    /// Window the event concerns, if it concerns a single one
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            RegistryEvent::Created(entry) => Some(entry.id),
            RegistryEvent::Moved { id, .. }
            | RegistryEvent::Resized { id, .. }
            | RegistryEvent::Maximized { id, .. }
            | RegistryEvent::InputReassigned { id, .. }
            | RegistryEvent::Removed { id, .. } => Some(*id),
            RegistryEvent::Cleared { .. } | RegistryEvent::Rescaled { .. } => None,
        }
    }

    /// True when ordinals may have changed (creation or removal)
    pub fn renumbers(&self) -> bool {
        matches!(
            self,
            RegistryEvent::Created(_) | RegistryEvent::Removed { .. } | RegistryEvent::Cleared { .. }
        )
    }
}
