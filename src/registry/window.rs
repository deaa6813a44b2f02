//! Window entry types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenRect, VirtualRect};
use crate::source::InputSource;

/// Stable window identifier
///
/// Allocated from a per-registry counter; never reused while the registry
/// lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window_{}", self.0)
    }
}

/// A window placed on the wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowEntry {
    /// Stable identifier
    pub id: WindowId,

    /// Input shown in the window
    pub input: InputSource,

    /// Position and size on the current rendering surface
    pub screen_rect: ScreenRect,

    /// Position and size on the physical wall
    pub virtual_rect: VirtualRect,

    /// 1-based display number (creation order)
    pub ordinal: usize,
}

impl WindowEntry {
    /// Header title ("Window 3")
    pub fn title(&self) -> String {
        format!("Window {}", self.ordinal)
    }
}
