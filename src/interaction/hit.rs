//! Hit testing against window chrome

use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenPoint, ScreenRect};
use crate::registry::{WindowId, WindowRegistry};

/// Header button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowControl {
    /// Snap to output quadrants
    Maximize,
    /// Close the window
    Close,
}

/// What lies under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Bare canvas
    Empty,
    /// Window body (header included, controls excluded)
    Body(WindowId),
    /// Bottom-right resize handle
    ResizeHandle(WindowId),
    /// Header button
    Control(WindowId, WindowControl),
}

/// Sizes of the interactive window chrome in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitZones {
    /// Side of the square resize handle
    #[serde(default = "default_resize_handle")]
    pub resize_handle: f64,

    /// Height of the header strip
    #[serde(default = "default_header_height")]
    pub header_height: f64,

    /// Width of each header button
    #[serde(default = "default_control_width")]
    pub control_width: f64,
}

fn default_resize_handle() -> f64 {
    12.0
}

fn default_header_height() -> f64 {
    24.0
}

fn default_control_width() -> f64 {
    20.0
}

impl Default for HitZones {
    fn default() -> Self {
        Self {
            resize_handle: default_resize_handle(),
            header_height: default_header_height(),
            control_width: default_control_width(),
        }
    }
}

impl HitZones {
    /// Resize handle of a window
    pub fn resize_handle_rect(&self, window: &ScreenRect) -> ScreenRect {
        let side = self.resize_handle.min(window.width).min(window.height);
        ScreenRect::new(window.right() - side, window.bottom() - side, side, side)
    }

    /// Header button rect; close is rightmost, maximize to its left
    pub fn control_rect(&self, window: &ScreenRect, control: WindowControl) -> ScreenRect {
        let slot = match control {
            WindowControl::Close => 1.0,
            WindowControl::Maximize => 2.0,
        };
        let height = self.header_height.min(window.height);
        ScreenRect::new(
            window.right() - slot * self.control_width,
            window.y,
            self.control_width,
            height,
        )
    }

    /// Classify `point` against the topmost window containing it
    pub fn hit_test(&self, registry: &WindowRegistry, point: ScreenPoint) -> HitTarget {
        let Some(window) = registry.window_at(point) else {
            return HitTarget::Empty;
        };
        let rect = window.screen_rect;

        for control in [WindowControl::Close, WindowControl::Maximize] {
            if self.control_rect(&rect, control).contains(point) {
                return HitTarget::Control(window.id, control);
            }
        }

        if self.resize_handle_rect(&rect).contains(point) {
            return HitTarget::ResizeHandle(window.id);
        }

        HitTarget::Body(window.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CoordinateSpace, ScreenSize, VirtualCanvas};
    use crate::registry::WindowLimits;
    use crate::source::InputSource;

    fn registry_with_window(rect: ScreenRect) -> (WindowRegistry, WindowId) {
        let space = CoordinateSpace::new(ScreenSize::new(768.0, 432.0), VirtualCanvas::new(7680, 4320));
        let mut registry = WindowRegistry::new(space, WindowLimits::default());
        let id = registry.create(rect, InputSource::Input1).unwrap().id;
        (registry, id)
    }

    #[test]
    fn test_hit_regions() {
        let zones = HitZones::default();
        let (registry, id) = registry_with_window(ScreenRect::new(100.0, 100.0, 200.0, 150.0));

        assert_eq!(
            zones.hit_test(&registry, ScreenPoint::new(290.0, 110.0)),
            HitTarget::Control(id, WindowControl::Close)
        );
        assert_eq!(
            zones.hit_test(&registry, ScreenPoint::new(270.0, 110.0)),
            HitTarget::Control(id, WindowControl::Maximize)
        );
        assert_eq!(
            zones.hit_test(&registry, ScreenPoint::new(295.0, 245.0)),
            HitTarget::ResizeHandle(id)
        );
        assert_eq!(
            zones.hit_test(&registry, ScreenPoint::new(150.0, 110.0)),
            HitTarget::Body(id)
        );
        assert_eq!(
            zones.hit_test(&registry, ScreenPoint::new(50.0, 50.0)),
            HitTarget::Empty
        );
    }

    #[test]
    fn test_handle_never_exceeds_window() {
        let zones = HitZones {
            resize_handle: 500.0,
            ..HitZones::default()
        };
        let rect = ScreenRect::new(0.0, 0.0, 60.0, 80.0);
        let handle = zones.resize_handle_rect(&rect);

        assert_eq!(handle, ScreenRect::new(0.0, 20.0, 60.0, 60.0));
    }
}
