//! Screen ↔ virtual scaling
//!
//! Stateless conversions anchored on a [`CoordinateSpace`] (current surface
//! size plus virtual canvas size).

use serde::{Deserialize, Serialize};

use super::rect::{ScreenPoint, ScreenRect, ScreenSize, VirtualCanvas, VirtualRect};

/// Convert one screen-space component to virtual space
///
/// Returns `None` when the surface extent cannot anchor a conversion.
pub fn to_virtual(screen: f64, surface_extent: f64, virtual_extent: u32) -> Option<i32> {
    if !surface_extent.is_finite() || surface_extent <= 0.0 {
        return None;
    }

    Some((screen * virtual_extent as f64 / surface_extent).round() as i32)
}

/// Convert one virtual-space component to screen space (no rounding)
pub fn to_screen(virtual_value: f64, surface_extent: f64, virtual_extent: u32) -> Option<f64> {
    if virtual_extent == 0 || !surface_extent.is_finite() || surface_extent <= 0.0 {
        return None;
    }

    Some(virtual_value * surface_extent / virtual_extent as f64)
}

/// Largest surface with the canvas aspect ratio that fits inside `container`
///
/// When the canvas is relatively wider than the container the width is
/// pinned to the container width; otherwise the height is pinned.
pub fn aspect_fit(canvas: VirtualCanvas, container: ScreenSize) -> Option<ScreenSize> {
    if canvas.is_degenerate() || container.is_degenerate() {
        return None;
    }

    let virtual_ratio = canvas.aspect_ratio();
    let container_ratio = container.width / container.height;

    let fitted = if virtual_ratio > container_ratio {
        ScreenSize::new(container.width, container.width / virtual_ratio)
    } else {
        ScreenSize::new(container.height * virtual_ratio, container.height)
    };

    Some(fitted)
}

/// Surface and canvas dimensions that anchor every conversion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateSpace {
    /// Current rendered size of the canvas surface
    pub surface: ScreenSize,

    /// Virtual canvas the surface represents
    pub canvas: VirtualCanvas,
}

impl CoordinateSpace {
    /// Create a new coordinate space
    pub const fn new(surface: ScreenSize, canvas: VirtualCanvas) -> Self {
        Self { surface, canvas }
    }

    /// True when either side of the surface or canvas has no area
    pub fn is_degenerate(&self) -> bool {
        self.surface.is_degenerate() || self.canvas.is_degenerate()
    }

    /// Virtual pixels per screen pixel on each axis
    pub fn scale(&self) -> Option<(f64, f64)> {
        if self.is_degenerate() {
            return None;
        }

        Some((
            self.canvas.total_width as f64 / self.surface.width,
            self.canvas.total_height as f64 / self.surface.height,
        ))
    }

    /// Map a screen point into virtual space
    pub fn point_to_virtual(&self, point: ScreenPoint) -> Option<(i32, i32)> {
        if self.canvas.is_degenerate() {
            return None;
        }

        let x = to_virtual(point.x, self.surface.width, self.canvas.total_width)?;
        let y = to_virtual(point.y, self.surface.height, self.canvas.total_height)?;
        Some((x, y))
    }

    /// Map a screen rectangle into virtual space
    pub fn rect_to_virtual(&self, rect: &ScreenRect) -> Option<VirtualRect> {
        if self.is_degenerate() {
            return None;
        }

        let (w, h) = (self.surface.width, self.surface.height);
        let (vw, vh) = (self.canvas.total_width, self.canvas.total_height);

        let x = to_virtual(rect.x, w, vw)?;
        let y = to_virtual(rect.y, h, vh)?;
        let width = to_virtual(rect.width, w, vw)?.max(0) as u32;
        let height = to_virtual(rect.height, h, vh)?.max(0) as u32;

        Some(VirtualRect::new(x, y, width, height))
    }

    /// Map a virtual rectangle onto the current surface
    pub fn rect_to_screen(&self, rect: &VirtualRect) -> Option<ScreenRect> {
        if self.is_degenerate() {
            return None;
        }

        let (w, h) = (self.surface.width, self.surface.height);
        let (vw, vh) = (self.canvas.total_width, self.canvas.total_height);

        Some(ScreenRect::new(
            to_screen(rect.x as f64, w, vw)?,
            to_screen(rect.y as f64, h, vh)?,
            to_screen(rect.width as f64, w, vw)?,
            to_screen(rect.height as f64, h, vh)?,
        ))
    }

    /// Surface bounds as a rectangle anchored at the origin
    pub fn surface_rect(&self) -> ScreenRect {
        ScreenRect::new(0.0, 0.0, self.surface.width, self.surface.height)
    }
}
