//! Rectangle and size types for both coordinate spaces

use serde::{Deserialize, Serialize};

/// Point on the rendering surface (canvas-relative, fractional pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size in screen space, also used for the rendering surface and its container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl ScreenSize {
    /// Create a new size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is degenerate when either side is zero, negative or not finite
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl ScreenRect {
    /// Create a new rectangle
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanned by two arbitrary corners
    ///
    /// Used for rubber-band selection, where the pointer may travel up or to
    /// the left of the press position.
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn origin(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    /// Width and height
    pub fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    /// Inclusive point containment (all four edges count as inside)
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Inclusive overlap test; rectangles sharing only an edge intersect
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Overlap with positive area; shared edges do not count
    pub fn overlaps(&self, other: &ScreenRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &ScreenRect) -> ScreenRect {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        ScreenRect::new(left, top, right - left, bottom - top)
    }

    /// Split into a 2×2 grid, row-major (top-left, top-right, bottom-left, bottom-right)
    pub fn quadrants(&self) -> [ScreenRect; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        [
            ScreenRect::new(self.x, self.y, half_w, half_h),
            ScreenRect::new(self.x + half_w, self.y, half_w, half_h),
            ScreenRect::new(self.x, self.y + half_h, half_w, half_h),
            ScreenRect::new(self.x + half_w, self.y + half_h, half_w, half_h),
        ]
    }
}

/// Axis-aligned rectangle in virtual (physical wall) pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VirtualRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl VirtualRect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

/// Total virtual pixel space spanned by all outputs combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VirtualCanvas {
    /// Total width (`cols × output_width`)
    pub total_width: u32,
    /// Total height (`rows × output_height`)
    pub total_height: u32,
}

impl VirtualCanvas {
    /// Create a new canvas
    pub const fn new(total_width: u32, total_height: u32) -> Self {
        Self {
            total_width,
            total_height,
        }
    }

    /// Canvas with no area cannot anchor a conversion
    pub fn is_degenerate(&self) -> bool {
        self.total_width == 0 || self.total_height == 0
    }

    /// Width over height
    pub fn aspect_ratio(&self) -> f64 {
        self.total_width as f64 / self.total_height as f64
    }
}
