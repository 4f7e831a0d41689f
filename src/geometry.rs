//! Window-space geometry
//!
//! All UI math runs in `f32` pixels relative to the owning window's
//! top-left corner. Backends convert to integer rects only at draw time.

use serde::{Deserialize, Serialize};

/// A point in window space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle
///
/// Used both for source rectangles inside a skin image and for hit areas /
/// cursor rectangles inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point lies inside (left/top inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Splits the rectangle into four equal quadrants.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Rect; 4] {
        let w = self.width / 2.0;
        let h = self.height / 2.0;
        [
            Rect::new(self.x, self.y, w, h),
            Rect::new(self.x + w, self.y, w, h),
            Rect::new(self.x, self.y + h, w, h),
            Rect::new(self.x + w, self.y + h, w, h),
        ]
    }
}

/// Clamps a requested window dimension to the supported range
pub fn clamp_dimension(value: f32) -> f32 {
    value.clamp(1.0, 4096.0)
}
