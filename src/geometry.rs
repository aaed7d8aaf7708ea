//! Points and axis-aligned rectangles in pointer/client coordinate space.
//!
//! Both pointer events and item bounds share one coordinate space, so no
//! conversion happens inside the engine. Hosts that scroll or zoom must hand
//! the engine already-transformed values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns true if `other` lies within `tolerance` of `self` on both axes.
    #[inline]
    pub fn within(&self, other: Point, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned box. `left <= right` and `top <= bottom` hold for every
/// rectangle built through [`Rect::from_corners`] or [`Rect::from_origin_size`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounding box of two arbitrary corners, e.g. a drag anchor and the
    /// current pointer position.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::from_corners(origin, origin.offset(width, height))
    }

    /// Zero-area rectangle at `point`.
    #[inline]
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap test on open intervals. Boxes that only touch along an
    /// edge or at a corner do not intersect. A degenerate box (a point or a
    /// line) still intersects a box it lies strictly inside.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Half-open containment: left/top edges are inside, right/bottom edges
    /// are not, so a point on a shared edge belongs to exactly one of two
    /// adjacent boxes.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    #[inline]
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }
}
