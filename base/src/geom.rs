/*!
 * Geometric primitives.
 *
 * Paths, points and transforms are publicly imported from tiny-skia-path.
 *
 * Y low coordinates are at the top. Box metrics (ascent, descent) are expressed
 * as positive distances from a baseline, while positions are in this y-down frame.
 */

use strict_num::{FiniteF32, PositiveF32};
pub use tiny_skia_path::{Path, PathBuilder, PathSegment, PathVerb, Point, Transform};

// both helpers sanitize before wrapping, so the unwraps cannot fail
fn finite(v: f32) -> FiniteF32 {
    let v = if v.is_finite() { v } else { 0.0 };
    FiniteF32::new(v).unwrap()
}

fn positive(v: f32) -> PositiveF32 {
    let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
    PositiveF32::new(v).unwrap()
}

/// A rectangle in 2D space reprensented by x, y, width and height
///
/// Non-finite coordinates are replaced by zero and negative extents are
/// clamped to zero, so a rectangle is always usable by a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: FiniteF32,
    y: FiniteF32,
    w: PositiveF32,
    h: PositiveF32,
}

impl Rect {
    /// Build a rectangle from x, y, width and height
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x: finite(x),
            y: finite(y),
            w: positive(w),
            h: positive(h),
        }
    }

    /// Build a rectangle from top, right, bottom and left
    pub fn from_trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    /// Build a rectangle from two corner points
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Rect::from_trbl(
            p1.y.min(p2.y),
            p1.x.max(p2.x),
            p1.y.max(p2.y),
            p1.x.min(p2.x),
        )
    }

    /// The smallest rectangle containing all points, or `None` if `points` is empty
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        Some(Rect::from_trbl(t, r, b, l))
    }

    /// The X coordinate of the left side
    pub const fn x(&self) -> f32 {
        self.x.get()
    }

    /// The Y coordinate of the top side
    pub const fn y(&self) -> f32 {
        self.y.get()
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f32 {
        self.w.get()
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f32 {
        self.h.get()
    }

    /// The top Y coordinate
    pub const fn top(&self) -> f32 {
        self.y.get()
    }

    /// The right X coordinate
    pub const fn right(&self) -> f32 {
        self.x.get() + self.w.get()
    }

    /// The bottom Y coordinate
    pub const fn bottom(&self) -> f32 {
        self.y.get() + self.h.get()
    }

    /// The left X coordinate
    pub const fn left(&self) -> f32 {
        self.x.get()
    }

    /// Grow the rectangle by `d` on all four sides
    pub fn outset(&self, d: f32) -> Rect {
        Rect::from_xywh(
            self.x() - d,
            self.y() - d,
            self.width() + 2.0 * d,
            self.height() + 2.0 * d,
        )
    }

    /// Unite two rectangles into one that contains both
    pub fn unite(r1: &Rect, r2: &Rect) -> Rect {
        let left = r1.left().min(r2.left());
        let top = r1.top().min(r2.top());
        let right = r1.right().max(r2.right());
        let bottom = r1.bottom().max(r2.bottom());
        Rect::from_trbl(top, right, bottom, left)
    }

    /// Translate the rectangle by dx and dy
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::from_xywh(self.x() + dx, self.y() + dy, self.width(), self.height())
    }

    /// Test if the rectangle contains a point
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Build a path from the rectangle.
    /// Returns `None` for an empty rectangle.
    pub fn to_path(&self) -> Option<Path> {
        let rect = tiny_skia_path::Rect::from_xywh(self.x(), self.y(), self.width(), self.height())?;
        Some(PathBuilder::from_rect(rect))
    }
}

/// Padding around a graphical element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// Uniform padding in all directions
    Even(f32),
    /// Vertical and horizontal padding
    Center {
        /// Vertical padding
        v: f32,
        /// Horizontal padding
        h: f32,
    },
    /// Top, right, bottom and left padding
    Custom {
        /// Top padding
        t: f32,
        /// Right padding
        r: f32,
        /// Bottom padding
        b: f32,
        /// Left padding
        l: f32,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Even(0.0)
    }
}

impl Padding {
    /// The top padding
    pub const fn top(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { v, .. } => *v,
            Padding::Custom { t, .. } => *t,
        }
    }

    /// The right padding
    pub const fn right(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { h, .. } => *h,
            Padding::Custom { r, .. } => *r,
        }
    }

    /// The bottom padding
    pub const fn bottom(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { v, .. } => *v,
            Padding::Custom { b, .. } => *b,
        }
    }

    /// The left padding
    pub const fn left(&self) -> f32 {
        match self {
            Padding::Even(p) => *p,
            Padding::Center { h, .. } => *h,
            Padding::Custom { l, .. } => *l,
        }
    }

    /// The total vertical padding
    pub const fn sum_ver(&self) -> f32 {
        self.top() + self.bottom()
    }

    /// The total horizontal padding
    pub const fn sum_hor(&self) -> f32 {
        self.left() + self.right()
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::Even(value)
    }
}

impl From<(f32, f32)> for Padding {
    fn from((v, h): (f32, f32)) -> Self {
        Padding::Center { v, h }
    }
}

impl From<(f32, f32, f32, f32)> for Padding {
    fn from((t, r, b, l): (f32, f32, f32, f32)) -> Self {
        Padding::Custom { t, r, b, l }
    }
}
