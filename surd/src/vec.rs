//! Small 2D helpers on [`Point`] used by the outline solver
use mathbox_base::geom::Point;

pub(crate) const EPS: f32 = 1e-6;

#[inline]
pub(crate) const fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[inline]
pub(crate) fn add(a: Point, b: Point) -> Point {
    pt(a.x + b.x, a.y + b.y)
}

#[inline]
pub(crate) fn sub(a: Point, b: Point) -> Point {
    pt(a.x - b.x, a.y - b.y)
}

#[inline]
pub(crate) fn scale(a: Point, s: f32) -> Point {
    pt(a.x * s, a.y * s)
}

#[inline]
pub(crate) fn dot(a: Point, b: Point) -> f32 {
    a.x * b.x + a.y * b.y
}

#[inline]
pub(crate) fn cross(a: Point, b: Point) -> f32 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub(crate) fn length(a: Point) -> f32 {
    dot(a, a).sqrt()
}

pub(crate) fn midpoint(a: Point, b: Point) -> Point {
    pt((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Unit vector of `a`, or `None` if `a` is (nearly) null
pub(crate) fn normalize(a: Point) -> Option<Point> {
    let len = length(a);
    if len.is_finite() && len > EPS {
        Some(scale(a, 1.0 / len))
    } else {
        None
    }
}

/// Unit vector pointing at `deg` degrees (counter-clockwise, y-up)
pub(crate) fn from_angle(deg: f32) -> Point {
    let (s, c) = deg.to_radians().sin_cos();
    pt(c, s)
}

/// Angle of `a` in degrees (counter-clockwise, y-up)
pub(crate) fn angle_of(a: Point) -> f32 {
    a.y.atan2(a.x).to_degrees()
}

/// Rotate `p` about `center` by `deg` degrees counter-clockwise
pub(crate) fn rotate_about(p: Point, center: Point, deg: f32) -> Point {
    let (s, c) = deg.to_radians().sin_cos();
    let d = sub(p, center);
    pt(center.x + d.x * c - d.y * s, center.y + d.x * s + d.y * c)
}

/// Intersection of the line through `p1` along `d1` and the line through `p2` along `d2`.
/// Returns `None` for (nearly) parallel lines.
pub(crate) fn intersect(p1: Point, d1: Point, p2: Point, d2: Point) -> Option<Point> {
    let den = cross(d1, d2);
    if !den.is_finite() || den.abs() < EPS {
        return None;
    }
    let t = cross(sub(p2, p1), d2) / den;
    let res = add(p1, scale(d1, t));
    (res.x.is_finite() && res.y.is_finite()).then_some(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_lines() {
        let p = intersect(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0), pt(-1.0, 1.0)).unwrap();
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);

        assert!(intersect(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(2.0, 0.0)).is_none());
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(pt(2.0, 1.0), pt(1.0, 1.0), 90.0);
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn angles() {
        assert!((angle_of(from_angle(66.0)) - 66.0).abs() < 1e-4);
        assert!((angle_of(from_angle(115.0)) - 115.0).abs() < 1e-4);
        assert!(normalize(pt(0.0, 0.0)).is_none());
    }
}
