use mathbox::geom::{self, Point, Transform};
use mathbox::render::{self, Surface};
use mathbox::{Boxed, MathBox, StyleContext, color};
use mathbox_surd::{Generator, Request, SurdResult, Tuning};

use crate::{PxlSurface, layout};

const PX_PER_EM: f32 = 100.0;
const MARGIN: f32 = 10.0;

/// Fill the outline of `res` scaled to `PX_PER_EM`, with a margin around its bounds
fn rasterize(res: &SurdResult) -> (PxlSurface, Transform) {
    let bbox = res.bbox;
    let ts = Transform::from_row(
        PX_PER_EM,
        0.0,
        0.0,
        PX_PER_EM,
        MARGIN - PX_PER_EM * bbox.left(),
        MARGIN - PX_PER_EM * bbox.top(),
    );
    let width = (bbox.width() * PX_PER_EM + 2.0 * MARGIN).ceil() as u32;
    let height = (bbox.height() * PX_PER_EM + 2.0 * MARGIN).ceil() as u32;
    let mut pxl = PxlSurface::new(width, height);
    let path = res.path.as_ref().expect("outline should not degenerate");
    pxl.draw_path(&render::Path {
        path,
        fill: Some(color::BLACK.into()),
        stroke: None,
        transform: Some(&ts),
    });
    (pxl, ts)
}

fn to_px(ts: &Transform, x: f32, y: f32) -> Point {
    let mut p = Point::from_xy(x, y);
    ts.map_point(&mut p);
    p
}

fn generate(height: f32) -> SurdResult {
    let req = Request {
        width: 1.0,
        height,
        ..Default::default()
    };
    Generator::new().generate(&req, &Tuning::default())
}

#[test]
fn outline_fills_within_its_bounds() {
    let res = generate(2.0);
    let (pxl, ts) = rasterize(&res);
    let total = pxl.total_coverage();
    assert!(total > 0);

    let tl = to_px(&ts, res.bbox.left(), res.bbox.top());
    let br = to_px(&ts, res.bbox.right(), res.bbox.bottom());
    let bounds = geom::Rect::from_corners(tl, br).outset(1.0);
    assert_eq!(pxl.coverage(&bounds), total);
}

#[test]
fn outline_covers_both_arms() {
    let res = generate(2.0);
    let (pxl, ts) = rasterize(&res);

    let left = to_px(&ts, res.glyph_left, res.bbox.top());
    let right = to_px(&ts, res.glyph_right(), res.baseline);
    let mid = (left.x + right.x) / 2.0;
    let left_half = geom::Rect::from_xywh(left.x, left.y, mid - left.x, right.y - left.y);
    let right_half = geom::Rect::from_xywh(mid, left.y, right.x - mid, right.y - left.y);

    let l = pxl.coverage(&left_half);
    let r = pxl.coverage(&right_half);
    assert!(l > 0 && r > 0, "left {} right {}", l, r);

    // strokes, not a filled triangle
    let area = left_half.width() * left_half.height() + right_half.width() * right_half.height();
    let fill_ratio = (l + r) as f32 / area;
    assert!(fill_ratio > 0.03 && fill_ratio < 0.7, "fill ratio {}", fill_ratio);
}

#[test]
fn taller_outline_covers_more() {
    let (small, _) = rasterize(&generate(1.0));
    let (tall, _) = rasterize(&generate(4.0));
    assert!(tall.total_coverage() > small.total_coverage());
}

/// Absolute vinculum of the first radical found in the tree drawn at `origin`
fn find_vinculum(b: &MathBox, origin: Point) -> Option<geom::Rect> {
    let mut found = None;
    b.visit(origin, &mut |node, o| {
        if let MathBox::Surd(s) = node {
            found.get_or_insert(s.vinculum.translate(o.x, o.y));
        }
    });
    found
}

#[test]
fn rendered_radical_draws_sign_and_vinculum() {
    let fs = 40.0;
    let b = layout("\\sqrt{x}", fs);
    let origin = Point::from_xy(MARGIN, MARGIN + b.ascent());
    let mut pxl = PxlSurface::new(
        (b.width() + 2.0 * MARGIN).ceil() as u32,
        (b.height() + 2.0 * MARGIN).ceil() as u32,
    );
    b.render(&mut pxl, origin, &StyleContext::new(fs));

    assert_eq!(pxl.texts, vec!["x".to_string()]);

    let vinculum = find_vinculum(&b, origin).expect("should have a radical");
    let center = (vinculum.left() + vinculum.right()) / 2.0;
    let mid_y = (vinculum.top() + vinculum.bottom()) / 2.0;
    assert!(pxl.covered(center as u32, mid_y as u32));

    // the sign itself is drawn left of the radicand
    let content_left = b.as_composite().unwrap().children[0]
        .node
        .as_composite()
        .unwrap()
        .children[1]
        .dx;
    let sign_area = geom::Rect::from_xywh(
        MARGIN,
        vinculum.bottom() + 1.0,
        content_left,
        origin.y - vinculum.bottom(),
    );
    assert!(pxl.coverage(&sign_area) > 0);
}

#[test]
fn rendered_table_draws_borders() {
    let fs = 20.0;
    let b = layout("\\table{a & b \\\\ c & d}", fs);
    let origin = Point::from_xy(MARGIN, MARGIN + b.ascent());
    let mut pxl = PxlSurface::new(
        (b.width() + 2.0 * MARGIN).ceil() as u32,
        (b.height() + 2.0 * MARGIN).ceil() as u32,
    );
    b.render(&mut pxl, origin, &StyleContext::new(fs));

    assert_eq!(pxl.texts.len(), 4);
    // the left border runs along the box edge
    let edge = geom::Rect::from_xywh(MARGIN - 1.0, MARGIN, 2.0, b.height());
    assert!(pxl.coverage(&edge) as f32 > b.height() * 0.5);
}
