/*!
 * Procedural generation of the radical (√) outline.
 *
 * The glyph is built from a fixed 16-node cubic Bézier template. For each request,
 * the arms of the template are stretched and rotated so that the glyph rises above
 * the requested content height, and the vinculum (the horizontal bar) is extended
 * over the requested content width.
 *
 * Generation works in em units. Callers scale the result by their font size.
 *
 * ```
 * use mathbox_surd::{Generator, Request, Tuning};
 *
 * let generator = Generator::new();
 * let req = Request { width: 2.0, height: 1.5, ..Default::default() };
 * let res = generator.generate(&req, &Tuning::default());
 * assert!(res.path.is_some());
 * assert!(res.vinculum.width() > 2.0);
 * ```
 */
use mathbox_base::geom::{self, Padding, PathBuilder, Point};

pub mod diag;
mod solve;
pub mod template;
mod tuning;
mod vec;

pub use solve::{MAX_ANGLE_DEG, MIN_ANGLE_DEG};
pub use template::{Node, Template, VINCULUM_THICKNESS};
pub use tuning::{Easing, Param, Resolved, Tuning, TuningError};

/// Rises above this value (in em) are clamped
pub const MAX_RISE: f32 = 1.0e5;

/// Input of [`Generator::generate`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Request {
    /// Width of the content covered by the vinculum
    pub width: f32,
    /// Height of the content enclosed by the glyph
    pub height: f32,
    /// Extra space around the content.
    /// Top and bottom add to the rise, left and right extend the vinculum.
    pub padding: Padding,
    /// Position of the top-left corner of the vinculum in the output frame
    pub origin: Point,
}

/// Outline and metrics of a generated radical.
///
/// Everything is expressed in the output frame: y pointing down,
/// with the top-left corner of the vinculum at the request origin.
#[derive(Debug, Clone)]
pub struct SurdResult {
    /// Closed outline of the radical sign, without the vinculum.
    /// `None` only if the outline degenerated.
    pub path: Option<geom::Path>,
    /// The horizontal bar
    pub vinculum: geom::Rect,
    /// Bounds of the sign and the vinculum
    pub bbox: geom::Rect,
    /// Leftmost X of the sign
    pub glyph_left: f32,
    /// Horizontal extent of the sign, from its leftmost point to the top of the right arm
    pub advance_width: f32,
    /// Distance from the baseline to the top of the bounding box
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the bounding box
    pub descent: f32,
    /// Y of the template baseline
    pub baseline: f32,
    /// Horizontal run of the right arm between the baseline and the top cap
    pub slant_width: f32,
    /// Flat node buffer, see [`diag::decompose`]
    pub points: Vec<f32>,
}

impl SurdResult {
    /// Rightmost X of the sign. Content starts at or after this position.
    pub fn glyph_right(&self) -> f32 {
        self.glyph_left + self.advance_width
    }

    /// SVG path data of the sign outline
    pub fn svg_path_data(&self) -> String {
        diag::svg_path_data(&self.points)
    }

    /// Decoded nodes of the sign outline
    pub fn nodes(&self) -> Vec<diag::NodeRecord> {
        diag::decompose(&self.points)
    }
}

/// The radical outline generator.
///
/// Holds the template and its derived reference geometry.
/// It is immutable after construction and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    template: Template,
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

impl Generator {
    pub fn new() -> Self {
        Generator {
            template: Template::new(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Minimum rise of the glyph, in em
    pub fn base_height(&self) -> f32 {
        self.template.base_height
    }

    /// Generate a radical for the given request.
    ///
    /// Never fails: non-finite inputs are treated as zero and degenerate
    /// geometric steps fall back to the template positions.
    pub fn generate(&self, req: &Request, tuning: &Tuning) -> SurdResult {
        let tpl = &self.template;

        let width = finite_or_zero(req.width).max(0.0);
        let height = finite_or_zero(req.height).max(0.0);
        let pad_top = finite_or_zero(req.padding.top());
        let pad_right = finite_or_zero(req.padding.right());
        let pad_bottom = finite_or_zero(req.padding.bottom());
        let pad_left = finite_or_zero(req.padding.left());
        let origin = Point::from_xy(finite_or_zero(req.origin.x), finite_or_zero(req.origin.y));

        let rise = (height + pad_top + pad_bottom)
            .max(tpl.base_height)
            .min(MAX_RISE);
        let resolved = tuning.resolve(rise, tpl.base_height);
        log::trace!("radical rise {} resolved to {:?}", rise, resolved);

        let nodes = solve::solve(tpl, rise, &resolved);
        let peak = solve::cap_peak(&nodes);

        let flip = |p: Point| Point::from_xy(p.x - peak.x + origin.x, peak.y - p.y + origin.y);

        let mut points = Vec::with_capacity(nodes.len() * diag::FLOATS_PER_NODE);
        let mut flipped = Vec::with_capacity(nodes.len() * 3);
        for n in &nodes {
            for p in [n.handle_in, n.anchor, n.handle_out] {
                let p = flip(p);
                let p = Point::from_xy(finite_or_zero(p.x), finite_or_zero(p.y));
                points.push(p.x);
                points.push(p.y);
                flipped.push(p);
            }
        }

        let path = build_path(&flipped);

        let glyph_bbox = geom::Rect::from_points(&flipped)
            .unwrap_or_else(|| geom::Rect::from_xywh(origin.x, origin.y, 0.0, 0.0));
        let glyph_left = glyph_bbox.left();
        let advance_width = glyph_bbox.width();

        let vinculum = geom::Rect::from_xywh(
            origin.x,
            origin.y,
            (glyph_bbox.right() - origin.x) + pad_left + width + pad_right,
            VINCULUM_THICKNESS,
        );
        let bbox = geom::Rect::unite(&glyph_bbox, &vinculum);

        let baseline = origin.y + peak.y;
        let slant_width =
            nodes[template::CAP_RIGHT].anchor.x - nodes[template::RIGHT_BOTTOM].anchor.x;

        SurdResult {
            path,
            vinculum,
            bbox,
            glyph_left,
            advance_width,
            ascent: baseline - bbox.top(),
            descent: (bbox.bottom() - baseline).max(0.0),
            baseline,
            slant_width: finite_or_zero(slant_width),
            points,
        }
    }
}

/// Build the closed contour from flipped (in, anchor, out) triples
fn build_path(points: &[Point]) -> Option<geom::Path> {
    let count = points.len() / 3;
    if count == 0 {
        return None;
    }
    let node = |i: usize| (points[i * 3], points[i * 3 + 1], points[i * 3 + 2]);

    let mut pb = PathBuilder::new();
    pb.move_to(points[1].x, points[1].y);
    for i in 0..count {
        let (_, a0, out0) = node(i);
        let (in1, a1, _) = node((i + 1) % count);
        if out0 == a0 && in1 == a1 {
            pb.line_to(a1.x, a1.y);
        } else {
            pb.cubic_to(out0.x, out0.y, in1.x, in1.y, a1.x, a1.y);
        }
    }
    pb.close();
    pb.finish()
}
