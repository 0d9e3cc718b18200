//! Radical layout around a generated surd
use mathbox_surd::{self as surd, Generator, Request, Tuning, VINCULUM_THICKNESS, template};

use super::boxes::{Boxed, Child, Composite, Extent, MathBox, Surd};
use crate::geom::{self, Padding, Point, Transform};
use crate::metrics::Metrics;
use crate::style::StyleContext;

/// Horizontal placement of the radicand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadicalFrame {
    /// Maps the generator output (em) to the box frame (px)
    pub transform: Transform,
    /// Right end of the sign, in the box frame
    pub advance: f32,
    /// Padding added between the sign and the radicand
    pub pad: f32,
}

fn request(content: Extent, metrics: &Metrics, font_size: f32) -> Request {
    let inv = if font_size > 0.0 { 1.0 / font_size } else { 0.0 };
    Request {
        width: content.width * inv,
        height: content.height() * inv + metrics.surd_gap,
        padding: Padding::Custom {
            t: 0.0,
            r: 0.0,
            b: metrics.surd_extra_hook,
            l: 0.0,
        },
        origin: Point::zero(),
    }
}

/// X of the line through two points at height `y`
fn line_x_at(p1: Point, p2: Point, y: f32) -> f32 {
    let dy = p2.y - p1.y;
    if dy.abs() < 1e-6 {
        return p1.x.max(p2.x);
    }
    p1.x + (y - p1.y) * (p2.x - p1.x) / dy
}

/// Place the generated sign relative to content sitting on the baseline.
///
/// The vinculum bottom is set `surd_gap` above the content top and the leftmost
/// point of the sign at x = 0. The content is then moved horizontally so that the
/// distance between the outer edge of the right arm and the content, measured at the
/// content mid-height, equals `surd_slant_gap`. The padding is negative when the
/// content slides left under the vinculum. The content never starts left of the
/// bottom of the right arm.
pub fn frame(
    res: &surd::SurdResult,
    content: Extent,
    metrics: &Metrics,
    font_size: f32,
) -> RadicalFrame {
    let fs = font_size;
    let oy = -content.ascent - metrics.surd_gap * fs - VINCULUM_THICKNESS * fs;
    let ox = -res.glyph_left * fs;
    let transform = Transform::from_row(fs, 0.0, 0.0, fs, ox, oy);
    let advance = res.advance_width * fs;

    let to_box = |p: Point| Point::from_xy(p.x * fs + ox, p.y * fs + oy);
    let nodes = res.nodes();
    let pad = match (
        nodes.get(template::RIGHT_BOTTOM),
        nodes.get(template::RIGHT_OUTER_UPPER),
    ) {
        (Some(bottom), Some(upper)) => {
            let bottom = to_box(bottom.anchor);
            let mid = (content.descent - content.ascent) / 2.0;
            let edge = line_x_at(bottom, to_box(upper.anchor), mid);
            let pad = edge + metrics.surd_slant_gap * fs - advance;
            let min_pad = bottom.x - advance;
            if pad.is_finite() && min_pad.is_finite() {
                pad.max(min_pad)
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    RadicalFrame {
        transform,
        advance,
        pad,
    }
}

/// Enclose `content` under a radical sign. Children are the sign, then the content.
pub fn layout(
    content: MathBox,
    generator: &Generator,
    tuning: &Tuning,
    metrics: &Metrics,
    style: &StyleContext,
) -> Composite {
    let fs = style.font_size;
    let inner = content.extent();
    let res = generator.generate(&request(inner, metrics, fs), tuning);
    let f = frame(&res, inner, metrics, fs);
    log::trace!(
        "radical over {:?}: advance {} pad {}",
        inner,
        f.advance,
        f.pad
    );

    let vinculum = geom::Rect::from_xywh(
        f.transform.tx + res.vinculum.x() * fs,
        f.transform.ty + res.vinculum.y() * fs,
        res.vinculum.width() * fs + f.pad,
        res.vinculum.height() * fs,
    );
    let bbox_top = f.transform.ty + res.bbox.top() * fs;
    let bbox_bottom = f.transform.ty + res.bbox.bottom() * fs;

    let sign_extent = Extent::new(
        vinculum.right().max(f.advance),
        (-bbox_top).max(0.0),
        bbox_bottom.max(0.0),
    );
    let extent = Extent::new(
        f.advance + f.pad + inner.width,
        sign_extent.ascent.max(inner.ascent),
        sign_extent.descent.max(inner.descent),
    );

    let sign = Surd {
        result: res,
        transform: f.transform,
        vinculum,
        color: style.color,
        extent: sign_extent,
    };
    let children = vec![
        Child {
            dx: 0.0,
            dy: 0.0,
            node: sign.into(),
        },
        Child {
            dx: f.advance + f.pad,
            dy: 0.0,
            node: content,
        },
    ];
    Composite::new(children, extent)
}
