//! Fraction layout
use super::boxes::{Boxed, Child, Composite, Extent, MathBox, Rule};
use crate::ColorU8;
use crate::metrics::Metrics;

/// Position of a box: x of its left edge and y of its baseline (y-down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

/// Fraction geometry in a frame centered on x = 0, baseline at y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracFrame {
    pub extent: Extent,
    pub num: Pos,
    pub den: Pos,
    /// Left end of the rule, at the bottom edge of the rule
    pub rule: Pos,
    pub rule_width: f32,
    pub rule_thickness: f32,
}

/// Compute the fraction geometry for numerator and denominator extents.
///
/// Both parts are centered over the wider of the two. The numerator sits `frac_gap`
/// above the math axis, the denominator mirrors it below. Ascent and descent are
/// floor-clamped to those of a plain character.
pub fn frame(num: Extent, den: Extent, metrics: &Metrics, font_size: f32) -> FracFrame {
    let axis = metrics.axis_height * font_size;
    let gap = metrics.frac_gap * font_size;
    let thickness = metrics.frac_rule_thickness * font_size;
    let width = num.width.max(den.width) + 2.0 * metrics.frac_padding * font_size;

    let num_shift = axis + gap + num.descent;
    let den_shift = gap + den.ascent - axis;

    let ascent = (num_shift + num.ascent).max(metrics.char_ascent * font_size);
    let descent = (den_shift + den.descent).max(metrics.char_descent * font_size);

    FracFrame {
        extent: Extent::new(width, ascent, descent),
        num: Pos {
            x: -num.width / 2.0,
            y: -num_shift,
        },
        den: Pos {
            x: -den.width / 2.0,
            y: den_shift,
        },
        rule: Pos {
            x: -width / 2.0,
            y: -(axis - thickness / 2.0),
        },
        rule_width: width,
        rule_thickness: thickness,
    }
}

/// Assemble a fraction. Children are kept in order numerator, denominator, rule.
pub fn layout(
    num: MathBox,
    den: MathBox,
    metrics: &Metrics,
    font_size: f32,
    color: ColorU8,
) -> Composite {
    let f = frame(num.extent(), den.extent(), metrics, font_size);
    let half = f.extent.width / 2.0;
    let rule = Rule {
        color,
        extent: Extent::new(f.rule_width, f.rule_thickness, 0.0),
    };
    let children = vec![
        Child {
            dx: half + f.num.x,
            dy: f.num.y,
            node: num,
        },
        Child {
            dx: half + f.den.x,
            dy: f.den.y,
            node: den,
        },
        Child {
            dx: half + f.rule.x,
            dy: f.rule.y,
            node: rule.into(),
        },
    ];
    Composite::new(children, f.extent)
}
