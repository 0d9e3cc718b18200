//! Superscript and subscript placement
use super::boxes::{Boxed, Child, Composite, Extent, MathBox};
use crate::metrics::Metrics;

/// Script offsets relative to the base origin (y-up shifts)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal offset shared by both scripts
    pub x: f32,
    /// Superscript baseline shift above the base baseline
    pub sup_shift: Option<f32>,
    /// Subscript baseline shift below the base baseline
    pub sub_shift: Option<f32>,
}

/// Compute script positions.
///
/// When both scripts are present and the naive placement leaves less than
/// `sup_sub_gap_min` between them, the subscript is pushed down by exactly the deficit.
pub fn place(
    base: Extent,
    sup: Option<Extent>,
    sub: Option<Extent>,
    metrics: &Metrics,
    font_size: f32,
) -> Placement {
    let x = base.width + metrics.script_gap * font_size;
    let sup_shift = sup.map(|_| (base.ascent / 2.0).max(metrics.sup_shift_min * font_size));
    let mut sub_shift = sub.map(|_| metrics.sub_shift * font_size);

    if let (Some(sup), Some(sub), Some(up), Some(down)) = (sup, sub, sup_shift, sub_shift) {
        let sup_bottom = up - sup.descent;
        let sub_top = sub.ascent - down;
        let gap = sup_bottom - sub_top;
        let min_gap = metrics.sup_sub_gap_min * font_size;
        if gap < min_gap {
            log::trace!("pushing subscript down by {}", min_gap - gap);
            sub_shift = Some(down + (min_gap - gap));
        }
    }

    Placement {
        x,
        sup_shift,
        sub_shift,
    }
}

/// Assemble a base and its scripts. Children are kept in order base, sup, sub.
pub fn layout(
    base: MathBox,
    sup: Option<MathBox>,
    sub: Option<MathBox>,
    metrics: &Metrics,
    font_size: f32,
) -> Composite {
    let p = place(
        base.extent(),
        sup.as_ref().map(Boxed::extent),
        sub.as_ref().map(Boxed::extent),
        metrics,
        font_size,
    );

    let mut extent = base.extent();
    let mut children = vec![Child {
        dx: 0.0,
        dy: 0.0,
        node: base,
    }];
    let mut scripts_width = 0.0f32;
    if let (Some(sup), Some(shift)) = (sup, p.sup_shift) {
        extent.ascent = extent.ascent.max(shift + sup.ascent());
        extent.descent = extent.descent.max(sup.descent() - shift);
        scripts_width = scripts_width.max(sup.width());
        children.push(Child {
            dx: p.x,
            dy: -shift,
            node: sup,
        });
    }
    if let (Some(sub), Some(shift)) = (sub, p.sub_shift) {
        extent.ascent = extent.ascent.max(sub.ascent() - shift);
        extent.descent = extent.descent.max(shift + sub.descent());
        scripts_width = scripts_width.max(sub.width());
        children.push(Child {
            dx: p.x,
            dy: shift,
            node: sub,
        });
    }
    extent.width = p.x + scripts_width;
    Composite::new(children, extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    const F: f32 = 40.0;

    #[test]
    fn sup_shift_uses_larger_of_half_ascent_and_minimum() {
        let m = Metrics::default();
        let small = Extent::new(10.0, 20.0, 5.0);
        let tall = Extent::new(10.0, 60.0, 5.0);
        let script = Some(Extent::new(5.0, 10.0, 4.0));
        assert_near!(abs, place(small, script, None, &m, F).sup_shift.unwrap(), 14.0, 1e-4);
        assert_near!(abs, place(tall, script, None, &m, F).sup_shift.unwrap(), 30.0, 1e-4);
        assert_near!(abs, place(small, script, None, &m, F).x, 12.0, 1e-4);
    }

    #[test]
    fn sub_pushed_down_exactly_to_clearance() {
        let m = Metrics::default();
        let base = Extent::new(10.0, 28.8, 11.2);
        // large scripts collide with naive placement
        let sup = Extent::new(8.0, 20.0, 10.0);
        let sub = Extent::new(8.0, 20.0, 8.0);
        let p = place(base, Some(sup), Some(sub), &m, F);
        let up = p.sup_shift.unwrap();
        let down = p.sub_shift.unwrap();
        let sub_top = -down + sub.ascent;
        let sup_bottom = up - sup.descent;
        assert_near!(abs, sup_bottom - sub_top, m.sup_sub_gap_min * F, 1e-4);
    }

    #[test]
    fn sub_not_moved_when_clear() {
        let m = Metrics::default();
        let base = Extent::new(10.0, 28.8, 11.2);
        let tiny = Extent::new(3.0, 2.0, 1.0);
        let p = place(base, Some(tiny), Some(tiny), &m, F);
        assert_eq!(p.sub_shift, Some(m.sub_shift * F));
    }
}
