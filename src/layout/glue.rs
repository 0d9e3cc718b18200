//! Horizontal lists with inter-atom glue
use super::boxes::{Boxed, Child, Composite, Extent, MathBox};
use crate::math::AtomType;
use crate::metrics::Metrics;

/// Lay out boxes left to right, inserting glue between adjacent atoms.
///
/// Glue before each non-first box is `font_size * metrics.glue(prev, cur)`.
pub fn hlist(items: Vec<(MathBox, AtomType)>, metrics: &Metrics, font_size: f32) -> Composite {
    let mut children = Vec::with_capacity(items.len());
    let mut extent = Extent::default();
    let mut prev: Option<AtomType> = None;
    for (node, atom) in items {
        if let Some(prev) = prev {
            extent.width += font_size * metrics.glue(prev, atom);
        }
        extent.ascent = extent.ascent.max(node.ascent());
        extent.descent = extent.descent.max(node.descent());
        let dx = extent.width;
        extent.width += node.width();
        children.push(Child { dx, dy: 0.0, node });
        prev = Some(atom);
    }
    Composite::new(children, extent)
}
