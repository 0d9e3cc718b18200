//! Placeholder boxes
use super::boxes::{Extent, Placeholder};
use crate::math::PlaceholderStyle;
use crate::metrics::Metrics;
use crate::style::{StyleContext, Traversal};

/// Build the next placeholder in traversal order.
///
/// The index is claimed from `traversal`, and the override registered at that index
/// in `style`, if any, replaces the width factor, style and color.
pub fn build(
    width_factor: f32,
    placeholder_style: PlaceholderStyle,
    traversal: &mut Traversal,
    metrics: &Metrics,
    style: &StyleContext,
) -> Placeholder {
    let fs = style.font_size;
    let index = traversal.next_index();
    let ov = style.override_for(index);

    let width_factor = ov
        .and_then(|ov| ov.width_factor)
        .filter(|f| f.is_finite() && *f >= 0.0)
        .unwrap_or(width_factor);
    let placeholder_style = ov.and_then(|ov| ov.style).unwrap_or(placeholder_style);
    let color = ov.and_then(|ov| ov.color).unwrap_or(style.color);

    let width = metrics.x_height * metrics.placeholder_width * width_factor * fs;
    let ascent = metrics.x_height * metrics.placeholder_height * fs;
    let descent = metrics.placeholder_descent * fs;

    Placeholder {
        index,
        style: placeholder_style,
        line_width: metrics.placeholder_line_width * fs,
        hit_slop: metrics.placeholder_hit_slop * fs,
        color,
        extent: Extent::new(width, ascent, descent),
    }
}
