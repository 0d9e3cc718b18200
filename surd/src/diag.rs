//! Inspection helpers for generated outlines
use mathbox_base::geom::Point;

/// Number of `f32` values per node in the flat point buffer
pub const FLOATS_PER_NODE: usize = 6;

/// A node decoded from the flat point buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord {
    pub handle_in: Point,
    pub anchor: Point,
    pub handle_out: Point,
    /// Whether the incoming handle differs from the anchor
    pub has_in: bool,
    /// Whether the outgoing handle differs from the anchor
    pub has_out: bool,
}

/// Decode a flat buffer of `[in.x, in.y, anchor.x, anchor.y, out.x, out.y]` groups.
/// Trailing values that do not form a complete node are ignored.
pub fn decompose(points: &[f32]) -> Vec<NodeRecord> {
    points
        .chunks_exact(FLOATS_PER_NODE)
        .map(|c| {
            let handle_in = Point::from_xy(c[0], c[1]);
            let anchor = Point::from_xy(c[2], c[3]);
            let handle_out = Point::from_xy(c[4], c[5]);
            NodeRecord {
                handle_in,
                anchor,
                handle_out,
                has_in: handle_in != anchor,
                has_out: handle_out != anchor,
            }
        })
        .collect()
}

/// SVG path data of the closed contour described by a flat point buffer
pub fn svg_path_data(points: &[f32]) -> String {
    let nodes = decompose(points);
    let mut data = String::new();
    let Some(first) = nodes.first() else {
        return data;
    };
    data.push_str(&format!("M{} {}", first.anchor.x, first.anchor.y));
    for (i, from) in nodes.iter().enumerate() {
        let to = &nodes[(i + 1) % nodes.len()];
        if !from.has_out && !to.has_in {
            data.push_str(&format!(" L{} {}", to.anchor.x, to.anchor.y));
        } else {
            data.push_str(&format!(
                " C{} {} {} {} {} {}",
                from.handle_out.x,
                from.handle_out.y,
                to.handle_in.x,
                to.handle_in.y,
                to.anchor.x,
                to.anchor.y
            ));
        }
    }
    data.push_str(" Z");
    data
}
