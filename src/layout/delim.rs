//! Delimiters sized to their content.
//!
//! Below [`DELIMITER_ASSEMBLY_THRESHOLD`] a delimiter is a single character scaled
//! vertically. Above it, brackets with extension pieces are assembled from a top cap,
//! a stretched middle piece and a bottom cap.
use super::boxes::{Boxed, Child, Composite, Extent, GlyphPiece, MathBox, Stretched};
use super::chars;
use crate::metrics::Metrics;
use crate::style::StyleContext;

/// Target height, in pixels, from which delimiters are assembled from pieces
pub const DELIMITER_ASSEMBLY_THRESHOLD: f32 = 48.0;

/// Cap piece height, as a ratio of the font size
pub const CAP_RATIO: f32 = 0.5;

/// Overlap between adjacent pieces, in pixels
pub const SEAM_OVERLAP: f32 = 1.0;

/// Vertical span of an assembly piece, relative to the top of the delimiter (y-down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// How a delimiter is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelimLayout {
    /// One character, vertically scaled by `scale`
    Single { scale: f32 },
    /// Three pieces covering `[0, target]`
    Assembly { top: Span, middle: Span, bottom: Span },
}

/// Height a delimiter must cover for content of height `content_height`
pub fn target_height(content_height: f32, factor: f32, shortfall: f32, font_size: f32) -> f32 {
    (content_height * factor)
        .max(content_height - shortfall * font_size)
        .max(0.0)
}

/// Decide how to draw a delimiter of height `target`
pub fn assemble(target: f32, font_size: f32) -> DelimLayout {
    if target < DELIMITER_ASSEMBLY_THRESHOLD {
        let scale = if font_size > 0.0 {
            (target / font_size).max(1.0)
        } else {
            1.0
        };
        return DelimLayout::Single { scale };
    }

    let cap = (CAP_RATIO * font_size).min(target / 2.0);
    let top = Span {
        top: 0.0,
        height: cap,
    };
    let bottom = Span {
        top: target - cap,
        height: cap,
    };
    let middle_top = (cap - SEAM_OVERLAP).max(0.0);
    let middle_bottom = (target - cap + SEAM_OVERLAP).min(target);
    let middle = Span {
        top: middle_top,
        height: (middle_bottom - middle_top).max(0.0),
    };
    DelimLayout::Assembly {
        top,
        middle,
        bottom,
    }
}

/// Top, extension and bottom pieces of the brackets that support assembly
fn pieces(ch: char) -> Option<[char; 3]> {
    match ch {
        '(' => Some(['⎛', '⎜', '⎝']),
        ')' => Some(['⎞', '⎟', '⎠']),
        '[' => Some(['⎡', '⎢', '⎣']),
        ']' => Some(['⎤', '⎥', '⎦']),
        _ => None,
    }
}

/// Build a delimiter box centered on the vertical center of `content`
pub fn delimiter(ch: char, content: Extent, metrics: &Metrics, style: &StyleContext) -> Stretched {
    let fs = style.font_size;
    let target = target_height(
        content.height(),
        metrics.delim_factor,
        metrics.delim_shortfall,
        fs,
    );
    // y-down position of the content center
    let center = (content.descent - content.ascent) / 2.0;
    let width = fs * chars::width_ratio(ch, style.bold, false).unwrap_or(metrics.default_char_width);
    let char_height = (metrics.char_ascent + metrics.char_descent) * fs;

    let glyphs = pieces(ch);
    let layout = match (assemble(target, fs), glyphs) {
        (DelimLayout::Assembly { .. }, None) if char_height > 0.0 => DelimLayout::Single {
            scale: target / char_height,
        },
        (layout, _) => layout,
    };
    log::trace!("delimiter '{}' target {} drawn as {:?}", ch, target, layout);

    // a piece of height h spans [top, top + h] when its em box is scaled by h / char_height
    let piece = |ch: char, top: f32, height: f32| {
        let stretch = if char_height > 0.0 { height / char_height } else { 1.0 };
        GlyphPiece {
            ch,
            dy: top + metrics.char_ascent * fs * stretch,
            stretch,
        }
    };

    let (pieces, half) = match (layout, glyphs) {
        (DelimLayout::Assembly { top, middle, bottom }, Some([t, m, b])) => {
            let origin = center - target / 2.0;
            (
                vec![
                    piece(t, origin + top.top, top.height),
                    piece(m, origin + middle.top, middle.height),
                    piece(b, origin + bottom.top, bottom.height),
                ],
                target / 2.0,
            )
        }
        (DelimLayout::Single { scale }, _) => {
            let height = char_height * scale;
            (vec![piece(ch, center - height / 2.0, height)], height / 2.0)
        }
        (DelimLayout::Assembly { .. }, None) => {
            (vec![piece(ch, center - char_height / 2.0, char_height)], char_height / 2.0)
        }
    };

    Stretched {
        pieces,
        font_size: fs,
        color: style.color,
        extent: Extent::new(width, half - center, half + center),
    }
}

/// Wrap `content` between two delimiters sized to it
pub fn wrap(
    open: char,
    close: char,
    content: MathBox,
    metrics: &Metrics,
    style: &StyleContext,
) -> Composite {
    let inner = content.extent();
    let open = delimiter(open, inner, metrics, style);
    let close = delimiter(close, inner, metrics, style);
    let x_content = open.width();
    let x_close = x_content + inner.width;
    let children = vec![
        Child {
            dx: 0.0,
            dy: 0.0,
            node: open.into(),
        },
        Child {
            dx: x_content,
            dy: 0.0,
            node: content,
        },
        Child {
            dx: x_close,
            dy: 0.0,
            node: close.into(),
        },
    ];
    Composite::fit(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn target_covers_content() {
        // factor dominates for small content
        assert_near!(abs, target_height(40.0, 0.901, 0.5, 40.0), 40.0 * 0.901, 1e-4);
        // shortfall dominates for tall content
        assert_near!(abs, target_height(400.0, 0.901, 0.5, 40.0), 380.0, 1e-4);
    }

    #[test]
    fn threshold() {
        let below = assemble(DELIMITER_ASSEMBLY_THRESHOLD - 0.01, 20.0);
        assert!(matches!(below, DelimLayout::Single { .. }));
        let above = assemble(DELIMITER_ASSEMBLY_THRESHOLD + 0.01, 20.0);
        assert!(matches!(above, DelimLayout::Assembly { .. }));
    }

    #[test]
    fn single_scale_never_shrinks() {
        assert_eq!(assemble(10.0, 40.0), DelimLayout::Single { scale: 1.0 });
        assert_eq!(assemble(45.0, 30.0), DelimLayout::Single { scale: 1.5 });
    }

    #[test]
    fn assembly_covers_target_with_overlapping_seams() {
        let target = 120.0;
        let DelimLayout::Assembly {
            top,
            middle,
            bottom,
        } = assemble(target, 40.0)
        else {
            panic!("expected assembly");
        };
        assert_eq!(top.top, 0.0);
        assert_near!(abs, bottom.bottom(), target, 1e-4);
        assert_near!(abs, top.bottom() - middle.top, SEAM_OVERLAP, 1e-4);
        assert_near!(abs, middle.bottom() - bottom.top, SEAM_OVERLAP, 1e-4);
    }

    #[test]
    fn caps_shrink_when_target_is_short() {
        // caps of 0.5 * 200 each would exceed the target
        let DelimLayout::Assembly {
            top,
            middle,
            bottom,
        } = assemble(50.0, 200.0)
        else {
            panic!("expected assembly");
        };
        assert_near!(abs, top.height, 25.0, 1e-4);
        assert_near!(abs, bottom.height, 25.0, 1e-4);
        assert!(middle.height >= 0.0);
        assert_near!(abs, bottom.bottom(), 50.0, 1e-4);
    }

    #[test]
    fn delimiter_is_centered_on_content() {
        let m = Metrics::default();
        let style = StyleContext::new(20.0);
        let content = Extent::new(50.0, 60.0, 20.0);
        let d = delimiter('(', content, &m, &style);
        assert_eq!(d.pieces.len(), 3);
        let target = target_height(80.0, m.delim_factor, m.delim_shortfall, 20.0);
        assert_near!(abs, d.extent.height(), target, 1e-3);
        // both extents are centered on the content center
        let content_center = (content.ascent - content.descent) / 2.0;
        let delim_center = (d.extent.ascent - d.extent.descent) / 2.0;
        assert_near!(abs, delim_center, content_center, 1e-3);
    }

    #[test]
    fn angle_brackets_fall_back_to_scaled_glyph() {
        let m = Metrics::default();
        let style = StyleContext::new(20.0);
        let d = delimiter('⟨', Extent::new(50.0, 60.0, 20.0), &m, &style);
        assert_eq!(d.pieces.len(), 1);
        assert!(d.pieces[0].stretch > 3.0);
    }
}
