//! The box tree produced by the builder.
//!
//! Every box has a width, an ascent above its baseline and a descent below it.
//! Composite boxes own their children with offsets relative to their own baseline origin
//! (x to the right, y downward).
use mathbox_surd::SurdResult;

use crate::geom::{self, Point, Transform};
use crate::math::PlaceholderStyle;
use crate::render::{self, Surface};
use crate::style::{Overrides, StyleContext, Traversal};
use crate::ColorU8;

/// Horizontal and vertical extent of a box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Extent {
    pub const fn new(width: f32, ascent: f32, descent: f32) -> Self {
        Extent {
            width,
            ascent,
            descent,
        }
    }

    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// State carried along the render walk
#[derive(Debug)]
pub struct Walk<'a> {
    traversal: Traversal,
    overrides: &'a Overrides,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(overrides: &'a Overrides) -> Self {
        Walk {
            traversal: Traversal::new(),
            overrides,
        }
    }
}

/// Capabilities shared by every box kind
pub trait Boxed {
    fn width(&self) -> f32;
    fn ascent(&self) -> f32;
    fn descent(&self) -> f32;

    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.ascent(), self.descent())
    }

    /// Draw the box with its baseline origin at `origin`
    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, walk: &mut Walk);
}

macro_rules! extent_accessors {
    () => {
        fn width(&self) -> f32 {
            self.extent.width
        }
        fn ascent(&self) -> f32 {
            self.extent.ascent
        }
        fn descent(&self) -> f32 {
            self.extent.descent
        }
    };
}

/// A single character
#[derive(Debug, Clone)]
pub struct Glyph {
    pub ch: char,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: ColorU8,
    pub extent: Extent,
}

impl Boxed for Glyph {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, _walk: &mut Walk) {
        let mut buf = [0u8; 4];
        surface.draw_text(&render::Text {
            text: self.ch.encode_utf8(&mut buf),
            origin,
            font_size: self.font_size,
            stretch: 1.0,
            bold: self.bold,
            italic: self.italic,
            color: self.color,
        });
    }
}

/// A filled horizontal rule sitting on its baseline
#[derive(Debug, Clone)]
pub struct Rule {
    pub color: ColorU8,
    pub extent: Extent,
}

impl Boxed for Rule {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, _walk: &mut Walk) {
        surface.draw_rect(&render::Rect {
            rect: geom::Rect::from_xywh(
                origin.x,
                origin.y - self.extent.ascent,
                self.extent.width,
                self.extent.height(),
            ),
            fill: Some(self.color.into()),
            stroke: None,
        });
    }
}

/// A glyph piece of a stretched delimiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPiece {
    pub ch: char,
    /// Baseline of the piece, relative to the box baseline
    pub dy: f32,
    /// Vertical scale of the piece
    pub stretch: f32,
}

/// A delimiter sized to its content, drawn as one or three glyph pieces
#[derive(Debug, Clone)]
pub struct Stretched {
    pub pieces: Vec<GlyphPiece>,
    pub font_size: f32,
    pub color: ColorU8,
    pub extent: Extent,
}

impl Boxed for Stretched {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, _walk: &mut Walk) {
        let mut buf = [0u8; 4];
        for piece in &self.pieces {
            surface.draw_text(&render::Text {
                text: piece.ch.encode_utf8(&mut buf),
                origin: Point::from_xy(origin.x, origin.y + piece.dy),
                font_size: self.font_size,
                stretch: piece.stretch,
                bold: false,
                italic: false,
                color: self.color,
            });
        }
    }
}

/// The radical sign and its vinculum
#[derive(Debug, Clone)]
pub struct Surd {
    /// Generated outline, in em
    pub result: SurdResult,
    /// Maps the outline to the box frame
    pub transform: Transform,
    /// Vinculum in the box frame
    pub vinculum: geom::Rect,
    pub color: ColorU8,
    pub extent: Extent,
}

impl Boxed for Surd {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, _walk: &mut Walk) {
        if let Some(path) = &self.result.path {
            let ts = self.transform.post_translate(origin.x, origin.y);
            surface.draw_path(&render::Path {
                path,
                fill: Some(self.color.into()),
                stroke: None,
                transform: Some(&ts),
            });
        }
        surface.draw_rect(&render::Rect {
            rect: self.vinculum.translate(origin.x, origin.y),
            fill: Some(self.color.into()),
            stroke: None,
        });
    }
}

/// Table borders and grid lines
#[derive(Debug, Clone)]
pub struct Frame {
    /// Outer border in the box frame
    pub border: geom::Rect,
    /// Inner grid lines in the box frame
    pub lines: Vec<(Point, Point)>,
    pub line_width: f32,
    pub color: ColorU8,
    pub extent: Extent,
}

impl Boxed for Frame {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, _walk: &mut Walk) {
        let stroke = render::Stroke {
            color: self.color,
            width: self.line_width,
        };
        surface.draw_rect(&render::Rect {
            rect: self.border.translate(origin.x, origin.y),
            fill: None,
            stroke: Some(stroke),
        });
        for (p1, p2) in &self.lines {
            surface.draw_line(&render::Line {
                p1: Point::from_xy(origin.x + p1.x, origin.y + p1.y),
                p2: Point::from_xy(origin.x + p2.x, origin.y + p2.y),
                stroke,
            });
        }
    }
}

/// An empty slot meant to be filled by the user
#[derive(Debug, Clone)]
pub struct Placeholder {
    /// Traversal index assigned at build time
    pub index: usize,
    pub style: PlaceholderStyle,
    pub line_width: f32,
    /// Margin added around the box to form the hit region
    pub hit_slop: f32,
    pub color: ColorU8,
    pub extent: Extent,
}

impl Placeholder {
    /// Tight bounds of the placeholder drawn at `origin`
    pub fn bounds(&self, origin: Point) -> geom::Rect {
        geom::Rect::from_xywh(
            origin.x,
            origin.y - self.extent.ascent,
            self.extent.width,
            self.extent.height(),
        )
    }
}

impl Boxed for Placeholder {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, walk: &mut Walk) {
        let index = walk.traversal.next_index();
        if index != self.index {
            log::warn!(
                "placeholder built with index {} rendered with index {}",
                self.index,
                index
            );
        }
        let color = walk
            .overrides
            .get(&index)
            .and_then(|ov| ov.color)
            .unwrap_or(self.color);
        let stroke = render::Stroke {
            color,
            width: self.line_width,
        };

        let rect = self.bounds(origin);
        match self.style {
            PlaceholderStyle::Bordered => surface.draw_rect(&render::Rect {
                rect,
                fill: None,
                stroke: Some(stroke),
            }),
            PlaceholderStyle::Underline => surface.draw_line(&render::Line {
                p1: Point::from_xy(rect.left(), rect.bottom()),
                p2: Point::from_xy(rect.right(), rect.bottom()),
                stroke,
            }),
        }
        surface.mark_region(&render::Region {
            index,
            kind: render::RegionKind::Hit,
            rect: rect.outset(self.hit_slop),
        });
        surface.mark_region(&render::Region {
            index,
            kind: render::RegionKind::Crop,
            rect,
        });
    }
}

/// A child of a composite box
#[derive(Debug, Clone)]
pub struct Child {
    pub dx: f32,
    pub dy: f32,
    pub node: MathBox,
}

/// A box made of positioned children, kept in build order
#[derive(Debug, Clone, Default)]
pub struct Composite {
    pub children: Vec<Child>,
    pub extent: Extent,
}

impl Composite {
    pub fn new(children: Vec<Child>, extent: Extent) -> Self {
        Composite { children, extent }
    }

    /// Composite whose extent encloses all of its children
    pub fn fit(children: Vec<Child>) -> Self {
        let mut extent = Extent::default();
        for c in &children {
            extent.width = extent.width.max(c.dx + c.node.width());
            extent.ascent = extent.ascent.max(c.node.ascent() - c.dy);
            extent.descent = extent.descent.max(c.node.descent() + c.dy);
        }
        Composite { children, extent }
    }
}

impl Boxed for Composite {
    extent_accessors!();

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, walk: &mut Walk) {
        for c in &self.children {
            let o = Point::from_xy(origin.x + c.dx, origin.y + c.dy);
            c.node.render_at(surface, o, walk);
        }
    }
}

/// A node of the box tree
#[derive(Debug, Clone)]
pub enum MathBox {
    Glyph(Glyph),
    Rule(Rule),
    Stretched(Stretched),
    Surd(Surd),
    Frame(Frame),
    Placeholder(Placeholder),
    Composite(Composite),
}

macro_rules! dispatch {
    ($self:ident, $b:ident => $e:expr) => {
        match $self {
            MathBox::Glyph($b) => $e,
            MathBox::Rule($b) => $e,
            MathBox::Stretched($b) => $e,
            MathBox::Surd($b) => $e,
            MathBox::Frame($b) => $e,
            MathBox::Placeholder($b) => $e,
            MathBox::Composite($b) => $e,
        }
    };
}

impl Boxed for MathBox {
    fn width(&self) -> f32 {
        dispatch!(self, b => b.width())
    }

    fn ascent(&self) -> f32 {
        dispatch!(self, b => b.ascent())
    }

    fn descent(&self) -> f32 {
        dispatch!(self, b => b.descent())
    }

    fn render_at<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, walk: &mut Walk) {
        dispatch!(self, b => b.render_at(surface, origin, walk))
    }
}

/// Hit region and tight bounds of a placeholder, in caller coordinates
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderRegion {
    pub index: usize,
    pub hit: geom::Rect,
    pub crop: geom::Rect,
}

#[derive(Debug, Default)]
struct RegionCollector {
    regions: Vec<PlaceholderRegion>,
}

impl Surface for RegionCollector {
    fn draw_text(&mut self, _text: &render::Text) {}

    fn draw_rect(&mut self, _rect: &render::Rect) {}

    fn draw_line(&mut self, _line: &render::Line) {}

    fn draw_path(&mut self, _path: &render::Path) {}

    fn mark_region(&mut self, region: &render::Region) {
        match region.kind {
            render::RegionKind::Hit => self.regions.push(PlaceholderRegion {
                index: region.index,
                hit: region.rect,
                crop: region.rect,
            }),
            render::RegionKind::Crop => {
                if let Some(last) = self.regions.last_mut() {
                    if last.index == region.index {
                        last.crop = region.rect;
                    }
                }
            }
        }
    }
}

impl MathBox {
    /// Render the tree with its baseline origin at `origin`.
    ///
    /// Placeholder overrides of `style` are looked up by traversal index.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, style: &StyleContext) {
        let mut walk = Walk::new(&style.overrides);
        self.render_at(surface, origin, &mut walk);
    }

    /// Regions of all placeholders, in traversal order, for the tree drawn at `origin`
    pub fn placeholder_regions(&self, origin: Point) -> Vec<PlaceholderRegion> {
        let overrides = Overrides::new();
        let mut walk = Walk::new(&overrides);
        let mut collector = RegionCollector::default();
        self.render_at(&mut collector, origin, &mut walk);
        collector.regions
    }

    /// Total height
    pub fn height(&self) -> f32 {
        self.ascent() + self.descent()
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            MathBox::Composite(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_glyph(&self) -> Option<&Glyph> {
        match self {
            MathBox::Glyph(g) => Some(g),
            _ => None,
        }
    }

    /// Depth-first iteration over the tree with absolute baseline origins
    pub fn visit(&self, origin: Point, f: &mut impl FnMut(&MathBox, Point)) {
        f(self, origin);
        if let MathBox::Composite(c) = self {
            for child in &c.children {
                child
                    .node
                    .visit(Point::from_xy(origin.x + child.dx, origin.y + child.dy), f);
            }
        }
    }
}

macro_rules! impl_from_box {
    ($($t:ident),*) => {
        $(impl From<$t> for MathBox {
            fn from(b: $t) -> Self {
                MathBox::$t(b)
            }
        })*
    };
}

impl_from_box!(Glyph, Rule, Stretched, Surd, Frame, Placeholder, Composite);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::render::{Primitive, Recorder};
    use crate::style::PlaceholderOverride;

    fn glyph(ch: char, width: f32) -> MathBox {
        Glyph {
            ch,
            font_size: 10.0,
            bold: false,
            italic: false,
            color: color::BLACK,
            extent: Extent::new(width, 7.2, 2.8),
        }
        .into()
    }

    fn placeholder(index: usize) -> MathBox {
        Placeholder {
            index,
            style: PlaceholderStyle::Bordered,
            line_width: 0.5,
            hit_slop: 2.0,
            color: color::GRAY,
            extent: Extent::new(8.0, 6.0, 1.0),
        }
        .into()
    }

    #[test]
    fn fit_encloses_children() {
        let c = Composite::fit(vec![
            Child {
                dx: 0.0,
                dy: 0.0,
                node: glyph('a', 5.0),
            },
            Child {
                dx: 6.0,
                dy: -4.0,
                node: glyph('b', 5.0),
            },
        ]);
        assert_eq!(c.extent.width, 11.0);
        assert!((c.extent.ascent - 11.2).abs() < 1e-5);
        assert!((c.extent.descent - 2.8).abs() < 1e-5);
    }

    #[test]
    fn render_offsets_accumulate() {
        let inner = Composite::fit(vec![Child {
            dx: 2.0,
            dy: 3.0,
            node: glyph('x', 5.0),
        }]);
        let outer: MathBox = Composite::fit(vec![Child {
            dx: 10.0,
            dy: -1.0,
            node: inner.into(),
        }])
        .into();
        let mut rec = Recorder::new();
        outer.render(&mut rec, Point::from_xy(100.0, 50.0), &StyleContext::default());
        let Primitive::Text { text, origin, .. } = &rec.primitives()[0] else {
            panic!("expected text");
        };
        assert_eq!(text, "x");
        assert_eq!(*origin, Point::from_xy(112.0, 52.0));
    }

    #[test]
    fn placeholder_override_applies_at_render() {
        let tree: MathBox = Composite::fit(vec![
            Child {
                dx: 0.0,
                dy: 0.0,
                node: placeholder(0),
            },
            Child {
                dx: 10.0,
                dy: 0.0,
                node: placeholder(1),
            },
        ])
        .into();
        let style = StyleContext::default()
            .with_override(1, PlaceholderOverride::default().with_color(color::RED));
        let mut rec = Recorder::new();
        tree.render(&mut rec, Point::from_xy(0.0, 0.0), &style);
        let colors: Vec<_> = rec
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect {
                    stroke: Some(s), ..
                } => Some(s.color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![color::GRAY, color::RED]);
        assert_eq!(rec.regions().count(), 4);
    }

    #[test]
    fn regions_in_traversal_order() {
        let tree: MathBox = Composite::fit(vec![
            Child {
                dx: 0.0,
                dy: 0.0,
                node: placeholder(0),
            },
            Child {
                dx: 20.0,
                dy: 0.0,
                node: placeholder(1),
            },
        ])
        .into();
        let regions = tree.placeholder_regions(Point::from_xy(5.0, 10.0));
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].index, 1);
        assert_eq!(regions[1].crop.left(), 25.0);
        assert_eq!(regions[1].crop.top(), 4.0);
        assert_eq!(regions[1].hit.left(), 23.0);
        assert_eq!(regions[1].hit.width(), 12.0);
    }
}
