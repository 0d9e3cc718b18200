//! Render module: abstraction over the drawing surface of the host.
//!
//! Boxes are drawn onto a [`Surface`]. Coordinates grow to the right and downward.
//! Ordinary characters are sent as text runs: glyph rasterization is left to the host.
//! [`Recorder`] is a surface that keeps owned copies of the primitives.

use crate::{ColorU8, geom};

/// Surface trait: defines the drawing API used by the boxes
pub trait Surface {
    /// Draw a text run, its origin is the left end of the baseline
    fn draw_text(&mut self, text: &Text);

    /// Draw a rectangle
    ///
    /// Default implementation converts the rectangle to a path and calls [`draw_path`](Surface::draw_path)
    fn draw_rect(&mut self, rect: &Rect) {
        let Some(path) = rect.rect.to_path() else {
            return;
        };
        let rpath = self::Path {
            path: &path,
            fill: rect.fill,
            stroke: rect.stroke,
            transform: None,
        };
        self.draw_path(&rpath);
    }

    /// Draw a straight line
    ///
    /// Default implementation converts the line to a path and calls [`draw_path`](Surface::draw_path)
    fn draw_line(&mut self, line: &Line) {
        let mut pb = geom::PathBuilder::new();
        pb.move_to(line.p1.x, line.p1.y);
        pb.line_to(line.p2.x, line.p2.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let rpath = self::Path {
            path: &path,
            fill: None,
            stroke: Some(line.stroke),
            transform: None,
        };
        self.draw_path(&rpath);
    }

    /// Draw a path
    fn draw_path(&mut self, path: &Path);

    /// Report an interactive region. Nothing is drawn.
    fn mark_region(&mut self, region: &Region) {
        let _ = region;
    }
}

/// Paint pattern, used for fill operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid color fill
    Solid(ColorU8),
}

impl From<ColorU8> for Paint {
    fn from(value: ColorU8) -> Self {
        Paint::Solid(value)
    }
}

/// Stroke style definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color
    pub color: ColorU8,
    /// Line width in pixels
    pub width: f32,
}

/// Text run to draw
#[derive(Debug, Clone)]
pub struct Text<'a> {
    pub text: &'a str,
    /// Left end of the baseline
    pub origin: geom::Point,
    pub font_size: f32,
    /// Vertical scale applied to the glyphs, around the baseline
    pub stretch: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: ColorU8,
}

/// Rectangle to draw
#[derive(Debug, Clone)]
pub struct Rect {
    pub rect: geom::Rect,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
}

/// Line to draw
#[derive(Debug, Clone)]
pub struct Line {
    pub p1: geom::Point,
    pub p2: geom::Point,
    pub stroke: Stroke,
}

/// Path to draw
#[derive(Debug, Clone)]
pub struct Path<'a> {
    /// Path geometry
    pub path: &'a geom::Path,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke>,
    /// Optional transform to apply to the path
    pub transform: Option<&'a geom::Transform>,
}

/// Kind of an interactive region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Enlarged area reacting to the pointer
    Hit,
    /// Tight bounds of the drawn placeholder
    Crop,
}

/// Interactive region of a placeholder
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Traversal index of the placeholder
    pub index: usize,
    pub kind: RegionKind,
    pub rect: geom::Rect,
}

/// Owned copy of a drawing primitive
#[derive(Debug, Clone)]
pub enum Primitive {
    Text {
        text: String,
        origin: geom::Point,
        font_size: f32,
        stretch: f32,
        bold: bool,
        italic: bool,
        color: ColorU8,
    },
    Rect {
        rect: geom::Rect,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    Line {
        p1: geom::Point,
        p2: geom::Point,
        stroke: Stroke,
    },
    /// Path with its transform already applied
    Path {
        path: geom::Path,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    Region(Region),
}

/// A surface recording every primitive it receives
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    /// Recorded regions
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Region(r) => Some(r),
            _ => None,
        })
    }

    /// Concatenation of all recorded text runs
    pub fn text(&self) -> String {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn draw_text(&mut self, text: &Text) {
        self.primitives.push(Primitive::Text {
            text: text.text.to_string(),
            origin: text.origin,
            font_size: text.font_size,
            stretch: text.stretch,
            bold: text.bold,
            italic: text.italic,
            color: text.color,
        });
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.primitives.push(Primitive::Rect {
            rect: rect.rect,
            fill: rect.fill,
            stroke: rect.stroke,
        });
    }

    fn draw_line(&mut self, line: &Line) {
        self.primitives.push(Primitive::Line {
            p1: line.p1,
            p2: line.p2,
            stroke: line.stroke,
        });
    }

    fn draw_path(&mut self, path: &Path) {
        let transformed = match path.transform {
            Some(ts) => path.path.clone().transform(*ts),
            None => Some(path.path.clone()),
        };
        let Some(transformed) = transformed else {
            log::warn!("dropping path that degenerated under its transform");
            return;
        };
        self.primitives.push(Primitive::Path {
            path: transformed,
            fill: path.fill,
            stroke: path.stroke,
        });
    }

    fn mark_region(&mut self, region: &Region) {
        self.primitives.push(Primitive::Region(*region));
    }
}
