#![cfg(test)]

use mathbox::render::{self, Surface};
use mathbox::surd::Generator;
use mathbox::{ColorU8, MathBox, StyleContext, Typesetter, geom};
use tiny_skia::{FillRule, Pixmap};

mod tests;

/// Rasterizing surface. Text runs are only collected, glyphs are not drawn.
struct PxlSurface {
    pixmap: Pixmap,
    texts: Vec<String>,
}

impl PxlSurface {
    fn new(width: u32, height: u32) -> Self {
        let pixmap = Pixmap::new(width, height).expect("pixmap should be non-empty");
        PxlSurface {
            pixmap,
            texts: Vec::new(),
        }
    }

    /// Whether the pixel at (x, y) received any paint
    fn covered(&self, x: u32, y: u32) -> bool {
        self.pixmap.pixel(x, y).is_some_and(|px| px.alpha() > 0)
    }

    /// Number of painted pixels in a rectangle of the pixmap
    fn coverage(&self, rect: &geom::Rect) -> usize {
        let x0 = rect.left().floor().max(0.0) as u32;
        let y0 = rect.top().floor().max(0.0) as u32;
        let x1 = (rect.right().ceil().max(0.0) as u32).min(self.pixmap.width());
        let y1 = (rect.bottom().ceil().max(0.0) as u32).min(self.pixmap.height());
        let mut count = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if self.covered(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    fn total_coverage(&self) -> usize {
        self.pixmap.pixels().iter().filter(|px| px.alpha() > 0).count()
    }
}

fn ts_color(color: ColorU8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

impl Surface for PxlSurface {
    fn draw_text(&mut self, text: &render::Text) {
        self.texts.push(text.text.to_string());
    }

    fn draw_path(&mut self, path: &render::Path) {
        let transform = path
            .transform
            .copied()
            .unwrap_or(geom::Transform::identity());
        if let Some(render::Paint::Solid(color)) = path.fill {
            let mut paint = tiny_skia::Paint::default();
            paint.set_color(ts_color(color));
            paint.anti_alias = false;
            self.pixmap
                .fill_path(path.path, &paint, FillRule::Winding, transform, None);
        }
        if let Some(stroke) = path.stroke {
            let mut paint = tiny_skia::Paint::default();
            paint.set_color(ts_color(stroke.color));
            let ts = tiny_skia::Stroke {
                width: stroke.width,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(path.path, &paint, &ts, transform, None);
        }
    }
}

fn layout(markup: &str, font_size: f32) -> MathBox {
    let generator = Generator::new();
    Typesetter::new(&generator).layout(markup, &StyleContext::new(font_size))
}
