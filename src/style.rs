//! Style context propagated while building and rendering boxes
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::color::ColorU8;
use crate::math::PlaceholderStyle;
use crate::Error;

/// Typesetting mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Letters are italicized unless marked upright
    #[default]
    Math,
    /// Everything is upright
    Text,
}

/// Per-instance placeholder overrides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaceholderOverride {
    pub width_factor: Option<f32>,
    pub style: Option<PlaceholderStyle>,
    pub color: Option<ColorU8>,
}

impl PlaceholderOverride {
    pub fn with_width_factor(self, width_factor: f32) -> Self {
        Self {
            width_factor: Some(width_factor),
            ..self
        }
    }

    pub fn with_style(self, style: PlaceholderStyle) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }

    pub fn with_color(self, color: ColorU8) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }
}

/// Placeholder overrides, addressed by traversal index.
///
/// The index of a placeholder is its rank in the depth-first, left-to-right
/// walk of the box tree (see [`Traversal`]). It is positional: editing the markup
/// before a placeholder shifts the index of every following placeholder.
pub type Overrides = BTreeMap<usize, PlaceholderOverride>;

/// Style propagated top-down through the layout
#[derive(Debug, Clone, PartialEq)]
pub struct StyleContext {
    /// Font size in pixels
    pub font_size: f32,
    pub mode: Mode,
    pub bold: bool,
    /// Nesting depth of scripts
    pub script_depth: u32,
    pub color: ColorU8,
    pub overrides: Arc<Overrides>,
}

impl Default for StyleContext {
    fn default() -> Self {
        StyleContext::new(16.0)
    }
}

impl StyleContext {
    pub fn new(font_size: f32) -> Self {
        StyleContext {
            font_size,
            mode: Mode::Math,
            bold: false,
            script_depth: 0,
            color: ColorU8::default(),
            overrides: Arc::new(Overrides::new()),
        }
    }

    pub fn with_font_size(self, font_size: f32) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub fn with_color(self, color: ColorU8) -> Self {
        Self { color, ..self }
    }

    /// Set the color from an HTML or CSS color string
    pub fn with_color_str(self, color: &str) -> Result<Self, Error> {
        let color: ColorU8 = color.parse()?;
        Ok(self.with_color(color))
    }

    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            overrides: Arc::new(overrides),
            ..self
        }
    }

    /// Add or replace the override of the placeholder at `index`
    pub fn with_override(mut self, index: usize, ov: PlaceholderOverride) -> Self {
        Arc::make_mut(&mut self.overrides).insert(index, ov);
        self
    }

    pub fn override_for(&self, index: usize) -> Option<&PlaceholderOverride> {
        self.overrides.get(&index)
    }

    /// Style of scripts: scaled font, one level deeper
    pub fn script(&self, scale: f32) -> Self {
        StyleContext {
            font_size: self.font_size * scale,
            script_depth: self.script_depth + 1,
            ..self.clone()
        }
    }

    /// Same style with the font scaled, at the same depth
    pub fn scaled(&self, scale: f32) -> Self {
        StyleContext {
            font_size: self.font_size * scale,
            ..self.clone()
        }
    }
}

/// Depth-first placeholder counter.
///
/// The builder and the render walk each use one, and both must visit
/// placeholders in the same order for overrides to address the same instance.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    next: usize,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the index of the next placeholder
    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices claimed so far
    pub fn count(&self) -> usize {
        self.next
    }
}
