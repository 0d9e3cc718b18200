//! Box layout of parsed math.
//!
//! The [`Typesetter`] turns markup into a [`MathBox`] tree in one pass:
//! markup is parsed with [`crate::math::parse`], then every node is converted into a box
//! under a [`StyleContext`]. The radical sign of `\sqrt` is generated by a shared
//! [`Generator`] passed at construction.
//!
//! ```
//! use mathbox::{Boxed, StyleContext, Typesetter};
//! use mathbox::surd::Generator;
//!
//! let generator = Generator::new();
//! let ts = Typesetter::new(&generator);
//! let b = ts.layout("\\sqrt{x^2+1}", &StyleContext::new(24.0));
//! assert!(b.width() > 0.0);
//! ```
use mathbox_surd::{Generator, Tuning};

use crate::Error;
use crate::math::{self, Node};
use crate::metrics::Metrics;
use crate::style::StyleContext;

mod boxes;
mod builder;
mod chars;
pub mod delim;
mod frac;
mod glue;
pub mod grid;
mod placeholder;
mod radical;
mod script;

pub use boxes::{
    Boxed, Child, Composite, Extent, Frame, Glyph, GlyphPiece, MathBox, Placeholder,
    PlaceholderRegion, Rule, Stretched, Surd, Walk,
};
pub use delim::DELIMITER_ASSEMBLY_THRESHOLD;

/// Math typesetter
///
/// Metrics and tuning are plain data held by value.
/// They can also be swapped for a single call with [`Typesetter::layout_with`].
#[derive(Debug, Clone)]
pub struct Typesetter<'g> {
    metrics: Metrics,
    tuning: Tuning,
    generator: &'g Generator,
}

impl<'g> Typesetter<'g> {
    /// Typesetter with default metrics and tuning
    pub fn new(generator: &'g Generator) -> Self {
        Typesetter {
            metrics: Metrics::default(),
            tuning: Tuning::default(),
            generator,
        }
    }

    pub fn with_metrics(self, metrics: Metrics) -> Self {
        Self { metrics, ..self }
    }

    pub fn with_tuning(self, tuning: Tuning) -> Self {
        Self { tuning, ..self }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn generator(&self) -> &'g Generator {
        self.generator
    }

    /// Check metrics and tuning.
    /// Layout never fails, but invalid values give meaningless geometry.
    pub fn validate(&self) -> Result<(), Error> {
        self.metrics.validate()?;
        self.tuning.validate()?;
        Ok(())
    }

    /// Lay out a markup string
    pub fn layout(&self, markup: &str, style: &StyleContext) -> MathBox {
        self.layout_with(markup, style, &self.metrics, &self.tuning)
    }

    /// Lay out a markup string with metrics and tuning other than those of the typesetter
    pub fn layout_with(
        &self,
        markup: &str,
        style: &StyleContext,
        metrics: &Metrics,
        tuning: &Tuning,
    ) -> MathBox {
        let nodes = math::parse(markup);
        let mut builder = builder::Builder::new(metrics, tuning, self.generator);
        builder.build_seq(&nodes, style)
    }

    /// Lay out already parsed nodes
    pub fn layout_nodes(&self, nodes: &[Node], style: &StyleContext) -> MathBox {
        let mut builder = builder::Builder::new(&self.metrics, &self.tuning, self.generator);
        builder.build_seq(nodes, style)
    }
}
