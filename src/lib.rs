#![warn(missing_debug_implementations)]
/*!
 * # mathbox
 * _math formula typesetting_. Turns a small LaTeX-like markup into a tree of positioned boxes.
 *
 * The pipeline has three stages:
 *  - [`math`]: the markup is tokenized and parsed into a tree of [`math::Node`].
 *    Parsing never fails, malformed markup is recovered on a best-effort basis.
 *  - [`layout`]: nodes are converted into [`MathBox`]es under a [`StyleContext`],
 *    following box-and-glue rules driven by [`Metrics`].
 *  - [`render`]: the box tree is walked onto a [`render::Surface`] supplied by the host.
 *
 * The radical sign of `\sqrt` is not a font glyph. It is generated for each radicand by
 * the [`surd`] crate, which stretches a fixed outline template to the requested height.
 *
 * ```
 * use mathbox::{Boxed, StyleContext, Typesetter};
 * use mathbox::geom::Point;
 * use mathbox::render::Recorder;
 * use mathbox::surd::Generator;
 *
 * // the generator holds the radical template and can be shared
 * let generator = Generator::new();
 * let ts = Typesetter::new(&generator);
 *
 * let style = StyleContext::new(32.0);
 * let formula = ts.layout("x = \\frac{-b + \\sqrt{b^2 - 4ac}}{2a}", &style);
 * assert!(formula.ascent() > formula.descent());
 *
 * // draw with the left end of the baseline at (10, 60)
 * let mut rec = Recorder::new();
 * formula.render(&mut rec, Point::from_xy(10.0, 60.0), &style);
 * assert!(!rec.primitives().is_empty());
 * ```
 *
 * ## Crate features
 *
 *  - `diag`: reports of parser recoveries through [miette](https://docs.rs/miette) (See `math::diag`)
 */
// Mathbox is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

use std::fmt;

mod input;
pub mod layout;
pub mod math;
pub mod metrics;
pub mod render;
pub mod style;

pub use layout::{Boxed, MathBox, Typesetter};
pub use metrics::Metrics;
pub use style::StyleContext;

/// Rexports of [`mathbox_base::color`]` items
pub mod color {
    pub use mathbox_base::color::*;
}
pub use color::ColorU8;

/// Rexports of [`mathbox_base::geom`]` items
pub mod geom {
    pub use mathbox_base::geom::*;
}

/// Radical outline generation. Re-export of the `mathbox-surd` crate
pub use mathbox_surd as surd;

/// Errors returned by the validation helpers
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A metric is not finite or out of its range
    InvalidMetric { name: &'static str, value: f32 },
    /// A radical tuning parameter is invalid
    InvalidTuning(surd::TuningError),
    /// A color string could not be parsed
    InvalidColor(color::ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMetric { name, value } => {
                write!(f, "Invalid metric {}: {}", name, value)
            }
            Error::InvalidTuning(err) => write!(f, "Invalid tuning: {}", err),
            Error::InvalidColor(err) => write!(f, "Invalid color: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<surd::TuningError> for Error {
    fn from(err: surd::TuningError) -> Self {
        Error::InvalidTuning(err)
    }
}

impl From<color::ParseError> for Error {
    fn from(err: color::ParseError) -> Self {
        Error::InvalidColor(err)
    }
}
