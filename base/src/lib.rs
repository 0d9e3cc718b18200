//! Base types shared by the mathbox crates: geometry and colors.

pub mod color;
pub mod geom;

pub use color::ColorU8;
