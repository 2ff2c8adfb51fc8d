//! Surface Evaluator: position and color at a cell-local coordinate.

pub mod bezier;
pub mod color;
mod surface;

pub use color::ColorInterpolation;
pub use surface::{Sample, SurfaceEvaluator};
