//! Color model shared by the evaluators and renderers.
//!
//! Scope:
//! - straight RGB, each channel nominally in `[0, 1]`
//! - the default anchor palette
//!
//! Alpha is not part of the mesh model; renderers write opaque pixels.

pub mod color;
pub mod palette;

pub use color::Rgb;
pub use palette::{default_color, DEFAULT_PALETTE};
