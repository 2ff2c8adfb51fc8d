//! Geometry types for mesh space.
//!
//! Canonical mesh space:
//! - unit square `[0, 1]²`
//! - origin top-left
//! - +X right, +Y down
//!
//! Backends with a different vertical convention flip at their adapter
//! boundary; nothing in this crate ever inverts Y.

mod vec2;

pub use vec2::Vec2;
pub(crate) use vec2::clamp_scalar;
