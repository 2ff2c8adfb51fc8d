//! wgpu backend: a full-screen fragment pass evaluating the color field.
//!
//! Mesh data is uploaded as two read-only storage buffers (anchors, handles)
//! next to one uniform parameter block. The shader mirrors the core math
//! step for step; see `shaders/mesh_field.wgsl`.

mod layout;
mod renderer;

pub use layout::{FieldParams, GpuAnchor};
pub use renderer::{max_anchors, GpuRenderer};
