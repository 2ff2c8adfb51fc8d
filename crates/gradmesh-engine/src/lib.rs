//! Gradmesh engine crate.
//!
//! Renderer adapters for `gradmesh-core` color fields: a CPU rasterizer and
//! a wgpu fragment program that evaluates the same math per fragment, plus
//! the headless GPU bootstrap and logging setup they share.

pub mod device;
pub mod logging;
pub mod render;

pub use render::{CpuRenderer, Extent, GpuRenderer, PixelBuffer, RenderChannel, RenderConfig, YAxis};
