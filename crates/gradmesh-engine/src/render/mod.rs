//! Renderer adapters.
//!
//! Both backends sample the same [`FieldStrategy`](gradmesh_core::FieldStrategy)
//! at pixel centers and agree to within one 8-bit step.
//!
//! Convention:
//! - mesh space is top-left origin, +Y down
//! - image row 0 is `v = 0` unless [`YAxis::Up`] is requested
//! - the flip happens only when mapping pixels to `(u, v)`; core math never flips

mod config;
mod cpu;
mod ctx;
pub mod gpu;
mod pixels;

pub use config::{Extent, RenderChannel, RenderConfig, YAxis};
pub use cpu::CpuRenderer;
pub use ctx::{RenderCtx, RenderTarget};
pub use gpu::GpuRenderer;
pub use pixels::PixelBuffer;
