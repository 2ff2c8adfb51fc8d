//! Headless GPU device management.
//!
//! Mesh rendering never needs a window: this module creates the wgpu
//! Instance/Adapter/Device/Queue and nothing else. Presentation, if any, is
//! the caller's business.

mod gpu;
mod init;

pub use gpu::HeadlessGpu;
pub use init::GpuInit;
