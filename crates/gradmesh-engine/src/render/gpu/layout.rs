use bytemuck::{Pod, Zeroable};
use gradmesh_core::{FieldStrategy, MeshBuffers};

use crate::render::{Extent, RenderChannel, RenderConfig, YAxis};

// ── anchor ────────────────────────────────────────────────────────────────

/// One anchor as the shader reads it (`struct Anchor` in WGSL).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuAnchor {
    pub position: [f32; 2],
    pub _pad: [f32; 2], // vec4 alignment of `color`
    pub color: [f32; 4],
}

impl GpuAnchor {
    /// Anchors of `buffers` in mesh order; alpha is always 1.
    pub fn collect(buffers: &MeshBuffers) -> Vec<Self> {
        buffers
            .positions
            .iter()
            .zip(&buffers.colors)
            .map(|(&position, &[r, g, b])| Self {
                position,
                _pad: [0.0; 2],
                color: [r, g, b, 1.0],
            })
            .collect()
    }
}

// ── parameters ────────────────────────────────────────────────────────────

/// Uniform parameter block (`struct Params` in WGSL).
///
/// `kernel` packing by strategy:
/// - inverse distance: `[epsilon, 0, 0, 0]`
/// - gaussian: `[bandwidth, 0, 0, 0]`
/// - nearest dominant: `[power, epsilon, 0, 0]`
/// - patch: unused
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FieldParams {
    pub grid: [u32; 2],
    pub target: [f32; 2],
    pub strategy: u32,
    pub interpolation: u32,
    pub channel: u32,
    pub y_up: u32,
    pub kernel: [f32; 4],
}

impl FieldParams {
    pub fn new(buffers: &MeshBuffers, target: Extent, config: &RenderConfig) -> Self {
        let (interpolation, kernel) = match config.strategy {
            FieldStrategy::Patch(mode) => (mode.tag(), [0.0; 4]),
            FieldStrategy::InverseDistance(k) => (0, [k.epsilon, 0.0, 0.0, 0.0]),
            FieldStrategy::Gaussian(k) => (0, [k.bandwidth, 0.0, 0.0, 0.0]),
            FieldStrategy::NearestDominant(k) => (0, [k.power, k.epsilon, 0.0, 0.0]),
        };

        Self {
            grid: [buffers.width, buffers.height],
            target: [target.width.max(1) as f32, target.height.max(1) as f32],
            strategy: config.strategy.tag(),
            interpolation,
            channel: match config.channel {
                RenderChannel::Color => 0,
                RenderChannel::Position => 1,
            },
            y_up: (config.y_axis == YAxis::Up) as u32,
            kernel,
        }
    }
}
