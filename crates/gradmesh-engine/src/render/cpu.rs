use gradmesh_core::{MeshField, MeshState};

use super::{PixelBuffer, RenderConfig};

/// Reference rasterizer: evaluates the color field once per pixel on the CPU.
///
/// Stateless; one renderer can serve any number of meshes and configs.
/// With the `parallel` feature rows are distributed across rayon's pool.
#[derive(Debug, Default, Copy, Clone)]
pub struct CpuRenderer;

impl CpuRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders `mesh` into a fresh buffer of `config.size`.
    ///
    /// The mesh is borrowed for the whole pass; callers holding a
    /// `MeshStore` pass one snapshot so concurrent edits cannot tear the image.
    pub fn render(&self, mesh: &MeshState, config: &RenderConfig) -> PixelBuffer {
        let mut out = PixelBuffer::new(config.size.width, config.size.height);
        if config.size.is_empty() {
            log::debug!("CpuRenderer: empty target {:?}; nothing to draw", config.size);
            return out;
        }

        let field = config.strategy.bind(mesh);
        log::debug!(
            "CpuRenderer: {} at {}x{}",
            field.strategy().name(),
            config.size.width,
            config.size.height
        );
        let row_bytes = out.row_bytes();
        fill_rows(out.as_bytes_mut(), row_bytes, &field, config);
        out
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(data: &mut [u8], row_bytes: usize, field: &MeshField<'_>, config: &RenderConfig) {
    for (py, row) in data.chunks_exact_mut(row_bytes).enumerate() {
        fill_row(row, py as u32, field, config);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(data: &mut [u8], row_bytes: usize, field: &MeshField<'_>, config: &RenderConfig) {
    use rayon::prelude::*;

    data.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| fill_row(row, py as u32, field, config));
}

fn fill_row(row: &mut [u8], py: u32, field: &MeshField<'_>, config: &RenderConfig) {
    for (px, texel) in row.chunks_exact_mut(PixelBuffer::BYTES_PER_PIXEL).enumerate() {
        let (u, v) = config.sample_point(px as u32, py);
        texel.copy_from_slice(&config.channel.encode(&field.sample(u, v)));
    }
}
