use super::MeshState;

/// Mesh state flattened for bulk transfer to a backend.
///
/// Layout:
/// - anchor-major, row-major anchor order
/// - `handles[i]` holds anchor `i`'s offsets as `[top.x, top.y, right.x,
///   right.y, bottom.x, bottom.y, left.x, left.y]`
///
/// Backends copy these slices into whatever uniform or storage layout they
/// need; they must not reorder directions.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub width: u32,
    pub height: u32,
    pub positions: Vec<[f32; 2]>,
    pub colors: Vec<[f32; 3]>,
    pub handles: Vec<[f32; 8]>,
}

impl MeshBuffers {
    pub fn from_state(state: &MeshState) -> Self {
        let positions = state.anchors().iter().map(|a| [a.position.x, a.position.y]).collect();
        let colors = state.anchors().iter().map(|a| a.color.to_array()).collect();
        let handles = state
            .handles()
            .iter()
            .map(|h| {
                let mut out = [0.0f32; 8];
                for (i, v) in h.to_array().into_iter().enumerate() {
                    out[2 * i] = v.x;
                    out[2 * i + 1] = v.y;
                }
                out
            })
            .collect();

        Self {
            width: state.width() as u32,
            height: state.height() as u32,
            positions,
            colors,
            handles,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
