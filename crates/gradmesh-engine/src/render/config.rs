use gradmesh_core::{FieldStrategy, Sample};

/// Output size in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Vertical orientation of the output image.
///
/// This is the single place where the mesh's top-left convention is
/// reconciled with a consumer's. wgpu framebuffers are already top-left, so
/// `Down` needs no flip on either backend.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum YAxis {
    /// Row 0 is `v = 0` (top of the mesh).
    #[default]
    Down,
    /// Row 0 is `v = 1`, for bottom-left-origin consumers.
    Up,
}

/// What each pixel encodes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RenderChannel {
    /// Evaluated color.
    #[default]
    Color,
    /// Evaluated surface position as `(x, y, 0)`.
    Position,
}

impl RenderChannel {
    /// Opaque RGBA8 encoding of a sample.
    #[inline]
    pub fn encode(self, sample: &Sample) -> [u8; 4] {
        let [r, g, b] = match self {
            RenderChannel::Color => sample.color.to_u8(),
            RenderChannel::Position => {
                gradmesh_core::Rgb::new(sample.position.x, sample.position.y, 0.0).to_u8()
            }
        };
        [r, g, b, 255]
    }
}

/// Per-render setup, fixed for the whole pass.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderConfig {
    pub size: Extent,
    pub strategy: FieldStrategy,
    pub channel: RenderChannel,
    pub y_axis: YAxis,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, strategy: FieldStrategy) -> Self {
        Self {
            size: Extent::new(width, height),
            strategy,
            ..Self::default()
        }
    }

    /// Mesh coordinate sampled for pixel `(px, py)`: the pixel center.
    #[inline]
    pub fn sample_point(&self, px: u32, py: u32) -> (f32, f32) {
        let u = (px as f32 + 0.5) / self.size.width as f32;
        let v = (py as f32 + 0.5) / self.size.height as f32;
        match self.y_axis {
            YAxis::Down => (u, v),
            YAxis::Up => (u, 1.0 - v),
        }
    }
}
