/// Initialization parameters for the headless GPU context.
///
/// Keep this structure minimal; add flags only when a backend needs them.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may pick from.
    pub backends: wgpu::Backends,

    /// Adapter preference. Offline renders favour the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Force a software adapter (useful for reproducible CI output).
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// The mesh-field program needs none; keep empty for portability.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// The field program binds two read-only storage buffers in the fragment
    /// stage, which rules out WebGL2 downlevel limits.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        }
    }
}
