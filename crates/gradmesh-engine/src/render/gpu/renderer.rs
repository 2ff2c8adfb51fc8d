use anyhow::{bail, Context, Result};
use gradmesh_core::{MeshBuffers, MeshState};

use crate::device::HeadlessGpu;
use crate::render::{PixelBuffer, RenderConfig, RenderCtx, RenderTarget};

use super::layout::{FieldParams, GpuAnchor};

type HandleOffsets = [f32; 8];

/// Largest anchor count whose storage buffers fit within `limits`.
pub fn max_anchors(limits: &wgpu::Limits) -> usize {
    let bytes = (limits.max_storage_buffer_binding_size as u64).min(limits.max_buffer_size);
    let stride = std::mem::size_of::<GpuAnchor>().max(std::mem::size_of::<HandleOffsets>()) as u64;
    usize::try_from(bytes / stride).unwrap_or(usize::MAX)
}

/// Full-screen color-field renderer.
///
/// Every pixel of the target is written: the pass clears, then one
/// triangle covering the viewport evaluates the field per fragment.
/// Resources are created lazily and reused across frames; storage
/// buffers grow to the next power of two when a mesh outgrows them.
#[derive(Default)]
pub struct GpuRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    params_ubo: Option<wgpu::Buffer>,

    anchor_sbo: Option<wgpu::Buffer>,
    handle_sbo: Option<wgpu::Buffer>,
    anchor_capacity: usize,
}

impl GpuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `mesh` into `target`.
    ///
    /// The target size is `ctx.size`; `config.size` is not consulted here.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &MeshState,
        config: &RenderConfig,
    ) {
        if ctx.size.is_empty() {
            log::debug!("GpuRenderer: empty target {:?}; nothing to draw", ctx.size);
            return;
        }

        let limit = max_anchors(&ctx.device.limits());
        if mesh.len() > limit {
            log::error!(
                "GpuRenderer: mesh of {} anchors exceeds the device storage limit of {limit}; skipped",
                mesh.len()
            );
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_storage_capacity(ctx, mesh.len(), limit);
        self.ensure_bindings(ctx);

        let buffers = MeshBuffers::from_state(mesh);
        self.upload(ctx, &buffers, config);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gradmesh field pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    /// Renders offscreen into an `Rgba8Unorm` texture and reads it back.
    ///
    /// Blocks until the GPU has finished. Rows come back tightly packed,
    /// top row first, exactly like [`CpuRenderer`](crate::render::CpuRenderer).
    pub fn render_to_buffer(
        &mut self,
        gpu: &HeadlessGpu,
        mesh: &MeshState,
        config: &RenderConfig,
    ) -> Result<PixelBuffer> {
        let size = config.size;
        if size.is_empty() {
            log::debug!("GpuRenderer: empty target {size:?}; skipping readback");
            return Ok(PixelBuffer::new(size.width, size.height));
        }

        let device = gpu.device();
        let queue = gpu.queue();

        let max_dim = device.limits().max_texture_dimension_2d;
        if size.width > max_dim || size.height > max_dim {
            bail!("target {}x{} exceeds the device limit of {max_dim}", size.width, size.height);
        }
        let anchor_limit = max_anchors(&device.limits());
        if mesh.len() > anchor_limit {
            bail!(
                "mesh of {} anchors exceeds the device storage limit of {anchor_limit} anchors",
                mesh.len()
            );
        }

        let format = wgpu::TextureFormat::Rgba8Unorm;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("gradmesh offscreen target"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let unpadded = size.width * PixelBuffer::BYTES_PER_PIXEL as u32;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded = unpadded.div_ceil(align) * align;

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("gradmesh readback"),
            size: padded as u64 * size.height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("gradmesh offscreen encoder"),
        });

        {
            let ctx = RenderCtx::new(device, queue, format, size);
            let mut target = RenderTarget::new(&mut encoder, &view);
            self.render(&ctx, &mut target, mesh, config);
        }

        encoder.copy_texture_to_buffer(
            texture.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: Some(size.height),
                },
            },
            wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(Some(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        gpu.wait_idle()?;
        rx.recv()
            .context("readback callback was dropped")?
            .context("failed to map readback buffer")?;

        let mut data = Vec::with_capacity(size.pixel_count() * PixelBuffer::BYTES_PER_PIXEL);
        {
            let mapped = slice.get_mapped_range();
            for row in mapped.chunks_exact(padded as usize) {
                data.extend_from_slice(&row[..unpadded as usize]);
            }
        }
        readback.unmap();

        PixelBuffer::from_raw(size.width, size.height, data)
            .context("readback size does not match the target")
    }

    fn upload(&self, ctx: &RenderCtx<'_>, buffers: &MeshBuffers, config: &RenderConfig) {
        let (Some(ubo), Some(anchors), Some(handles)) =
            (self.params_ubo.as_ref(), self.anchor_sbo.as_ref(), self.handle_sbo.as_ref())
        else {
            return;
        };

        let params = FieldParams::new(buffers, ctx.size, config);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&params));
        ctx.queue.write_buffer(anchors, 0, bytemuck::cast_slice(&GpuAnchor::collect(buffers)));
        ctx.queue.write_buffer(handles, 0, bytemuck::cast_slice(&buffers.handles));
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.target_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gradmesh field shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh_field.wgsl").into()),
        });

        let storage_entry = |binding: u32, element: usize| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(element as u64),
            },
            count: None,
        };

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("gradmesh field bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: wgpu::BufferSize::new(
                                    std::mem::size_of::<FieldParams>() as u64,
                                ),
                            },
                            count: None,
                        },
                        storage_entry(1, std::mem::size_of::<GpuAnchor>()),
                        storage_entry(2, std::mem::size_of::<HandleOffsets>()),
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("gradmesh field pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gradmesh field pipeline"),
            layout: Some(&pipeline_layout),

            // Vertices are generated from the vertex index.
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("GpuRenderer: built pipeline for {:?}", ctx.target_format);

        self.pipeline_format = Some(ctx.target_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
    }

    fn ensure_storage_capacity(&mut self, ctx: &RenderCtx<'_>, required_anchors: usize, limit: usize) {
        if required_anchors <= self.anchor_capacity
            && self.anchor_sbo.is_some()
            && self.handle_sbo.is_some()
        {
            return;
        }

        let new_cap = required_anchors.next_power_of_two().max(16).min(limit).max(required_anchors);
        log::debug!("GpuRenderer: growing storage to {new_cap} anchors");
        let storage = |label: &str, element: usize| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (new_cap * element) as u64,
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        self.anchor_sbo = Some(storage("gradmesh anchor sbo", std::mem::size_of::<GpuAnchor>()));
        self.handle_sbo = Some(storage("gradmesh handle sbo", std::mem::size_of::<HandleOffsets>()));
        self.anchor_capacity = new_cap;

        // Old bind group points at the dropped buffers.
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.params_ubo.is_none() {
            self.params_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("gradmesh params ubo"),
                size: std::mem::size_of::<FieldParams>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if self.bind_group.is_some() {
            return;
        }

        let (Some(bgl), Some(ubo), Some(anchors), Some(handles)) = (
            self.bind_group_layout.as_ref(),
            self.params_ubo.as_ref(),
            self.anchor_sbo.as_ref(),
            self.handle_sbo.as_ref(),
        ) else {
            return;
        };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("gradmesh field bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: anchors.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 2, resource: handles.as_entire_binding() },
            ],
        }));
    }
}
