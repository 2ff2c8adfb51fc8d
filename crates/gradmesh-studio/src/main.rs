//! gradmesh-studio: builds a mesh from command-line edits, renders it and
//! writes a PNG.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use gradmesh_core::{MeshState, MeshStore};
use gradmesh_engine::device::{GpuInit, HeadlessGpu};
use gradmesh_engine::logging::{init_logging, LoggingConfig};
use gradmesh_engine::{CpuRenderer, GpuRenderer, PixelBuffer, RenderConfig};
use log::LevelFilter;

use cli::{Args, Backend};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig::with_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }));

    let (cols, rows) = args.grid;
    let mesh = MeshState::initialize(cols as usize, rows as usize).context("invalid --grid")?;
    let store = MeshStore::new(mesh);

    for edit in args.edits() {
        store
            .apply(edit)
            .with_context(|| format!("cannot apply {edit:?}"))?;
    }

    // One snapshot for the whole pass.
    let mesh = store.snapshot();
    let config = args.render_config();
    log::info!(
        "rendering {}x{} mesh at {}x{} ({}, {:?} backend)",
        mesh.width(),
        mesh.height(),
        config.size.width,
        config.size.height,
        config.strategy.name(),
        args.backend,
    );

    let pixels = match args.backend {
        Backend::Cpu => CpuRenderer::new().render(&mesh, &config),
        Backend::Gpu => render_gpu(&mesh, &config)?,
    };

    save_png(pixels, &args.out)?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}

/// Renders on the GPU, or on the CPU when no adapter can be opened.
fn render_gpu(mesh: &MeshState, config: &RenderConfig) -> Result<PixelBuffer> {
    match HeadlessGpu::new_blocking(GpuInit::default()) {
        Ok(gpu) => {
            let info = gpu.adapter_info();
            log::debug!("rendering on {} ({:?}, {:?})", info.name, info.backend, info.device_type);
            GpuRenderer::new().render_to_buffer(&gpu, mesh, config)
        }
        Err(err) => {
            log::warn!("GPU unavailable ({err:#}); falling back to CPU");
            Ok(CpuRenderer::new().render(mesh, config))
        }
    }
}

fn save_png(pixels: PixelBuffer, path: &std::path::Path) -> Result<()> {
    let (width, height) = (pixels.width(), pixels.height());
    let image = image::RgbaImage::from_raw(width, height, pixels.into_bytes())
        .context("pixel buffer does not match its dimensions")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
