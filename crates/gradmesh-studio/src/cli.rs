//! Command-line surface: argument model and value parsers.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gradmesh_core::mesh::ParseDirectionError;
use gradmesh_core::{
    ColorInterpolation, Direction, FieldStrategy, Gaussian, InverseDistance, MeshEdit,
    NearestDominant, Rgb,
};
use gradmesh_engine::{RenderChannel, RenderConfig, YAxis};
use thiserror::Error;

/// Render a gradient mesh to PNG
#[derive(Parser, Debug)]
#[command(name = "gradmesh-studio")]
#[command(about = "Render a gradient mesh to PNG")]
#[command(version)]
pub struct Args {
    /// Anchor grid as COLSxROWS
    #[arg(long, default_value = "3x3", value_parser = parse_dims)]
    pub grid: (u32, u32),

    /// Output size in pixels as WIDTHxHEIGHT
    #[arg(long, default_value = "512x512", value_parser = parse_dims)]
    pub size: (u32, u32),

    /// Color-field algorithm
    #[arg(long, value_enum, default_value_t = StrategyArg::Patch)]
    pub strategy: StrategyArg,

    /// Corner-color blend for the patch strategy
    #[arg(long, value_enum, default_value_t = ColorModeArg::Bilinear)]
    pub color_mode: ColorModeArg,

    /// Gaussian bandwidth (gaussian strategy)
    #[arg(long)]
    pub bandwidth: Option<f32>,

    /// Distance exponent (nearest-dominant strategy)
    #[arg(long)]
    pub power: Option<f32>,

    /// What each pixel encodes
    #[arg(long, value_enum, default_value_t = ChannelArg::Color)]
    pub channel: ChannelArg,

    /// Put v = 1 on the first image row
    #[arg(long)]
    pub y_up: bool,

    /// Rasterizer backend
    #[arg(long, value_enum, default_value_t = Backend::Cpu)]
    pub backend: Backend,

    /// Move an anchor: IDX=X,Y
    #[arg(long = "move", value_name = "IDX=X,Y", value_parser = parse_move)]
    pub moves: Vec<MeshEdit>,

    /// Set a handle offset: IDX:DIR=X,Y (DIR is top, right, bottom or left)
    #[arg(long = "handle", value_name = "IDX:DIR=X,Y", value_parser = parse_handle)]
    pub handles: Vec<MeshEdit>,

    /// Recolor an anchor: IDX=#RRGGBB
    #[arg(long = "color", value_name = "IDX=#RRGGBB", value_parser = parse_set_color)]
    pub colors: Vec<MeshEdit>,

    /// Output PNG path
    #[arg(short, long, default_value = "gradmesh.png")]
    pub out: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    Patch,
    InverseDistance,
    Gaussian,
    NearestDominant,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum ColorModeArg {
    Bilinear,
    Bicubic,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum ChannelArg {
    Color,
    Position,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Backend {
    Cpu,
    Gpu,
}

impl Args {
    pub fn field_strategy(&self) -> FieldStrategy {
        match self.strategy {
            StrategyArg::Patch => FieldStrategy::Patch(match self.color_mode {
                ColorModeArg::Bilinear => ColorInterpolation::Bilinear,
                ColorModeArg::Bicubic => ColorInterpolation::Bicubic,
            }),
            StrategyArg::InverseDistance => FieldStrategy::InverseDistance(InverseDistance::default()),
            StrategyArg::Gaussian => {
                let mut k = Gaussian::default();
                if let Some(bandwidth) = self.bandwidth {
                    k.bandwidth = bandwidth;
                }
                FieldStrategy::Gaussian(k)
            }
            StrategyArg::NearestDominant => {
                let mut k = NearestDominant::default();
                if let Some(power) = self.power {
                    k.power = power;
                }
                FieldStrategy::NearestDominant(k)
            }
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let (width, height) = self.size;
        RenderConfig {
            channel: match self.channel {
                ChannelArg::Color => RenderChannel::Color,
                ChannelArg::Position => RenderChannel::Position,
            },
            y_axis: if self.y_up { YAxis::Up } else { YAxis::Down },
            ..RenderConfig::new(width, height, self.field_strategy())
        }
    }

    /// Edits in application order: geometry first, then handles, then colors.
    /// Order within each flag is kept.
    pub fn edits(&self) -> impl Iterator<Item = &MeshEdit> {
        self.moves.iter().chain(&self.handles).chain(&self.colors)
    }
}

// ── value parsers ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ColorParseError {
    #[error("expected #RRGGBB, got {0:?}")]
    Format(String),

    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Parses `#RRGGBB` (the `#` is optional).
pub fn parse_hex_color(s: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorParseError::Format(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::Digits(s.to_string()))
    };
    Ok(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("expected {expected}, got {got:?}")]
    Shape { expected: &'static str, got: String },

    #[error("invalid number {0:?}")]
    Number(String),

    #[error("dimensions must be non-zero, got {0:?}")]
    Zero(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ArgError> {
    s.trim().parse().map_err(|_| ArgError::Number(s.to_string()))
}

fn split_once<'a>(s: &'a str, sep: char, expected: &'static str) -> Result<(&'a str, &'a str), ArgError> {
    s.split_once(sep).ok_or_else(|| ArgError::Shape { expected, got: s.to_string() })
}

/// `WxH`, both non-zero.
pub fn parse_dims(s: &str) -> Result<(u32, u32), ArgError> {
    let lower = s.to_ascii_lowercase();
    let (w, h) = split_once(&lower, 'x', "WIDTHxHEIGHT")?;
    let (w, h) = (number::<u32>(w)?, number::<u32>(h)?);
    if w == 0 || h == 0 {
        return Err(ArgError::Zero(s.to_string()));
    }
    Ok((w, h))
}

fn parse_point(s: &str) -> Result<(f32, f32), ArgError> {
    let (x, y) = split_once(s, ',', "X,Y")?;
    Ok((number(x)?, number(y)?))
}

/// `IDX=X,Y`
pub fn parse_move(s: &str) -> Result<MeshEdit, ArgError> {
    let (index, point) = split_once(s, '=', "IDX=X,Y")?;
    let (x, y) = parse_point(point)?;
    Ok(MeshEdit::MovePoint { index: number(index)?, x, y })
}

/// `IDX:DIR=X,Y`
pub fn parse_handle(s: &str) -> Result<MeshEdit, ArgError> {
    let (target, point) = split_once(s, '=', "IDX:DIR=X,Y")?;
    let (index, direction) = split_once(target, ':', "IDX:DIR=X,Y")?;
    let direction: Direction = direction.parse()?;
    let (x, y) = parse_point(point)?;
    Ok(MeshEdit::UpdateHandle { index: number(index)?, direction, x, y })
}

/// `IDX=#RRGGBB`
pub fn parse_set_color(s: &str) -> Result<MeshEdit, ArgError> {
    let (index, color) = split_once(s, '=', "IDX=#RRGGBB")?;
    Ok(MeshEdit::SetColor { index: number(index)?, color: parse_hex_color(color)? })
}
