use crate::paint::Rgb;

use super::Direction;

/// A recorded mesh mutation.
///
/// Editors and command lines emit these; [`MeshState::apply`](super::MeshState::apply)
/// and [`MeshStore::apply`](super::MeshStore::apply) replay them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MeshEdit {
    Resize { width: usize, height: usize },
    MovePoint { index: usize, x: f32, y: f32 },
    SetColor { index: usize, color: Rgb },
    UpdateHandle { index: usize, direction: Direction, x: f32, y: f32 },
}
