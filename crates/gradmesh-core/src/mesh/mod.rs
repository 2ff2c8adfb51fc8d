//! Mesh State: the anchor grid, its colors and tangent handles.
//!
//! A [`MeshState`] is an immutable value. Every mutation returns a new state
//! or fails without touching the original, so a renderer can hold one
//! snapshot for a whole pass while edits keep arriving.

mod anchor;
mod edit;
mod error;
mod flatten;
mod state;
mod store;

pub use anchor::{Anchor, Direction, HandleSet, ParseDirectionError};
pub use edit::MeshEdit;
pub use error::MeshError;
pub use flatten::MeshBuffers;
pub use state::{DegenerateAxes, MeshState, DEFAULT_HANDLE_LENGTH, HANDLE_LIMIT};
pub use store::MeshStore;
