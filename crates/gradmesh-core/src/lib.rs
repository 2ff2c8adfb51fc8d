//! Mesh-gradient core: anchor grid state, Bézier patch construction and
//! color-field evaluation.
//!
//! Everything here is a pure function of an immutable [`MeshState`]
//! snapshot and a query point, so any number of threads (or a GPU port of
//! the same math) can sample one snapshot concurrently.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`mesh`] | `MeshState`, `Anchor`, `HandleSet`, `MeshEdit`, `MeshStore`, `MeshBuffers` |
//! | [`patch`] | `Patch`, `CellCorners`: the 4×4 control lattice of one cell |
//! | [`locate`] | global `(u, v)` to cell + local coordinate |
//! | [`eval`] | bicubic Bézier position, bilinear / bicubic color |
//! | [`field`] | `FieldStrategy`, `ColorField` and the global blend kernels |
//! | [`coords`], [`paint`] | `Vec2`, `Rgb`, default palette |
//!
//! # Quick start
//!
//! ```rust
//! use gradmesh_core::{FieldStrategy, MeshState, ColorField};
//!
//! let mesh = MeshState::initialize(3, 3).unwrap();
//! let field = FieldStrategy::default().bind(&mesh);
//! let color = field.evaluate(0.25, 0.25);
//! assert!(color.is_finite());
//! ```

pub mod coords;
pub mod eval;
pub mod field;
pub mod locate;
pub mod mesh;
pub mod paint;
pub mod patch;

pub use coords::Vec2;
pub use eval::{ColorInterpolation, Sample, SurfaceEvaluator};
pub use field::{ColorField, FieldStrategy, Gaussian, InverseDistance, MeshField, NearestDominant};
pub use locate::{locate, Cell};
pub use mesh::{Anchor, Direction, HandleSet, MeshBuffers, MeshEdit, MeshError, MeshState, MeshStore};
pub use paint::Rgb;
pub use patch::Patch;
