/// Rejected mesh mutation. The state the operation was called on is unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Width or height below 1, or an anchor count that cannot be allocated.
    #[error("invalid mesh dimensions {width}x{height}: both must be at least 1 and the grid must fit in memory")]
    InvalidDimension { width: usize, height: usize },

    /// The targeted anchor does not exist.
    #[error("anchor index {index} out of range for a mesh of {count} anchors")]
    IndexOutOfRange { index: usize, count: usize },
}
