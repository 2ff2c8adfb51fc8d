use std::sync::Arc;

use arc_swap::ArcSwap;

use super::{MeshEdit, MeshError, MeshState};

/// Copy-on-write holder for the current mesh.
///
/// Render passes call [`snapshot`](Self::snapshot) once and sample that
/// `Arc` for every pixel; edits publish a fresh state atomically, so a pass
/// never observes half of an edit.
#[derive(Debug)]
pub struct MeshStore {
    current: ArcSwap<MeshState>,
}

impl MeshStore {
    pub fn new(state: MeshState) -> Self {
        Self { current: ArcSwap::from_pointee(state) }
    }

    /// The state published at the time of the call.
    #[inline]
    pub fn snapshot(&self) -> Arc<MeshState> {
        self.current.load_full()
    }

    /// Applies `edit` to the latest state and publishes the result.
    ///
    /// Concurrent edits are serialised by read-copy-update: the edit is
    /// re-applied if another writer published first. On error nothing is
    /// published.
    pub fn apply(&self, edit: &MeshEdit) -> Result<Arc<MeshState>, MeshError> {
        let mut outcome = None;
        self.current.rcu(|current| match current.apply(edit) {
            Ok(next) => {
                let next = Arc::new(next);
                outcome = Some(Ok(Arc::clone(&next)));
                next
            }
            Err(err) => {
                outcome = Some(Err(err));
                Arc::clone(current)
            }
        });
        // rcu runs the closure at least once.
        outcome.unwrap_or_else(|| Ok(self.snapshot()))
    }

    /// Replaces the published state wholesale.
    pub fn replace(&self, state: MeshState) {
        self.current.store(Arc::new(state));
    }
}

impl Default for MeshStore {
    fn default() -> Self {
        Self::new(MeshState::default())
    }
}
