/*!
 * Core Types
 * Shared value types for the synchronized containers
 */

use serde::{Deserialize, Serialize};

/// Identifier of one container instance, unique for the process lifetime
pub type InstanceId = u64;

/// Modification counter of one container instance
pub type Epoch = u64;

/// Position inside a sequence container
///
/// A position is stamped with the instance that produced it and that
/// instance's epoch at the time. Any mutation advances the epoch, so a
/// position must be used immediately: once another operation has modified
/// the container, the position is rejected as stale instead of silently
/// pointing at a different element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    owner: InstanceId,
    epoch: Epoch,
    index: usize,
}

impl Position {
    pub(crate) const fn new(owner: InstanceId, epoch: Epoch, index: usize) -> Self {
        Self {
            owner,
            epoch,
            index,
        }
    }

    /// Offset from the start of the sequence
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Epoch the position was taken at
    #[inline]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[inline]
    pub(crate) const fn owner(&self) -> InstanceId {
        self.owner
    }
}
