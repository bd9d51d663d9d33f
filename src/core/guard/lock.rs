/*!
 * Guarded Container
 *
 * One backing container plus the single lock that guards it
 */

use super::traits::Backing;
use crate::core::config::{ContainerConfig, DEFAULT_LABEL};
use crate::core::errors::{ContainerError, ContainerResult, Operation};
use crate::core::types::{Epoch, InstanceId, Position};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

struct State<C> {
    data: C,
    epoch: Epoch,
}

/// Backing container guarded by one mutex
///
/// Every read and write of the backing storage happens while the lock is
/// held. No reference into the storage outlives the critical section:
/// callers either receive owned values, run a closure under the lock, or
/// hold an [`Access`] guard that releases the lock when dropped.
///
/// # Example
///
/// ```
/// use sync_containers::core::guard::Guarded;
///
/// let guarded = Guarded::new(vec![1, 2, 3]);
/// guarded.with_mut(|v| v.push(4));
/// assert_eq!(guarded.with(|v| v.iter().sum::<i32>()), 10);
/// ```
pub struct Guarded<C> {
    state: Mutex<State<C>>,
    id: InstanceId,
    label: &'static str,
}

impl<C> Guarded<C> {
    /// Guard `data` with a fresh lock
    pub fn new(data: C) -> Self {
        Self::labeled(data, DEFAULT_LABEL)
    }

    /// Guard `data`, tagging tracing events with `label`
    pub fn labeled(data: C, label: &'static str) -> Self {
        Self {
            state: Mutex::new(State { data, epoch: 0 }),
            id: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            label,
        }
    }

    /// Guard `data` using a container configuration
    pub fn with_config(data: C, config: &ContainerConfig) -> Self {
        Self::labeled(data, config.label)
    }

    /// Tracing label of this instance
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Acquire the lock for scoped access
    ///
    /// Blocks until the lock is free. The lock is held until the returned
    /// guard is dropped; do not call other operations on the same instance
    /// while holding it.
    pub fn lock(&self) -> Access<'_, C> {
        Access {
            guard: self.state.lock(),
            id: self.id,
            label: self.label,
        }
    }

    /// Run `f` against the contents while the lock is held
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&C) -> R,
    {
        let access = self.lock();
        f(&*access)
    }

    /// Run `f` against the mutable contents while the lock is held
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        let mut access = self.lock();
        f(&mut *access)
    }

    /// Current modification epoch
    pub fn epoch(&self) -> Epoch {
        self.state.lock().epoch
    }

    /// Swap the contents for `data`, returning the previous contents
    pub fn replace(&self, data: C) -> C {
        let mut access = self.lock();
        std::mem::replace(&mut *access, data)
    }

    /// Direct access through an exclusive borrow, no locking needed
    pub fn get_mut(&mut self) -> &mut C {
        let state = self.state.get_mut();
        state.epoch = state.epoch.wrapping_add(1);
        &mut state.data
    }

    /// Consume the guard and return the contents
    pub fn into_inner(self) -> C {
        self.state.into_inner().data
    }
}

impl<C: Default> Guarded<C> {
    /// Move the contents out, leaving an empty container behind
    pub fn take(&self) -> C {
        self.replace(C::default())
    }
}

impl<C: Clone> Guarded<C> {
    /// Owned copy of the contents taken under the lock
    pub fn snapshot(&self) -> C {
        self.with(C::clone)
    }
}

impl<C: Backing> Guarded<C> {
    pub fn len(&self) -> usize {
        self.with(<C as Backing>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.with(<C as Backing>::is_empty)
    }

    /// Remove every element, returning how many were dropped
    pub fn clear(&self) -> usize {
        let removed = self.with_mut(|data| {
            let removed = data.len();
            data.clear();
            removed
        });
        debug!(container = self.label, removed, "Cleared container");
        removed
    }
}

impl<C: Default> Default for Guarded<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

/// Cloning copies the contents under the source lock into a brand new lock
impl<C: Clone> Clone for Guarded<C> {
    fn clone(&self) -> Self {
        let data = self.snapshot();
        debug!(container = self.label, "Cloned contents into a fresh lock");
        Self::labeled(data, self.label)
    }
}

impl<C: fmt::Debug> fmt::Debug for Guarded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Guarded");
        out.field("label", &self.label);
        match self.state.try_lock() {
            Some(state) => out.field("data", &state.data),
            None => out.field("data", &format_args!("<locked>")),
        };
        out.finish()
    }
}

impl<C: Serialize> Serialize for Guarded<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let access = self.lock();
        (*access).serialize(serializer)
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for Guarded<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        C::deserialize(deserializer).map(Self::new)
    }
}

/// Scoped access to a guarded container
///
/// Holds the instance lock for as long as it lives. Mutable access advances
/// the instance epoch, invalidating previously issued positions.
pub struct Access<'a, C> {
    guard: MutexGuard<'a, State<C>>,
    id: InstanceId,
    label: &'static str,
}

impl<C> Access<'_, C> {
    /// Epoch as of now
    #[inline]
    pub fn epoch(&self) -> Epoch {
        self.guard.epoch
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stamp `index` with the current epoch of this instance
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        Position::new(self.id, self.guard.epoch, index)
    }

    /// Resolve `position` to an index, rejecting positions that belong to
    /// another instance or predate the latest mutation
    pub fn resolve(&self, position: Position, operation: Operation) -> ContainerResult<usize> {
        if position.owner() != self.id || position.epoch() != self.guard.epoch {
            return self.reject(ContainerError::StalePosition {
                operation,
                position_epoch: position.epoch(),
                current_epoch: self.guard.epoch,
            });
        }
        Ok(position.index())
    }

    /// Log a precondition violation and return it as an error
    pub fn reject<T>(&self, err: ContainerError) -> ContainerResult<T> {
        warn!(container = self.label, operation = %err.operation(), error = %err, "Precondition violated");
        Err(err)
    }
}

impl<C> Deref for Access<'_, C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.guard.data
    }
}

impl<C> DerefMut for Access<'_, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        self.guard.epoch = self.guard.epoch.wrapping_add(1);
        &mut self.guard.data
    }
}
