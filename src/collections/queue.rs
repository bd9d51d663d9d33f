/*!
 * Synchronized Queue
 * FIFO queue with a non-failing pop and a bulk drain into another queue
 */

use crate::core::{
    ContainerConfig, ContainerError, ContainerResult, Guarded, Operation, Synchronized,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// FIFO queue shared between threads
///
/// `pop` never fails for emptiness: absence is reported through its return
/// value. `peek` is the only read that treats emptiness as an error.
///
/// # Example
///
/// ```
/// use sync_containers::prelude::*;
///
/// let queue = SyncQueue::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncQueue<T> {
    inner: Guarded<VecDeque<T>>,
}

impl<T> SyncQueue<T> {
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::named("queue"))
    }

    /// Create a queue, reserving `config.initial_capacity` slots
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            inner: Guarded::with_config(VecDeque::with_capacity(config.initial_capacity), &config),
        }
    }

    /// Append `value` at the back
    pub fn push(&self, value: T) {
        let len = self.inner.with_mut(|queue| {
            queue.push_back(value);
            queue.len()
        });
        trace!(container = self.inner.label(), len, "push");
    }

    /// Alias of [`push`](Self::push)
    #[inline]
    pub fn enqueue(&self, value: T) {
        self.push(value)
    }

    /// Alias of [`push`](Self::push)
    #[inline]
    pub fn emplace(&self, value: T) {
        self.push(value)
    }

    /// Append every element of `values` in one critical section
    pub fn extend<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.with_mut(|queue| queue.extend(values));
    }

    /// Remove and return the front element, `None` when empty
    pub fn pop(&self) -> Option<T> {
        let value = self.inner.with_mut(VecDeque::pop_front);
        trace!(container = self.inner.label(), hit = value.is_some(), "pop");
        value
    }

    /// Move the front element into `out`
    ///
    /// Returns `false` and leaves `out` untouched when the queue is empty.
    pub fn pop_into(&self, out: &mut T) -> bool {
        match self.pop() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Run `f` against the front element while the lock is held
    pub fn peek_with<F, R>(&self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        match access.front() {
            Some(front) => Ok(f(front)),
            None => access.reject(ContainerError::Empty {
                operation: Operation::Peek,
            }),
        }
    }

    /// Remove every element, returning them in FIFO order
    pub fn drain(&self) -> VecDeque<T> {
        self.inner.take()
    }

    /// Move every element into `destination`, preserving order
    ///
    /// The elements leave this queue in a single critical section. This
    /// queue's lock is released before the destination is touched, and the
    /// destination's lock is taken once per element, so other threads may
    /// observe the elements arriving one by one. The two locks are never held
    /// together. Returns the number of elements moved.
    pub fn drain_into(&self, destination: &SyncQueue<T>) -> usize {
        let drained = self.drain();
        let moved = drained.len();
        for value in drained {
            destination.push(value);
        }
        debug!(
            container = self.inner.label(),
            destination = destination.inner.label(),
            moved,
            "Drained queue"
        );
        moved
    }
}

impl<T: Clone> SyncQueue<T> {
    /// Copy of the front element
    pub fn peek(&self) -> ContainerResult<T> {
        self.peek_with(T::clone)
    }

    /// Copy the front element into `out`
    pub fn peek_into(&self, out: &mut T) -> ContainerResult<()> {
        self.peek_with(|front| out.clone_from(front))
    }
}

impl<T> Synchronized for SyncQueue<T> {
    type Backing = VecDeque<T>;

    fn guarded(&self) -> &Guarded<VecDeque<T>> {
        &self.inner
    }
}

impl<T> Default for SyncQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<VecDeque<T>> for SyncQueue<T> {
    fn from(queue: VecDeque<T>) -> Self {
        Self {
            inner: Guarded::labeled(queue, "queue"),
        }
    }
}

impl<T> From<Vec<T>> for SyncQueue<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from(VecDeque::from(values))
    }
}

impl<T> FromIterator<T> for SyncQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<T>>())
    }
}
