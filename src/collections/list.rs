/*!
 * Synchronized List
 * Doubly-linked sequence with epoch-checked positions
 */

use crate::core::{
    ContainerConfig, ContainerError, ContainerResult, Guarded, Operation, Position, Synchronized,
};
use serde::{Deserialize, Serialize};
use std::collections::{linked_list, LinkedList};
use tracing::trace;

/// Doubly-linked list shared between threads
///
/// Endpoint reads return copies. Positions returned by [`begin`](Self::begin),
/// [`end`](Self::end) and [`position_where`](Self::position_where) are only
/// valid until the next mutation of the list, by any thread; stale positions
/// are rejected with [`ContainerError::StalePosition`].
///
/// # Example
///
/// ```
/// use sync_containers::prelude::*;
///
/// let list: SyncList<i32> = [1, 3].into_iter().collect();
/// let pos = list.position_where(|v| *v == 3).unwrap();
/// list.insert_at(pos, 2).unwrap();
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncList<T> {
    inner: Guarded<LinkedList<T>>,
}

impl<T> SyncList<T> {
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::named("list"))
    }

    /// Create a list; the capacity hint is ignored by linked storage
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            inner: Guarded::with_config(LinkedList::new(), &config),
        }
    }

    pub fn push_front(&self, value: T) {
        self.inner.with_mut(|list| list.push_front(value));
        trace!(container = self.inner.label(), "push_front");
    }

    pub fn push_back(&self, value: T) {
        self.inner.with_mut(|list| list.push_back(value));
        trace!(container = self.inner.label(), "push_back");
    }

    /// Alias of [`push_front`](Self::push_front)
    #[inline]
    pub fn emplace_front(&self, value: T) {
        self.push_front(value)
    }

    /// Alias of [`push_back`](Self::push_back)
    #[inline]
    pub fn emplace_back(&self, value: T) {
        self.push_back(value)
    }

    /// Remove the first element, `None` when empty
    pub fn pop_front(&self) -> Option<T> {
        self.inner.with_mut(LinkedList::pop_front)
    }

    /// Remove the last element, `None` when empty
    pub fn pop_back(&self) -> Option<T> {
        self.inner.with_mut(LinkedList::pop_back)
    }

    /// Run `f` against the first element while the lock is held
    pub fn front_with<F, R>(&self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        match access.front() {
            Some(front) => Ok(f(front)),
            None => access.reject(ContainerError::Empty {
                operation: Operation::Front,
            }),
        }
    }

    /// Run `f` against the last element while the lock is held
    pub fn back_with<F, R>(&self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        match access.back() {
            Some(back) => Ok(f(back)),
            None => access.reject(ContainerError::Empty {
                operation: Operation::Back,
            }),
        }
    }

    /// Position of the first element (equal to [`end`](Self::end) when empty)
    pub fn begin(&self) -> Position {
        self.inner.lock().position(0)
    }

    /// Position one past the last element
    pub fn end(&self) -> Position {
        let access = self.inner.lock();
        access.position(access.len())
    }

    /// Position of the element at offset `index` from the front
    ///
    /// `index == len()` yields [`end`](Self::end); `None` past that.
    pub fn position_at(&self, index: usize) -> Option<Position> {
        let access = self.inner.lock();
        (index <= access.len()).then(|| access.position(index))
    }

    /// Position of the first element matching `predicate`
    pub fn position_where<P>(&self, mut predicate: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        let access = self.inner.lock();
        let index = access.iter().position(|value| predicate(value))?;
        Some(access.position(index))
    }

    /// Run `f` against the element at `position` while the lock is held
    pub fn get_with<F, R>(&self, position: Position, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        let index = access.resolve(position, Operation::At)?;
        match access.iter().nth(index) {
            Some(value) => Ok(f(value)),
            None => access.reject(ContainerError::OutOfRange {
                operation: Operation::At,
                index,
                len: access.len(),
            }),
        }
    }

    /// Insert `value` before `position`
    ///
    /// `position` may be [`end`](Self::end), which appends. Returns the
    /// position of the inserted element, valid until the next mutation.
    pub fn insert_at(&self, position: Position, value: T) -> ContainerResult<Position> {
        let mut access = self.inner.lock();
        let index = access.resolve(position, Operation::InsertAt)?;
        let len = access.len();
        if index > len {
            return access.reject(ContainerError::OutOfRange {
                operation: Operation::InsertAt,
                index,
                len,
            });
        }

        let list = &mut *access;
        let mut tail = list.split_off(index);
        list.push_back(value);
        list.append(&mut tail);

        trace!(container = access.label(), index, "insert_at");
        Ok(access.position(index))
    }

    /// Remove and return the element at `position`
    pub fn erase_at(&self, position: Position) -> ContainerResult<T> {
        let mut access = self.inner.lock();
        let index = access.resolve(position, Operation::EraseAt)?;
        let len = access.len();
        if index >= len {
            return access.reject(ContainerError::OutOfRange {
                operation: Operation::EraseAt,
                index,
                len,
            });
        }

        let list = &mut *access;
        let mut tail = list.split_off(index);
        let removed = tail.pop_front();
        list.append(&mut tail);

        trace!(container = access.label(), index, "erase_at");
        // index < len guarantees the split tail is non-empty
        removed.ok_or(ContainerError::OutOfRange {
            operation: Operation::EraseAt,
            index,
            len,
        })
    }

    /// Remove every element matching `predicate`, returning how many went
    pub fn remove_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.with_mut(|list| {
            let before = list.len();
            let kept: LinkedList<T> = std::mem::take(list)
                .into_iter()
                .filter(|value| !predicate(value))
                .collect();
            *list = kept;
            before - list.len()
        })
    }

    /// Visit every element from front to back while the lock is held
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.inner.with(|list| list.iter().for_each(f));
    }
}

impl<T: Clone> SyncList<T> {
    /// Copy of the first element
    pub fn front(&self) -> ContainerResult<T> {
        self.front_with(T::clone)
    }

    /// Copy of the last element
    pub fn back(&self) -> ContainerResult<T> {
        self.back_with(T::clone)
    }

    /// Copy of the element at `position`
    pub fn get(&self, position: Position) -> ContainerResult<T> {
        self.get_with(position, T::clone)
    }

    /// Front-to-back copy of the contents
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.with(|list| list.iter().cloned().collect())
    }

    /// Front-to-back traversal over a snapshot taken under the lock
    pub fn iter(&self) -> linked_list::IntoIter<T> {
        self.inner.snapshot().into_iter()
    }
}

impl<T> Synchronized for SyncList<T> {
    type Backing = LinkedList<T>;

    fn guarded(&self) -> &Guarded<LinkedList<T>> {
        &self.inner
    }
}

impl<T> Default for SyncList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for SyncList<T> {
    fn from(list: LinkedList<T>) -> Self {
        Self {
            inner: Guarded::labeled(list, "list"),
        }
    }
}

impl<T> FromIterator<T> for SyncList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<LinkedList<T>>())
    }
}
