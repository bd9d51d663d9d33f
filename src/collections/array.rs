/*!
 * Synchronized Array
 * Contiguous, index-addressable sequence with amortized O(1) append
 */

use crate::core::{
    ContainerConfig, ContainerError, ContainerResult, Guarded, Operation, Synchronized,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Growable array shared between threads
///
/// [`at`](Self::at) is the bounds-checked accessor and reports
/// [`ContainerError::OutOfRange`]; [`front`](Self::front) and
/// [`back`](Self::back) report [`ContainerError::Empty`].
///
/// # Example
///
/// ```
/// use sync_containers::prelude::*;
///
/// let array = SyncArray::new();
/// array.push_back(10);
/// array.push_back(20);
/// assert_eq!(array.at(1), Ok(20));
/// assert!(array.at(2).unwrap_err().is_out_of_range());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncArray<T> {
    inner: Guarded<Vec<T>>,
}

impl<T> SyncArray<T> {
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::named("array"))
    }

    /// Create an array, reserving `config.initial_capacity` slots
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            inner: Guarded::with_config(Vec::with_capacity(config.initial_capacity), &config),
        }
    }

    pub fn push_back(&self, value: T) {
        let len = self.inner.with_mut(|array| {
            array.push(value);
            array.len()
        });
        trace!(container = self.inner.label(), len, "push_back");
    }

    /// Alias of [`push_back`](Self::push_back)
    #[inline]
    pub fn emplace_back(&self, value: T) {
        self.push_back(value)
    }

    /// Remove the last element, `None` when empty
    pub fn pop_back(&self) -> Option<T> {
        self.inner.with_mut(Vec::pop)
    }

    /// Run `f` against the element at `index` while the lock is held
    pub fn at_with<F, R>(&self, index: usize, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        match access.get(index) {
            Some(value) => Ok(f(value)),
            None => access.reject(ContainerError::OutOfRange {
                operation: Operation::At,
                index,
                len: access.len(),
            }),
        }
    }

    /// Run `f` against the element at `index` mutably while the lock is held
    pub fn update_at<F, R>(&self, index: usize, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut access = self.inner.lock();
        let len = access.len();
        if index >= len {
            return access.reject(ContainerError::OutOfRange {
                operation: Operation::UpdateAt,
                index,
                len,
            });
        }
        Ok(f(&mut access[index]))
    }

    /// Run `f` against the first element while the lock is held
    pub fn front_with<F, R>(&self, f: F) -> ContainerResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let access = self.inner.lock();
        match access.first() {
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
        match access.last() {
            Some(back) => Ok(f(back)),
            None => access.reject(ContainerError::Empty {
                operation: Operation::Back,
            }),
        }
    }

    /// Insert `value` at `index`, shifting later elements right
    ///
    /// `index == len()` appends.
    pub fn insert_at(&self, index: usize, value: T) -> ContainerResult<()> {
        let mut access = self.inner.lock();
        let len = access.len();
        if index > len {
            return access.reject(ContainerError::OutOfRange {
                operation: Operation::InsertAt,
                index,
                len,
            });
        }
        access.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn erase_at(&self, index: usize) -> ContainerResult<T> {
        let mut access = self.inner.lock();
        let len = access.len();
        if index >= len {
            return access.reject(ContainerError::OutOfRange {
                operation: Operation::EraseAt,
                index,
                len,
            });
        }
        Ok(access.remove(index))
    }

    /// Reserve room for at least `additional` more elements
    pub fn reserve(&self, additional: usize) {
        let capacity = self.inner.with_mut(|array| {
            array.reserve(additional);
            array.capacity()
        });
        debug!(container = self.inner.label(), additional, capacity, "Reserved capacity");
    }

    pub fn capacity(&self) -> usize {
        self.inner.with(Vec::capacity)
    }

    /// Visit every element from start to end while the lock is held
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.inner.with(|array| array.iter().for_each(f));
    }
}

impl<T: Clone> SyncArray<T> {
    /// Copy of the element at `index`
    pub fn at(&self, index: usize) -> ContainerResult<T> {
        self.at_with(index, T::clone)
    }

    /// Copy of the first element
    pub fn front(&self) -> ContainerResult<T> {
        self.front_with(T::clone)
    }

    /// Copy of the last element
    pub fn back(&self) -> ContainerResult<T> {
        self.back_with(T::clone)
    }

    /// Start-to-end traversal over a snapshot taken under the lock
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.inner.snapshot().into_iter()
    }
}

impl<T> Synchronized for SyncArray<T> {
    type Backing = Vec<T>;

    fn guarded(&self) -> &Guarded<Vec<T>> {
        &self.inner
    }
}

impl<T> Default for SyncArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SyncArray<T> {
    fn from(array: Vec<T>) -> Self {
        Self {
            inner: Guarded::labeled(array, "array"),
        }
    }
}

impl<T> FromIterator<T> for SyncArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
