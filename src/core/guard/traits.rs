/*!
 * Guard Traits
 *
 * Core abstractions shared by every synchronized container
 */

use super::Guarded;
use std::collections::{BTreeMap, LinkedList, VecDeque};

/// Backing storage shape a [`Guarded`] container can wrap
///
/// Only the operations that are identical across shapes live here; shape
/// specific operations stay on the typed facades.
pub trait Backing {
    /// Number of elements held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element
    fn clear(&mut self);
}

impl<T> Backing for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> Backing for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> Backing for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

impl<K, V> Backing for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}

/// Operations every synchronized container supports
///
/// Implementors only expose their [`Guarded`] core; the provided methods
/// each run as one critical section.
pub trait Synchronized {
    type Backing: Backing;

    /// The guarded core of this container
    fn guarded(&self) -> &Guarded<Self::Backing>;

    fn len(&self) -> usize {
        self.guarded().len()
    }

    fn is_empty(&self) -> bool {
        self.guarded().is_empty()
    }

    /// Remove every element, returning how many were dropped
    fn clear(&self) -> usize {
        self.guarded().clear()
    }

    /// Tracing label of this instance
    fn label(&self) -> &'static str {
        self.guarded().label()
    }

    /// Run `f` against the backing storage while the lock is held
    ///
    /// `f` must not call back into the same container.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Self::Backing) -> R,
    {
        self.guarded().with(f)
    }

    /// Run `f` against the mutable backing storage while the lock is held
    ///
    /// `f` must not call back into the same container.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Self::Backing) -> R,
    {
        self.guarded().with_mut(f)
    }

    /// Owned copy of the whole contents
    fn snapshot(&self) -> Self::Backing
    where
        Self::Backing: Clone,
    {
        self.guarded().snapshot()
    }
}
