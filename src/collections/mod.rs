/*!
 * Synchronized Collections
 *
 * Four thread-safe container adapters sharing one guarded core:
 * - **SyncList**: doubly-linked list with epoch-checked positions
 * - **SyncMap**: ordered map, first writer wins
 * - **SyncQueue**: FIFO with non-failing pop and drain-into
 * - **SyncArray**: bounds-checked growable array
 *
 * # Locking
 *
 * Each operation is one critical section on its own instance. Sequences of
 * calls are not atomic: checking `is_empty()` and then calling `front()` can
 * race with another thread. No operation holds two instances' locks at once;
 * callers that add such operations own the lock ordering.
 */

mod array;
mod list;
mod map;
mod queue;

pub use array::SyncArray;
pub use list::SyncList;
pub use map::SyncMap;
pub use queue::SyncQueue;
