/*!
 * Guarded Containers
 *
 * The single synchronization skeleton behind every container in this crate.
 *
 * ## Design Principles
 *
 * 1. **One lock per instance**: every access to the backing storage happens
 *    inside one critical section
 * 2. **Nothing escapes**: reads hand out owned values or run closures under
 *    the lock; no reference survives the unlock
 * 3. **Fresh locks on clone**: only contents are copied, never lock state
 * 4. **Epoch-stamped positions**: any mutation invalidates outstanding
 *    positions so stale ones are rejected instead of misused
 *
 * ## Example
 *
 * ```
 * use sync_containers::core::guard::Guarded;
 *
 * let guarded = Guarded::new(vec![1, 2, 3]);
 * {
 *     let mut access = guarded.lock();
 *     access.push(4);
 * } // lock released here
 * assert_eq!(guarded.len(), 4);
 * ```
 */

mod lock;
mod traits;

pub use lock::{Access, Guarded};
pub use traits::{Backing, Synchronized};
