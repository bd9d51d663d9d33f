/*!
 * Sync Containers
 * Mutex-guarded list, ordered map, queue, and array adapters that many
 * threads can share without managing their own locks
 */

pub mod collections;
pub mod core;
pub mod monitoring;

// Re-exports
pub use collections::{SyncArray, SyncList, SyncMap, SyncQueue};
pub use crate::core::{
    Backing, ContainerConfig, ContainerError, ContainerResult, Guarded, Operation, Position,
    Synchronized,
};
pub use monitoring::{init_tracing, try_init_tracing};

/// Everything needed to use the containers
pub mod prelude {
    pub use crate::collections::{SyncArray, SyncList, SyncMap, SyncQueue};
    pub use crate::core::{
        ContainerConfig, ContainerError, ContainerResult, Operation, Position, Synchronized,
    };
}
