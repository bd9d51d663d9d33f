/*!
 * Core Module
 * Guarded-container skeleton, configuration, and error handling
 */

pub mod config;
pub mod errors;
pub mod guard;
pub mod types;

// Re-export for convenience
pub use config::ContainerConfig;
pub use errors::*;
pub use guard::{Access, Backing, Guarded, Synchronized};
pub use types::*;
