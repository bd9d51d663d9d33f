/*!
 * Error Types
 * Centralized container error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Operation that raised a precondition violation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Front,
    Back,
    Peek,
    At,
    UpdateAt,
    InsertAt,
    EraseAt,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Front => "front",
            Operation::Back => "back",
            Operation::Peek => "peek",
            Operation::At => "at",
            Operation::UpdateAt => "update_at",
            Operation::InsertAt => "insert_at",
            Operation::EraseAt => "erase_at",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precondition violations reported by the synchronized containers
///
/// Benign absence (popping an empty queue, erasing a missing key) is never
/// an error: those operations return `Option` or `bool` instead.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ContainerError {
    #[error("{operation} called on an empty container")]
    #[diagnostic(
        code(container::empty),
        help("Check is_empty() first, or use the Option-returning pop variants.")
    )]
    Empty { operation: Operation },

    #[error("{operation}: index {index} out of range for length {len}")]
    #[diagnostic(
        code(container::out_of_range),
        help("Index must be below len() (or equal to it when inserting).")
    )]
    OutOfRange {
        operation: Operation,
        index: usize,
        len: usize,
    },

    #[error("{operation}: position from epoch {position_epoch} is stale (container at epoch {current_epoch})")]
    #[diagnostic(
        code(container::stale_position),
        help("Positions are invalidated by any mutation. Obtain a fresh position and use it immediately.")
    )]
    StalePosition {
        operation: Operation,
        position_epoch: u64,
        current_epoch: u64,
    },
}

impl ContainerError {
    /// Operation that failed
    pub fn operation(&self) -> Operation {
        match self {
            ContainerError::Empty { operation }
            | ContainerError::OutOfRange { operation, .. }
            | ContainerError::StalePosition { operation, .. } => *operation,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ContainerError::OutOfRange { .. })
    }
}
