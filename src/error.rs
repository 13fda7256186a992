//! Errors returned when an element cannot be inserted.

use thiserror::Error;

/// Why an insert was refused. In every case the queue is left exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("allocation failed for {what}")]
    AllocationFailed { what: &'static str },

    #[error("queue is full ({limit} elements)")]
    CapacityExceeded { limit: usize },
}

/// Result type for queue operations that can fail.
pub type Result<T> = std::result::Result<T, QueueError>;
