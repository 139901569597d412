//! Error type shared by the fallible container operations.

use thiserror::Error;

/// Errors returned by container operations that reject their input.
///
/// A rejected operation never mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The container is at its fixed capacity.
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Capacity the container was constructed with.
        capacity: usize,
    },

    /// `find_min` or `delete_min` on a queue with no elements.
    #[error("queue is empty")]
    EmptyQueue,

    /// Positional access past the end of a list.
    #[error("position {position} out of range for length {len}")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}

/// Result alias for container operations.
pub type Result<T> = core::result::Result<T, Error>;
