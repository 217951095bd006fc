//! Error types.

use crate::order::Law;
use crate::task::TaskField;
use thiserror::Error;

/// Errors raised by the ordering policies and their consumers.
///
/// Comparisons themselves never fail. Errors only come from empty-container
/// access, invalid key-order configuration, and explicit law checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `pop`/`peek` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A key order was built without any keys.
    #[error("key order must contain at least one key")]
    EmptyKeyOrder,

    /// The same task field appears twice in a key order.
    #[error("task field `{0}` is listed more than once in the key order")]
    DuplicateKey(TaskField),

    /// A comparator broke one of the strict-weak-ordering laws.
    #[error("comparator `{comparator}` violates {law} for sample indices {indices:?}")]
    ContractViolation {
        /// The law that failed.
        law: Law,
        /// Positions in the checked sample that witness the failure.
        indices: Vec<usize>,
        /// Name reported by the comparator.
        comparator: String,
    },
}

/// Convenience alias used throughout the crate.
pub type OrderResult<T> = Result<T, OrderError>;
