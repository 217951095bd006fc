//! Configurable multi-key task ordering.

use super::types::Comparator;
use crate::error::{OrderError, OrderResult};
use crate::task::{Task, TaskField};
use std::cmp::Ordering;

/// Sort direction for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Smaller field values first.
    #[default]
    Ascending,
    /// Larger field values first.
    Descending,
}

/// A task field paired with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    /// Field to read.
    pub field: TaskField,
    /// Direction to order it in.
    pub direction: Direction,
}

impl SortKey {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ord = self.field.read(a).cmp(&self.field.read(b));
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// A lexicographic ordering over task fields.
///
/// Keys are evaluated in order. A later key is only consulted when every
/// earlier key ties, so the first key is the primary key and the rest act
/// as tie-breakers. Tasks that tie on every key compare equal.
///
/// # Examples
///
/// ```
/// use u_taskorder::order::{Comparator, Direction, KeyOrder, LongestFirst};
/// use u_taskorder::task::{Task, TaskField};
///
/// let order = KeyOrder::new()
///     .then(TaskField::Ptime, Direction::Descending)
///     .then(TaskField::Idx, Direction::Descending);
/// assert!(order.validate().is_ok());
/// assert_eq!(order, KeyOrder::longest_first());
///
/// let a = Task::new(0, 5, 0);
/// let b = Task::new(0, 5, 1);
/// assert_eq!(order.precedes(&b, &a), LongestFirst.precedes(&b, &a));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyOrder {
    keys: Vec<SortKey>,
}

impl KeyOrder {
    /// Creates an empty key order. Add keys with [`then`](Self::then).
    pub fn new() -> Self {
        Self::default()
    }

    /// Same order as [`LongestFirst`](super::LongestFirst): ptime descending,
    /// then idx descending.
    pub fn longest_first() -> Self {
        Self::new()
            .then(TaskField::Ptime, Direction::Descending)
            .then(TaskField::Idx, Direction::Descending)
    }

    /// Same order as [`EarliestStart`](super::EarliestStart): start
    /// ascending, then ptime ascending.
    pub fn earliest_start() -> Self {
        Self::new()
            .then(TaskField::Start, Direction::Ascending)
            .then(TaskField::Ptime, Direction::Ascending)
    }

    /// Appends a key.
    pub fn then(mut self, field: TaskField, direction: Direction) -> Self {
        self.keys.push(SortKey { field, direction });
        self
    }

    /// Appends an ascending key.
    pub fn then_ascending(self, field: TaskField) -> Self {
        self.then(field, Direction::Ascending)
    }

    /// Appends a descending key.
    pub fn then_descending(self, field: TaskField) -> Self {
        self.then(field, Direction::Descending)
    }

    /// Returns the keys in evaluation order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if `idx` is one of the keys.
    ///
    /// With unique idx values such an order never reports two distinct tasks
    /// as equal.
    pub fn is_total(&self) -> bool {
        self.keys.iter().any(|k| k.field == TaskField::Idx)
    }

    /// Validates the key list.
    ///
    /// Returns an error if no key is configured or a field is listed twice
    /// (the second occurrence could never be reached).
    pub fn validate(&self) -> OrderResult<()> {
        if self.keys.is_empty() {
            return Err(OrderError::EmptyKeyOrder);
        }
        for (i, key) in self.keys.iter().enumerate() {
            if self.keys[..i].iter().any(|k| k.field == key.field) {
                return Err(OrderError::DuplicateKey(key.field));
            }
        }
        log::debug!(
            "key order validated: {}",
            self.keys
                .iter()
                .map(|k| format!("{} {:?}", k.field, k.direction))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }
}

impl Comparator<Task> for KeyOrder {
    fn precedes(&self, a: &Task, b: &Task) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        for key in &self.keys {
            let ord = key.compare(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    fn name(&self) -> &str {
        "KeyOrder"
    }
}
