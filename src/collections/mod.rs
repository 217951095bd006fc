//! Containers and routines that take a comparator.
//!
//! - [`PriorityQueue`]: Binary heap; `pop` returns the element that
//!   precedes every other one
//! - [`OrderedSet`]: Sorted set; the comparator defines both order and
//!   uniqueness
//! - [`sort_with`] / [`is_sorted_with`]: Stable in-place sorting
//!   (plus `par_sort_with` with the `parallel` feature)
//!
//! Each consumer trusts its comparator. A comparator that is not a strict
//! weak ordering does not cause undefined behaviour, but pop order,
//! duplicate detection and sort results become meaningless.

mod queue;
mod set;
mod sort;

pub use queue::{DrainOrdered, PriorityQueue};
pub use set::OrderedSet;
#[cfg(feature = "parallel")]
pub use sort::par_sort_with;
pub use sort::{is_sorted_with, sort_with};
