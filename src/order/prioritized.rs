//! `LongestFirst` baked into `Ord`, for use with std collections.

use crate::task::Task;
use std::cmp::Ordering;

/// A task whose [`Ord`] implementation follows [`LongestFirst`](super::LongestFirst).
///
/// `std::collections::BinaryHeap` pops its greatest element, so the
/// ordering here is the reverse of the precedence relation: the task that
/// `LongestFirst` puts first is the greatest `Prioritized` value. Popping a
/// `BinaryHeap<Prioritized>` therefore yields the same sequence as
/// [`PriorityQueue`](crate::collections::PriorityQueue) with `LongestFirst`.
///
/// Equality compares `ptime` and `idx` only, matching the ordering.
///
/// # Examples
///
/// ```
/// use std::collections::BinaryHeap;
/// use u_taskorder::order::Prioritized;
/// use u_taskorder::task::Task;
///
/// let mut heap: BinaryHeap<Prioritized> = [
///     Task::new(0, 3, 2),
///     Task::new(0, 5, 0),
///     Task::new(0, 5, 1),
/// ]
/// .into_iter()
/// .map(Prioritized)
/// .collect();
///
/// assert_eq!(heap.pop().map(|p| p.0.idx()), Some(1));
/// assert_eq!(heap.pop().map(|p| p.0.idx()), Some(0));
/// assert_eq!(heap.pop().map(|p| p.0.idx()), Some(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Prioritized(pub Task);

impl Prioritized {
    /// Unwraps the task.
    pub fn into_inner(self) -> Task {
        self.0
    }
}

impl From<Task> for Prioritized {
    fn from(task: Task) -> Self {
        Self(task)
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .ptime()
            .cmp(&other.0.ptime())
            .then_with(|| self.0.idx().cmp(&other.0.idx()))
    }
}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Prioritized {}
