//! The two named task orderings.

use super::types::Comparator;
use crate::task::Task;
use std::cmp::Ordering;

/// Longest processing time first, ties broken by larger `idx` first.
///
/// `a` precedes `b` iff `a.ptime > b.ptime`, or the ptimes are equal and
/// `a.idx > b.idx`. With unique idx values no two distinct tasks compare
/// equal, so this is a total order.
///
/// Used as the priority-queue policy: the queue hands out the longest task
/// first.
///
/// # Examples
///
/// ```
/// use u_taskorder::order::{Comparator, LongestFirst};
/// use u_taskorder::task::Task;
///
/// let long = Task::new(0, 5, 0);
/// let short = Task::new(0, 3, 1);
/// assert!(LongestFirst.precedes(&long, &short));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestFirst;

impl Comparator<Task> for LongestFirst {
    fn precedes(&self, a: &Task, b: &Task) -> bool {
        longest_first(a, b)
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        b.ptime()
            .cmp(&a.ptime())
            .then_with(|| b.idx().cmp(&a.idx()))
    }

    fn name(&self) -> &str {
        "LongestFirst"
    }
}

/// Earliest start first, ties broken by shorter processing time.
///
/// `a` precedes `b` iff `a.start < b.start`, or the starts are equal and
/// `a.ptime < b.ptime`. Two tasks with equal start and equal ptime compare
/// equal regardless of idx, which is what an ordered set under this rule
/// uses to reject duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarliestStart;

impl Comparator<Task> for EarliestStart {
    fn precedes(&self, a: &Task, b: &Task) -> bool {
        earliest_start(a, b)
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.start()
            .cmp(&b.start())
            .then_with(|| a.ptime().cmp(&b.ptime()))
    }

    fn name(&self) -> &str {
        "EarliestStart"
    }
}

/// [`LongestFirst`] as a plain function.
pub fn longest_first(a: &Task, b: &Task) -> bool {
    if a.ptime() != b.ptime() {
        a.ptime() > b.ptime()
    } else {
        a.idx() > b.idx()
    }
}

/// [`EarliestStart`] as a plain function.
pub fn earliest_start(a: &Task, b: &Task) -> bool {
    if a.start() != b.start() {
        a.start() < b.start()
    } else {
        a.ptime() < b.ptime()
    }
}
