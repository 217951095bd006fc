//! Binary-heap priority queue parameterised by a comparator.

use crate::error::{OrderError, OrderResult};
use crate::order::Comparator;
use std::fmt;

/// A priority queue that hands out the element preceding all others.
///
/// The comparator is fixed when the queue is built. With
/// [`LongestFirst`](crate::order::LongestFirst) the queue yields the longest
/// task first, ties going to the larger idx.
///
/// # Examples
///
/// ```
/// use u_taskorder::collections::PriorityQueue;
/// use u_taskorder::order::LongestFirst;
/// use u_taskorder::task::Task;
///
/// let mut queue = PriorityQueue::new(LongestFirst);
/// queue.push(Task::new(0, 5, 0));
/// queue.push(Task::new(0, 3, 2));
/// queue.push(Task::new(0, 5, 1));
///
/// assert_eq!(queue.pop().map(|t| t.idx()), Some(1));
/// assert_eq!(queue.pop().map(|t| t.idx()), Some(0));
/// assert_eq!(queue.pop().map(|t| t.idx()), Some(2));
/// assert!(queue.pop().is_none());
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue.
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a queue from existing elements in O(n).
    pub fn from_vec(items: Vec<T>, cmp: C) -> Self {
        let mut queue = Self { data: items, cmp };
        let n = queue.data.len();
        for pos in (0..n / 2).rev() {
            queue.sift_down(pos);
        }
        log::debug!("heapified {} elements under {}", n, queue.cmp.name());
        queue
    }

    /// Adds an element.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-priority element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Returns the highest-priority element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Like [`pop`](Self::pop), but an empty queue is an error.
    pub fn try_pop(&mut self) -> OrderResult<T> {
        self.pop().ok_or(OrderError::EmptyQueue)
    }

    /// Like [`peek`](Self::peek), but an empty queue is an error.
    pub fn try_peek(&self) -> OrderResult<&T> {
        self.peek().ok_or(OrderError::EmptyQueue)
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The comparator this queue was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes elements one by one in priority order.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, C> {
        DrainOrdered { queue: self }
    }

    /// Consumes the queue, returning its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.cmp.precedes(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < n && self.cmp.precedes(&self.data[right], &self.data[left]) {
                child = right;
            }
            if !self.cmp.precedes(&self.data[child], &self.data[pos]) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("top", &self.data.first())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`PriorityQueue::drain_ordered`].
pub struct DrainOrdered<'a, T, C> {
    queue: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainOrdered<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainOrdered<'_, T, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{LongestFirst, Reversed};
    use crate::task::{Task, TaskSequence};
    use proptest::prelude::*;

    fn setup() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::max())
            .is_test(true)
            .try_init();
    }

    fn ptime_idx(t: Task) -> (i64, u64) {
        (t.ptime(), t.idx())
    }

    fn triple() -> [Task; 3] {
        [Task::new(0, 5, 0), Task::new(0, 5, 1), Task::new(0, 3, 2)]
    }

    #[test]
    fn test_extraction_order_any_push_order() {
        let perms = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for perm in perms {
            let tasks = triple();
            let mut queue = PriorityQueue::new(LongestFirst);
            for i in perm {
                queue.push(tasks[i]);
            }
            let popped: Vec<(i64, u64)> = queue.drain_ordered().map(ptime_idx).collect();
            assert_eq!(popped, vec![(5, 1), (5, 0), (3, 2)], "push order {perm:?}");
        }
    }

    #[test]
    fn test_from_vec() {
        setup();
        let queue = PriorityQueue::from_vec(triple().to_vec(), LongestFirst);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(|t| t.idx()), Some(1));
        let sorted: Vec<(i64, u64)> = queue.into_sorted_vec().into_iter().map(ptime_idx).collect();
        assert_eq!(sorted, vec![(5, 1), (5, 0), (3, 2)]);
    }

    #[test]
    fn test_from_empty_vec() {
        setup();
        let mut queue = PriorityQueue::from_vec(Vec::<Task>::new(), LongestFirst);
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_empty_access_is_error() {
        let mut queue = PriorityQueue::<Task, _>::new(LongestFirst);
        assert_eq!(queue.try_peek(), Err(OrderError::EmptyQueue));
        assert_eq!(queue.try_pop(), Err(OrderError::EmptyQueue));

        queue.push(Task::new(0, 1, 0));
        assert_eq!(queue.try_peek().map(|t| t.idx()), Ok(0));
        assert_eq!(queue.try_pop().map(|t| t.idx()), Ok(0));
        assert_eq!(queue.try_pop(), Err(OrderError::EmptyQueue));
    }

    #[test]
    fn test_reversed_gives_shortest_first() {
        let mut queue = PriorityQueue::new(Reversed(LongestFirst));
        queue.extend(triple());
        let popped: Vec<(i64, u64)> = queue.drain_ordered().map(ptime_idx).collect();
        assert_eq!(popped, vec![(3, 2), (5, 0), (5, 1)]);
    }

    #[test]
    fn test_closure_comparator() {
        let mut queue = PriorityQueue::new(|a: &Task, b: &Task| a.start() > b.start());
        let mut seq = TaskSequence::new();
        queue.extend(seq.tasks([(4, 1), (9, 1), (1, 1)]));
        assert_eq!(queue.pop().map(|t| t.start()), Some(9));
        assert_eq!(queue.pop().map(|t| t.start()), Some(4));
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut queue = PriorityQueue::with_capacity(4, LongestFirst);
        queue.push(Task::new(0, 2, 0));
        queue.push(Task::new(0, 7, 1));
        assert_eq!(queue.pop().map(|t| t.idx()), Some(1));
        queue.push(Task::new(0, 4, 2));
        queue.push(Task::new(0, 1, 3));
        assert_eq!(queue.pop().map(|t| t.idx()), Some(2));
        assert_eq!(queue.pop().map(|t| t.idx()), Some(0));
        assert_eq!(queue.pop().map(|t| t.idx()), Some(3));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_debug() {
        let mut queue = PriorityQueue::new(LongestFirst);
        queue.push(Task::new(0, 1, 0));
        let s = format!("{queue:?}");
        assert!(s.starts_with("PriorityQueue { len: 1"));
    }

    proptest! {
        #[test]
        fn prop_pop_order_matches_sort(pairs in prop::collection::vec((0i64..5, 0i64..5), 0..40)) {
            let tasks = TaskSequence::new().tasks(pairs);

            let mut expected = tasks.clone();
            expected.sort_by(|a, b| LongestFirst.compare(a, b));

            let mut pushed = PriorityQueue::new(LongestFirst);
            pushed.extend(tasks.iter().copied());
            prop_assert_eq!(pushed.into_sorted_vec(), expected.clone());

            let heapified = PriorityQueue::from_vec(tasks, LongestFirst);
            prop_assert_eq!(heapified.into_sorted_vec(), expected);
        }
    }
}
