//! Allocation of unique task identifiers.

use super::types::Task;

/// Builds tasks with increasing, unique `idx` values.
///
/// The first task receives `first_idx` (0 by default), the next one
/// `first_idx + 1`, and so on. Tasks created by the same sequence therefore
/// always form a total order under any rule that ends with an `idx` key.
///
/// # Examples
///
/// ```
/// use u_taskorder::task::TaskSequence;
///
/// let mut seq = TaskSequence::new();
/// let a = seq.next_task(0, 5);
/// let b = seq.next_task(0, 5);
/// assert_eq!((a.idx(), b.idx()), (0, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskSequence {
    next_idx: u64,
}

impl TaskSequence {
    /// Creates a sequence starting at idx 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence starting at `first_idx`.
    pub fn starting_at(first_idx: u64) -> Self {
        Self {
            next_idx: first_idx,
        }
    }

    /// Builds the next task.
    ///
    /// # Panics
    ///
    /// Panics if the idx space is exhausted, since reusing an idx would
    /// break uniqueness.
    pub fn next_task(&mut self, start: i64, ptime: i64) -> Task {
        let idx = self.next_idx;
        self.next_idx = idx
            .checked_add(1)
            .unwrap_or_else(|| panic!("task idx space exhausted after {idx}"));
        Task::new(start, ptime, idx)
    }

    /// Builds one task per `(start, ptime)` pair, in iteration order.
    pub fn tasks<I>(&mut self, pairs: I) -> Vec<Task>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        pairs
            .into_iter()
            .map(|(start, ptime)| self.next_task(start, ptime))
            .collect()
    }

    /// The idx the next task will receive.
    pub fn peek_idx(&self) -> u64 {
        self.next_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_idx() {
        let mut seq = TaskSequence::new();
        let tasks = seq.tasks([(2, 9), (1, 5), (1, 3)]);
        let idx: Vec<u64> = tasks.iter().map(|t| t.idx()).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(tasks[1], Task::new(1, 5, 1));
        assert_eq!(seq.peek_idx(), 3);
    }

    #[test]
    fn test_starting_at() {
        let mut seq = TaskSequence::starting_at(10);
        assert_eq!(seq.next_task(0, 1).idx(), 10);
        assert_eq!(seq.next_task(0, 1).idx(), 11);
    }

    #[test]
    #[should_panic(expected = "idx space exhausted")]
    fn test_exhausted() {
        let mut seq = TaskSequence::starting_at(u64::MAX);
        seq.next_task(0, 0);
    }
}
