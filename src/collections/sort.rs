//! Sorting slices with a comparator.

use crate::order::Comparator;

/// Sorts `items` in place so that no element precedes the one before it.
///
/// The sort is stable: elements the comparator considers equal keep their
/// relative order.
///
/// # Examples
///
/// ```
/// use u_taskorder::collections::sort_with;
/// use u_taskorder::order::EarliestStart;
/// use u_taskorder::task::Task;
///
/// let mut tasks = vec![Task::new(2, 9, 0), Task::new(1, 5, 1), Task::new(1, 3, 2)];
/// sort_with(&mut tasks, &EarliestStart);
///
/// let keys: Vec<(i64, i64)> = tasks.iter().map(|t| (t.start(), t.ptime())).collect();
/// assert_eq!(keys, vec![(1, 3), (1, 5), (2, 9)]);
/// ```
pub fn sort_with<T, C>(items: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    items.sort_by(|a, b| cmp.compare(a, b));
}

/// Returns `true` if `items` is already in non-decreasing order under `cmp`.
pub fn is_sorted_with<T, C>(items: &[T], cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    items.windows(2).all(|w| !cmp.precedes(&w[1], &w[0]))
}

/// Parallel, stable version of [`sort_with`].
#[cfg(feature = "parallel")]
pub fn par_sort_with<T, C>(items: &mut [T], cmp: &C)
where
    T: Send,
    C: Comparator<T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    items.par_sort_by(|a, b| cmp.compare(a, b));
}
