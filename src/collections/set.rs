//! Ordered set keyed by a comparator.

use crate::order::Comparator;
use std::fmt;

/// A set kept in ascending comparator order.
///
/// The comparator decides both the iteration order and uniqueness: two
/// elements for which neither precedes the other are the same element as
/// far as the set is concerned. Under
/// [`EarliestStart`](crate::order::EarliestStart), tasks with equal start
/// and equal ptime collide even when their idx differs.
///
/// Backed by a sorted vector; lookups are O(log n), inserts and removals
/// O(n).
///
/// # Examples
///
/// ```
/// use u_taskorder::collections::OrderedSet;
/// use u_taskorder::order::EarliestStart;
/// use u_taskorder::task::Task;
///
/// let mut set = OrderedSet::new(EarliestStart);
/// assert!(set.insert(Task::new(1, 5, 0)));
/// assert!(!set.insert(Task::new(1, 5, 1)));
/// assert!(set.insert(Task::new(0, 9, 2)));
///
/// let idx: Vec<u64> = set.iter().map(|t| t.idx()).collect();
/// assert_eq!(idx, vec![2, 0]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Creates an empty set.
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    fn search(&self, item: &T) -> Result<usize, usize> {
        self.data
            .binary_search_by(|probe| self.cmp.compare(probe, item))
    }

    /// Inserts `item`.
    ///
    /// Returns `false` and drops `item` if an equal element is already
    /// present; the stored element is left untouched.
    pub fn insert(&mut self, item: T) -> bool {
        match self.search(&item) {
            Ok(_) => {
                log::trace!("{} rejected a duplicate element", self.cmp.name());
                false
            }
            Err(pos) => {
                self.data.insert(pos, item);
                true
            }
        }
    }

    /// Returns `true` if an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    /// Returns the stored element equal to `item`.
    pub fn get(&self, item: &T) -> Option<&T> {
        self.search(item).ok().map(|pos| &self.data[pos])
    }

    /// Removes and returns the stored element equal to `item`.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.search(item).ok().map(|pos| self.data.remove(pos))
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.remove(0))
        }
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Elements in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The comparator this set was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}
