//! Core comparator trait and generic adapters.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A strict weak ordering over `T`.
///
/// `precedes(a, b)` answers "does `a` come strictly before `b`". An
/// implementation must be irreflexive, asymmetric and transitive, and the
/// induced incomparability (neither precedes the other) must be transitive
/// too. Consumers do not check this at runtime: a comparator that breaks the
/// laws leaves queues, sets and sorts in an unspecified (but memory-safe)
/// state. Use [`check_strict_weak_order`](super::check_strict_weak_order) in
/// tests.
///
/// Any `Fn(&T, &T) -> bool` is a comparator, so closures and plain
/// functions can be passed wherever a named policy is accepted.
///
/// # Examples
///
/// ```
/// use u_taskorder::order::Comparator;
/// use u_taskorder::task::Task;
///
/// struct ShortestFirst;
///
/// impl Comparator<Task> for ShortestFirst {
///     fn name(&self) -> &str { "ShortestFirst" }
///     fn precedes(&self, a: &Task, b: &Task) -> bool {
///         a.ptime() < b.ptime()
///     }
/// }
///
/// let a = Task::new(0, 1, 0);
/// let b = Task::new(0, 4, 1);
/// assert!(ShortestFirst.precedes(&a, &b));
/// assert!(!ShortestFirst.precedes(&b, &a));
/// ```
pub trait Comparator<T> {
    /// Returns `true` if `a` strictly precedes `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;

    /// Three-way form of [`precedes`](Comparator::precedes).
    ///
    /// `Equal` means neither element precedes the other.
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.precedes(a, b) {
            Ordering::Less
        } else if self.precedes(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns the name of this comparator, used in diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders values by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &str {
        "Natural"
    }
}

/// Flips the arguments of the wrapped comparator.
///
/// If `inner` puts `a` before `b`, `Reversed(inner)` puts `b` before `a`.
/// Elements equal under `inner` stay equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

/// Orders values by a key extracted with `f`, ascending.
///
/// The key type's `Ord` must itself be a total order for the result to be
/// a strict weak ordering; for `f64` keys wrap them first.
pub struct ByKey<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Wraps a key extraction function.
    pub fn new<T>(f: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self {
            f,
            _key: PhantomData,
        }
    }
}

impl<T, F, K> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.f)(a) < (self.f)(b)
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a).cmp(&(self.f)(b))
    }

    fn name(&self) -> &str {
        "ByKey"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn by_start(a: &Task, b: &Task) -> bool {
        a.start() < b.start()
    }

    #[test]
    fn test_closure_comparator() {
        let cmp = |a: &Task, b: &Task| a.ptime() < b.ptime();
        let a = Task::new(0, 1, 0);
        let b = Task::new(0, 2, 1);
        assert!(cmp.precedes(&a, &b));
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
        assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
        assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
        assert_eq!(Comparator::<Task>::name(&cmp), "custom");
    }

    #[test]
    fn test_fn_pointer_comparator() {
        let f: fn(&Task, &Task) -> bool = by_start;
        let a = Task::new(1, 9, 0);
        let b = Task::new(2, 1, 1);
        assert!(f.precedes(&a, &b));
        assert!(by_start.precedes(&a, &b));
    }

    #[test]
    fn test_natural() {
        assert!(Natural.precedes(&1, &2));
        assert_eq!(Natural.compare(&3, &3), Ordering::Equal);
        assert_eq!(Comparator::<i32>::name(&Natural), "Natural");
    }

    #[test]
    fn test_reversed() {
        let rev = Reversed(Natural);
        assert!(rev.precedes(&2, &1));
        assert!(!rev.precedes(&1, &2));
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&5, &5), Ordering::Equal);
    }

    #[test]
    fn test_by_key() {
        let cmp = ByKey::new(|t: &Task| (t.start(), t.idx()));
        let a = Task::new(1, 100, 3);
        let b = Task::new(1, 0, 4);
        assert!(cmp.precedes(&a, &b));
        assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
    }
}
