//! Strict-weak-ordering law checks.
//!
//! These run in O(n³) over a sample and are meant for test code. Consumers
//! never call them; a comparator that breaks a law is a caller bug.

use super::types::Comparator;
use crate::error::{OrderError, OrderResult};
use std::fmt;

/// A law a comparator must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Law {
    /// `!(a < a)`.
    Irreflexivity,
    /// `a < b` implies `!(b < a)`.
    Asymmetry,
    /// `a < b` and `b < c` imply `a < c`.
    Transitivity,
    /// `a ~ b` and `b ~ c` imply `a ~ c`, where `~` means neither precedes.
    IncomparabilityTransitivity,
    /// Distinct elements are always comparable.
    Totality,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Law::Irreflexivity => "irreflexivity",
            Law::Asymmetry => "asymmetry",
            Law::Transitivity => "transitivity",
            Law::IncomparabilityTransitivity => "transitivity of incomparability",
            Law::Totality => "totality",
        })
    }
}

fn violation(comparator: &str, law: Law, indices: Vec<usize>) -> OrderError {
    log::debug!(
        "comparator {} broke {} at sample indices {:?}",
        comparator,
        law,
        indices
    );
    OrderError::ContractViolation {
        law,
        indices,
        comparator: comparator.to_string(),
    }
}

/// Checks the strict-weak-ordering laws over every pair and triple drawn
/// from `sample`.
///
/// Returns the first violation found.
///
/// # Examples
///
/// ```
/// use u_taskorder::order::{check_strict_weak_order, EarliestStart, Law};
/// use u_taskorder::task::Task;
/// use u_taskorder::OrderError;
///
/// let tasks = [Task::new(1, 5, 0), Task::new(1, 3, 1), Task::new(2, 9, 2)];
/// assert!(check_strict_weak_order(&EarliestStart, &tasks).is_ok());
///
/// let reflexive = |a: &Task, b: &Task| a.start() <= b.start();
/// let err = check_strict_weak_order(&reflexive, &tasks).unwrap_err();
/// assert!(matches!(err, OrderError::ContractViolation { law: Law::Irreflexivity, .. }));
/// ```
pub fn check_strict_weak_order<T, C>(cmp: &C, sample: &[T]) -> OrderResult<()>
where
    C: Comparator<T> + ?Sized,
{
    let n = sample.len();

    for i in 0..n {
        if cmp.precedes(&sample[i], &sample[i]) {
            return Err(violation(cmp.name(), Law::Irreflexivity, vec![i]));
        }
    }

    // lt[i][j] = sample[i] precedes sample[j]
    let lt: Vec<Vec<bool>> = sample
        .iter()
        .map(|a| sample.iter().map(|b| cmp.precedes(a, b)).collect())
        .collect();

    for i in 0..n {
        for j in 0..n {
            if lt[i][j] && lt[j][i] {
                return Err(violation(cmp.name(), Law::Asymmetry, vec![i, j]));
            }
        }
    }

    let incomparable = |i: usize, j: usize| !lt[i][j] && !lt[j][i];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                if lt[i][j] && lt[j][k] && !lt[i][k] {
                    return Err(violation(cmp.name(), Law::Transitivity, vec![i, j, k]));
                }
                if incomparable(i, j) && incomparable(j, k) && !incomparable(i, k) {
                    return Err(violation(
                        cmp.name(),
                        Law::IncomparabilityTransitivity,
                        vec![i, j, k],
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Like [`check_strict_weak_order`], and additionally requires every pair
/// of elements for which `distinct` holds to be comparable.
pub fn check_total_order<T, C, D>(cmp: &C, sample: &[T], distinct: D) -> OrderResult<()>
where
    C: Comparator<T> + ?Sized,
    D: Fn(&T, &T) -> bool,
{
    check_strict_weak_order(cmp, sample)?;
    for (i, a) in sample.iter().enumerate() {
        for (j, b) in sample.iter().enumerate().skip(i + 1) {
            if distinct(a, b) && !cmp.precedes(a, b) && !cmp.precedes(b, a) {
                return Err(violation(cmp.name(), Law::Totality, vec![i, j]));
            }
        }
    }
    Ok(())
}
