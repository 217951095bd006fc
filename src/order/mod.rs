//! Pluggable task ordering policies.
//!
//! Every policy implements [`Comparator`], a strict weak ordering expressed
//! as "does `a` strictly precede `b`". The same trait is satisfied by:
//!
//! - **Named policies**: [`LongestFirst`] and [`EarliestStart`],
//!   unit structs chosen where a container is built.
//! - **Configured policies**: [`KeyOrder`], a lexicographic list of task
//!   fields with a direction per field.
//! - **Closures and functions**: any `Fn(&T, &T) -> bool`, including the
//!   free functions [`longest_first`] and [`earliest_start`].
//! - **Adapters**: [`Natural`], [`Reversed`], [`ByKey`].
//!
//! [`Prioritized`] carries the `LongestFirst` order in its `Ord`
//! implementation instead, so tasks can go straight into std collections.
//!
//! No ordering is fixed on [`Task`](crate::task::Task) itself: a queue and
//! a set over the same tasks routinely need different orders.
//!
//! # Contract
//!
//! A comparator must be irreflexive, asymmetric and transitive, with
//! transitive incomparability, and must answer the same way every time.
//! Nothing checks this at runtime. [`check_strict_weak_order`] and
//! [`check_total_order`] verify a sample in tests.

mod config;
mod laws;
mod prioritized;
mod rules;
mod types;

pub use config::{Direction, KeyOrder, SortKey};
pub use laws::{check_strict_weak_order, check_total_order, Law};
pub use prioritized::Prioritized;
pub use rules::{earliest_start, longest_first, EarliestStart, LongestFirst};
pub use types::{ByKey, Comparator, Natural, Reversed};
