//! Pluggable ordering policies for scheduling tasks.
//!
//! A [`Task`](task::Task) is a small immutable record (start time,
//! processing time, unique idx). This crate provides several ways to say
//! how two tasks are ordered, and the consumers that use those orders:
//!
//! - **Ordering policies** ([`order`]): the [`Comparator`](order::Comparator)
//!   trait, the named rules [`LongestFirst`](order::LongestFirst) and
//!   [`EarliestStart`](order::EarliestStart), configurable
//!   [`KeyOrder`](order::KeyOrder)s, closures and plain functions.
//! - **Consumers** ([`collections`]): a priority queue, an ordered set and
//!   stable sorting, each taking the policy at construction or call time.
//! - **Rendering** ([`task`]): one `"<start>, <ptime>, <idx>"` line per task.
//!
//! # Architecture
//!
//! Policies are stateless values chosen where a container is built. The
//! same tasks can sit in a queue ordered one way and a set ordered another;
//! no ordering is hard-wired into `Task`.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Task` and key orders.
//! - `parallel`: rayon-backed `par_sort_with`.

pub mod collections;
mod error;
pub mod order;
pub mod task;

pub use error::{OrderError, OrderResult};
