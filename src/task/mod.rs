//! The scheduling record ordered by this crate.
//!
//! A [`Task`] carries three integers: a start time, a processing time
//! (`ptime`) and a unique identifier (`idx`) reflecting construction order.
//! Tasks are plain values: once built they are never mutated, and every
//! ordering policy reads them through shared references only.
//!
//! # Key Types
//!
//! - [`Task`]: The immutable record
//! - [`TaskField`]: Names one of the three fields, used by key orders
//! - [`TaskSequence`]: Hands out unique `idx` values in construction order
//!
//! # Rendering
//!
//! [`render_tasks`] and [`write_tasks`] emit one `"<start>, <ptime>, <idx>"`
//! line per task.

mod render;
mod sequence;
mod types;

pub use render::{render_tasks, write_tasks};
pub use sequence::TaskSequence;
pub use types::{Task, TaskField};
