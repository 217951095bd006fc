//! Task record and field selectors.

use std::fmt;

/// A scheduling task.
///
/// Fields are private so a task cannot change after construction; the
/// ordering policies rely on repeated comparisons giving the same answer.
///
/// `idx` is expected to be unique among all tasks compared together. Use
/// [`TaskSequence`](super::TaskSequence) to allocate it.
///
/// # Examples
///
/// ```
/// use u_taskorder::task::Task;
///
/// let task = Task::new(2, 5, 7);
/// assert_eq!(task.ptime(), 5);
/// assert_eq!(task.render(), "2, 5, 7\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    start: i64,
    ptime: i64,
    idx: u64,
}

impl Task {
    /// Creates a task from its start time, processing time and identifier.
    pub fn new(start: i64, ptime: i64, idx: u64) -> Self {
        Self { start, ptime, idx }
    }

    /// Scheduling start time.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Processing duration.
    pub fn ptime(&self) -> i64 {
        self.ptime
    }

    /// Unique tie-breaking identifier.
    pub fn idx(&self) -> u64 {
        self.idx
    }

    /// Renders the task as a newline-terminated `"<start>, <ptime>, <idx>"` line.
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.start, self.ptime, self.idx)
    }
}

/// One of the three fields of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskField {
    /// [`Task::start`].
    Start,
    /// [`Task::ptime`].
    Ptime,
    /// [`Task::idx`].
    Idx,
}

impl TaskField {
    /// Reads this field from `task`, widened to `i128` so every field shares
    /// one comparable type.
    pub fn read(self, task: &Task) -> i128 {
        match self {
            TaskField::Start => i128::from(task.start),
            TaskField::Ptime => i128::from(task.ptime),
            TaskField::Idx => i128::from(task.idx),
        }
    }

    /// Field name as written in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskField::Start => "start",
            TaskField::Ptime => "ptime",
            TaskField::Idx => "idx",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
