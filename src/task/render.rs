//! Line-oriented text output for task lists.

use super::types::Task;
use std::io::{self, Write};

/// Renders every task on its own newline-terminated line.
///
/// # Examples
///
/// ```
/// use u_taskorder::task::{render_tasks, Task};
///
/// let out = render_tasks(&[Task::new(1, 3, 2), Task::new(2, 9, 0)]);
/// assert_eq!(out, "1, 3, 2\n2, 9, 0\n");
/// ```
pub fn render_tasks<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().map(Task::render).collect()
}

/// Streams the same bytes as [`render_tasks`] into `out`.
pub fn write_tasks<'a, W, I>(out: &mut W, tasks: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    for task in tasks {
        writeln!(out, "{task}")?;
    }
    Ok(())
}
