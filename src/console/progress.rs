//! Textual progress bar over the task list

use crate::task::Task;

/// Done-versus-total percentage, truncated. An empty list is 0% by
/// definition, never a division by zero.
pub fn progress_percentage(done: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        done * 100 / total
    }
}

/// Render the bar plus the percentage, e.g.
/// `Task progressive: /////////_________________________________(16%)`
pub fn render(tasks: &[Task]) -> String {
    let done = tasks.iter().filter(|t| t.done).count();
    let percentage = progress_percentage(done, tasks.len());

    let mut bar = "/".repeat(percentage / 2);
    bar.push_str(&"_".repeat((100 - percentage) / 2));

    format!("Task progressive: {}({}%)", bar, percentage)
}
