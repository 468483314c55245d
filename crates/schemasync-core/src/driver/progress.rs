/// Progress reporting and cooperative cancellation for long catalog reads.
///
/// Engines check [`is_canceled`](Self::is_canceled) once per top-level loop
/// iteration (per table, per procedure) and never in the middle of a query.
pub trait ProgressMonitor: Send {
    /// Starts a task. `total` is `None` when the amount of work is unknown.
    fn begin_task(&mut self, name: &str, total: Option<usize>);

    fn set_task_name(&mut self, name: &str);

    /// Reports `amount` more units of work as done.
    fn worked(&mut self, amount: usize);

    /// Finishes the current task.
    fn done(&mut self);

    fn is_canceled(&self) -> bool;
}

/// A monitor that ignores progress and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressMonitor for NoProgress {
    fn begin_task(&mut self, _name: &str, _total: Option<usize>) {}

    fn set_task_name(&mut self, _name: &str) {}

    fn worked(&mut self, _amount: usize) {}

    fn done(&mut self) {}

    fn is_canceled(&self) -> bool {
        false
    }
}
