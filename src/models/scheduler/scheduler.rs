use crate::{Schedule, TaskSet, TimeStep};

/// Builds a static trace for a task set over `runtime` time units.
pub trait Scheduler {
    fn name(&self) -> &'static str;

    /// `taskset` must already be validated and in precedence order.
    fn compute(&self, taskset: &TaskSet, runtime: TimeStep) -> Schedule;
}
