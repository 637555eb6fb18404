use log::{info, warn};

use crate::scheduler::Scheduler;
use crate::utils::TaskError;
use crate::{Event, Schedule, TaskSet, TimeStep};

/// Result of one pass over a task set.
#[derive(Debug)]
pub struct Simulation {
    pub taskset: TaskSet,         // Validated, in priority order; indexes the timeline
    pub rejected: Vec<TaskError>,
    pub schedule: Schedule,
}

impl Simulation {
    /// Events sorted by time, ready for the trace writer.
    pub fn trace(&self) -> Vec<Event> {
        self.schedule.sorted_events()
    }
}

/// Validates, orders by priority and schedules `taskset` over `runtime`.
/// Dropped tasks and skipped instances are logged as warnings and kept in
/// the result; none of them stop the run.
pub fn simulation<S: Scheduler>(scheduler: &S, taskset: TaskSet, runtime: TimeStep) -> Simulation {
    let (mut taskset, rejected) = taskset.validate();
    for e in &rejected {
        warn!("{}", e);
    }

    taskset.sort_by_priority();

    if !taskset.is_empty() {
        let utilisation = taskset.utilisation();
        let hyperperiod = match taskset.hyperperiod() {
            Some(h) => h.to_string(),
            None => "> usize::MAX".to_string(),
        };
        info!(
            "{} tasks, utilisation {:.3}, hyperperiod {}, runtime {} ({})",
            taskset.len(),
            utilisation,
            hyperperiod,
            runtime,
            scheduler.name()
        );
        // Demand over the run is at least runtime * utilisation.
        if utilisation > 1.0 && runtime > 0 {
            warn!("utilisation above 1, some period instances cannot be placed");
        }
    }

    let schedule = scheduler.compute(&taskset, runtime);
    for skipped in schedule.skipped() {
        warn!("{}", skipped);
    }

    Simulation {
        taskset,
        rejected,
        schedule,
    }
}
