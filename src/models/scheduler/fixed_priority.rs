use log::{debug, trace};

use super::scheduler::Scheduler;
use crate::utils::InfeasibleInstance;
use crate::{Event, EventMode, Schedule, Task, TaskSet, Timeline, TimeStep};

/// Offline fixed-priority scheduling on a single shared timeline.
///
/// Tasks are taken one at a time in the order of the task set, and each one
/// is placed in every period instance before the next task is looked at. An
/// instance either receives exactly `duration` slots (leftmost free slots of
/// its window) or nothing at all.
pub struct FixedPriority;

impl FixedPriority {
    /// Claims `required` free slots of `[start, end)` for the task at `index`
    /// and returns the start/continue events. The caller has already checked
    /// that the window holds enough free slots.
    fn allocate(
        timeline: &mut Timeline,
        index: usize,
        task: &Task,
        (start, end): (TimeStep, TimeStep),
        required: usize,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        let mut remaining = required;
        let mut started = false;
        let mut interrupted = false;

        for t in start..end {
            if remaining == 0 {
                break;
            }

            if timeline.claim(t, index) {
                if !started {
                    started = true;
                    events.push(Event::new(task.name(), t, EventMode::Start));
                } else if interrupted {
                    interrupted = false;
                    events.push(Event::new(task.name(), t, EventMode::Continue));
                }
                remaining -= 1;
            } else if started {
                // preempted, reported at the next claim
                interrupted = true;
            }
        }

        events
    }
}

impl Scheduler for FixedPriority {
    fn name(&self) -> &'static str {
        "fixed-priority"
    }

    fn compute(&self, taskset: &TaskSet, runtime: TimeStep) -> Schedule {
        let mut timeline = Timeline::new(runtime);
        let mut events = Vec::new();
        let mut skipped = Vec::new();

        for (index, task) in taskset.iter().enumerate() {
            let required = task.duration() as usize;

            for instance in 0..task.instance_count(runtime) {
                let window = task.window(instance, runtime);
                let free = timeline.count_free(window.0, window.1);

                if free < required {
                    debug!(
                        "{}: {} free slots in [{}, {}), needs {}",
                        task.name(),
                        free,
                        window.0,
                        window.1,
                        required
                    );
                    skipped.push(InfeasibleInstance {
                        name: task.name().to_string(),
                        instance,
                    });
                    continue;
                }

                let placed = Self::allocate(&mut timeline, index, task, window, required);
                trace!("{} instance {}: {:?}", task.name(), instance, placed);
                events.extend(placed);
            }
        }

        Schedule::new(timeline, events, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tasks: Vec<Task>, runtime: TimeStep) -> Schedule {
        let mut taskset = TaskSet::new(tasks);
        taskset.sort_by_priority();
        FixedPriority.compute(&taskset, runtime)
    }

    fn timed(schedule: &Schedule) -> Vec<(TimeStep, String, EventMode)> {
        schedule
            .sorted_events()
            .iter()
            .map(|e| (e.time(), e.name().to_string(), e.mode()))
            .collect()
    }

    #[test]
    fn test_preempted_task_continues() {
        let schedule = run(
            vec![Task::new("Q", 4, 1, 2), Task::new("Block", 2, 10, 1)],
            4,
        );

        assert_eq!(
            timed(&schedule),
            vec![
                (0, "Block".to_string(), EventMode::Start),
                (1, "Q".to_string(), EventMode::Start),
                (2, "Block".to_string(), EventMode::Start),
                (3, "Q".to_string(), EventMode::Continue),
            ]
        );
        assert!(schedule.skipped().is_empty());
    }

    #[test]
    fn test_exact_fit_in_each_window() {
        let schedule = run(vec![Task::new("A", 5, 2, 2), Task::new("B", 5, 1, 3)], 10);

        assert_eq!(
            timed(&schedule),
            vec![
                (0, "A".to_string(), EventMode::Start),
                (2, "B".to_string(), EventMode::Start),
                (5, "A".to_string(), EventMode::Start),
                (7, "B".to_string(), EventMode::Start),
            ]
        );
        let owners: Vec<Option<usize>> = schedule.timeline().iter().copied().collect();
        assert_eq!(
            owners,
            vec![Some(0), Some(0), Some(1), Some(1), Some(1), Some(0), Some(0), Some(1), Some(1), Some(1)]
        );
    }

    #[test]
    fn test_overloaded_window_skips_lower_priority_instance() {
        let schedule = run(vec![Task::new("Low", 4, 1, 2), Task::new("High", 4, 5, 3)], 4);

        assert_eq!(timed(&schedule), vec![(0, "High".to_string(), EventMode::Start)]);
        assert_eq!(
            schedule.skipped(),
            &vec![InfeasibleInstance { name: "Low".into(), instance: 0 }]
        );
        assert_eq!(schedule.timeline().count_free(0, 4), 1);
    }

    #[test]
    fn test_skipped_instance_does_not_affect_later_ones() {
        // High fills Low's first window.
        let schedule = run(vec![Task::new("High", 8, 5, 4), Task::new("Low", 4, 1, 1)], 8);

        assert_eq!(
            schedule.skipped(),
            &vec![InfeasibleInstance { name: "Low".into(), instance: 0 }]
        );
        assert_eq!(schedule.timeline().owner(4), Some(1));
    }

    #[test]
    fn test_last_window_is_clipped() {
        // Second window is [4, 6): two slots, enough for the duration of 2.
        let schedule = run(vec![Task::new("A", 4, 1, 2)], 6);
        assert_eq!(
            timed(&schedule),
            vec![(0, "A".to_string(), EventMode::Start), (4, "A".to_string(), EventMode::Start)]
        );

        // Clipped window [4, 5) holds one slot, too few for 2.
        let schedule = run(vec![Task::new("A", 4, 1, 2)], 5);
        assert_eq!(
            schedule.skipped(),
            &vec![InfeasibleInstance { name: "A".into(), instance: 1 }]
        );
        assert!(schedule.timeline().is_free(4));
    }

    #[test]
    fn test_continue_reported_once_per_interruption() {
        // L only starts after Top and H, so there is nothing to resume.
        let schedule = run(
            vec![
                Task::new("Top", 8, 9, 1),
                Task::new("H", 8, 5, 2),
                Task::new("L", 8, 1, 4),
            ],
            8,
        );

        let l_events: Vec<(TimeStep, EventMode)> = schedule
            .events()
            .iter()
            .filter(|e| e.name() == "L")
            .map(|e| (e.time(), e.mode()))
            .collect();
        assert_eq!(l_events, vec![(3, EventMode::Start)]);

        // P holds [4, 6), L stays interrupted across both slots.
        let schedule = run(vec![Task::new("P", 4, 9, 2), Task::new("L", 8, 1, 4)], 8);
        let l_events: Vec<(TimeStep, EventMode)> = schedule
            .events()
            .iter()
            .filter(|e| e.name() == "L")
            .map(|e| (e.time(), e.mode()))
            .collect();
        assert_eq!(l_events, vec![(2, EventMode::Start), (6, EventMode::Continue)]);
    }

    #[test]
    fn test_equal_priority_follows_input_order() {
        let schedule = run(vec![Task::new("first", 2, 3, 1), Task::new("second", 2, 3, 1)], 2);
        assert_eq!(schedule.timeline().owner(0), Some(0));
        assert_eq!(schedule.timeline().owner(1), Some(1));
        assert_eq!(schedule.events()[0].name(), "first");
    }

    #[test]
    fn test_mutual_exclusion_and_exact_duration() {
        let runtime = 12;
        let mut taskset = TaskSet::new(vec![
            Task::new("A", 3, 4, 1),
            Task::new("B", 4, 3, 2),
            Task::new("C", 6, 2, 2),
            Task::new("D", 12, 1, 3),
        ]);
        taskset.sort_by_priority();
        let schedule = FixedPriority.compute(&taskset, runtime);

        for (index, task) in taskset.iter().enumerate() {
            for instance in 0..task.instance_count(runtime) {
                let (start, end) = task.window(instance, runtime);
                let owned = (start..end)
                    .filter(|&t| schedule.timeline().owner(t) == Some(index))
                    .count();
                let was_skipped = schedule
                    .skipped()
                    .iter()
                    .any(|s| s.name == task.name() && s.instance == instance);
                if was_skipped {
                    assert_eq!(owned, 0);
                } else {
                    assert_eq!(owned, task.duration() as usize);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let tasks = vec![Task::new("A", 3, 1, 2), Task::new("B", 5, 1, 2), Task::new("C", 2, 0, 1)];
        assert_eq!(run(tasks.clone(), 15), run(tasks, 15));
    }

    #[test]
    fn test_zero_runtime() {
        let schedule = run(vec![Task::new("A", 3, 1, 1)], 0);
        assert!(schedule.events().is_empty());
        assert!(schedule.skipped().is_empty());
        assert!(schedule.timeline().is_empty());
    }
}
