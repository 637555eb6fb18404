use crate::utils::{multiple_lcm, TaskError};

use super::{Task, TimeStep};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn new_empty() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn get_tasks(&self) -> &Vec<Task> {
        &self.tasks
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Splits the set into the tasks that pass `Task::validate` (original
    /// relative order kept) and one report per rejected task.
    pub fn validate(self) -> (TaskSet, Vec<TaskError>) {
        let mut rejected = Vec::new();
        let tasks = self
            .tasks
            .into_iter()
            .filter(|task| match task.validate() {
                Ok(()) => true,
                Err(e) => {
                    rejected.push(e);
                    false
                }
            })
            .collect();

        (TaskSet::new(tasks), rejected)
    }

    /// Descending priority. `sort_by` is stable, so equal priorities keep
    /// their input order and that order breaks ties during allocation.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    pub fn utilisation(&self) -> f64 {
        self.tasks.iter().map(|t| t.utilisation()).sum()
    }

    /// Least common multiple of the periods, `None` on overflow. Only
    /// meaningful on a validated set.
    pub fn hyperperiod(&self) -> Option<TimeStep> {
        let periods: Vec<TimeStep> = self.tasks.iter().map(|t| t.period() as TimeStep).collect();
        multiple_lcm(&periods)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Task> {
        self.tasks.iter()
    }
}
