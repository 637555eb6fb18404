use crate::utils::TaskError;

use super::{Priority, TimeStep};

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    name: String,
    period: i64,      // T_i : Period.
    priority: Priority,
    duration: i64,    // C_i : Execution units per period instance.
}

impl Task {
    pub fn new(name: impl Into<String>, period: i64, priority: Priority, duration: i64) -> Self {
        Self {
            name: name.into(),
            period,
            priority,
            duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> i64 {
        self.period
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Checks `period > 0` and `0 < duration <= period`.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.period <= 0 {
            return Err(TaskError::InvalidPeriod {
                name: self.name.clone(),
                period: self.period,
            });
        }
        if self.duration <= 0 || self.duration > self.period {
            return Err(TaskError::InvalidDuration {
                name: self.name.clone(),
                duration: self.duration,
                period: self.period,
            });
        }
        Ok(())
    }

    pub fn utilisation(&self) -> f64 {
        self.duration as f64 / self.period as f64
    }

    /// Number of period instances inside `runtime`, counting a clipped last one.
    pub fn instance_count(&self, runtime: TimeStep) -> usize {
        let period = self.period as TimeStep;
        (runtime + period - 1) / period
    }

    /// Window `[start, end)` of instance `i`, clipped to `runtime`.
    pub fn window(&self, i: usize, runtime: TimeStep) -> (TimeStep, TimeStep) {
        let period = self.period as TimeStep;
        let start = i * period;
        (start, ((i + 1) * period).min(runtime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_duration_equal_to_period() {
        assert!(Task::new("A", 4, 1, 4).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let err = Task::new("Z", 0, 1, 1).validate().unwrap_err();
        assert_eq!(err, TaskError::InvalidPeriod { name: "Z".into(), period: 0 });
    }

    #[test]
    fn test_validate_rejects_bad_duration() {
        assert!(matches!(
            Task::new("L", 2, 1, 3).validate(),
            Err(TaskError::InvalidDuration { .. })
        ));
        assert!(matches!(
            Task::new("N", 2, 1, -1).validate(),
            Err(TaskError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_instances_and_clipped_window() {
        let task = Task::new("A", 4, 1, 1);
        assert_eq!(task.instance_count(10), 3);
        assert_eq!(task.instance_count(8), 2);
        assert_eq!(task.instance_count(0), 0);
        assert_eq!(task.window(1, 10), (4, 8));
        assert_eq!(task.window(2, 10), (8, 10));
    }
}
