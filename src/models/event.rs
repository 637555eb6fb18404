use std::fmt;

use super::TimeStep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventMode {
    Start,
    Continue,
}

impl EventMode {
    /// Tag used in the trace file.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventMode::Start => "start",
            EventMode::Continue => "continue",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: String,
    time: TimeStep,
    mode: EventMode,
}

impl Event {
    pub fn new(name: impl Into<String>, time: TimeStep, mode: EventMode) -> Self {
        Self {
            name: name.into(),
            time,
            mode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> TimeStep {
        self.time
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }
}

/// Sorts events by ascending time. Events at the same time keep the order
/// they were emitted in, which follows task priority.
pub fn sort_by_time(events: &mut [Event]) {
    events.sort_by_key(|event| event.time());
}
