use crate::utils::InfeasibleInstance;

use super::{Event, Timeline};

/// Output of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    timeline: Timeline,
    events: Vec<Event>,       // Emission order
    skipped: Vec<InfeasibleInstance>,
}

impl Schedule {
    pub fn new(timeline: Timeline, events: Vec<Event>, skipped: Vec<InfeasibleInstance>) -> Self {
        Self {
            timeline,
            events,
            skipped,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn events(&self) -> &Vec<Event> {
        &self.events
    }

    pub fn skipped(&self) -> &Vec<InfeasibleInstance> {
        &self.skipped
    }

    /// Events ordered by time for the trace writer.
    pub fn sorted_events(&self) -> Vec<Event> {
        let mut events = self.events.clone();
        super::event::sort_by_time(&mut events);
        events
    }
}
