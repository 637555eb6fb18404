mod event;
mod schedule;
pub mod task;
pub mod taskset;
pub mod timeline;
pub mod scheduler;

pub use event::{sort_by_time, Event, EventMode};
pub use schedule::Schedule;
pub use task::Task;
pub use taskset::TaskSet;
pub use timeline::Timeline;

pub type TimeStep = usize;

pub type Priority = i64;
