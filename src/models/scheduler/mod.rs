pub mod scheduler;
pub mod fixed_priority;

pub use scheduler::Scheduler;
pub use fixed_priority::FixedPriority;
