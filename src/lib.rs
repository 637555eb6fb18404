pub mod config;
pub mod core;
pub mod io;
pub mod models;
pub mod utils;

pub use config::Config;
pub use crate::core::{simulation, Simulation};
pub use models::scheduler;
pub use models::{Event, EventMode, Priority, Schedule, Task, TaskSet, Timeline, TimeStep};
pub use utils::{constants, ExitCode};
