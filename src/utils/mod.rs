pub mod constants;
pub mod errors;
pub mod lcm;
pub mod logger;

pub use constants::ExitCode;
pub use errors::{InfeasibleInstance, LoadError, TaskError, TraceError};
pub use lcm::multiple_lcm;
