pub mod system_file;
pub mod timeline_csv;
pub mod trace_file;

pub use system_file::{parse_system, read_system_file};
pub use timeline_csv::write_timeline_csv;
pub use trace_file::{render_trace, write_trace};
