use std::path::Path;

use csv::Writer;

use crate::utils::TraceError;
use crate::{TaskSet, Timeline};

/// Dumps the slot owners as `time,task` rows; free slots have an empty task.
/// `taskset` is the priority-ordered set the timeline was built from.
pub fn write_timeline_csv(path: impl AsRef<Path>, timeline: &Timeline, taskset: &TaskSet) -> Result<(), TraceError> {
    let mut wtr = Writer::from_path(path)?;
    write_rows(&mut wtr, timeline, taskset)?;
    wtr.flush()?;
    Ok(())
}

fn write_rows<W: std::io::Write>(wtr: &mut Writer<W>, timeline: &Timeline, taskset: &TaskSet) -> Result<(), TraceError> {
    wtr.write_record(["time", "task"])?;
    for (t, owner) in timeline.iter().enumerate() {
        let name = owner
            .and_then(|index| taskset.get_tasks().get(index))
            .map(|task| task.name())
            .unwrap_or("");
        wtr.write_record([t.to_string().as_str(), name])?;
    }
    Ok(())
}
