use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::utils::TraceError;
use crate::{Event, TimeStep};

/// Writes the trace to `path`, replacing any existing file.
pub fn write_trace(path: impl AsRef<Path>, runtime: TimeStep, events: &[Event]) -> Result<(), TraceError> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_trace(&mut writer, runtime, events)?;
    writer.flush()?;
    Ok(())
}

/// Events are written in the order given.
pub fn render_trace<W: Write>(writer: &mut W, runtime: TimeStep, events: &[Event]) -> Result<(), TraceError> {
    writeln!(writer, "<trace runtime=\"{}\">", runtime)?;
    for event in events {
        writeln!(
            writer,
            "<{} name={} time=\"{}\"/>",
            event.mode(),
            event.name(),
            event.time()
        )?;
    }
    writeln!(writer, "</trace>")?;
    Ok(())
}
