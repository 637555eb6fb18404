//! Reader for task-definition files:
//!
//! ```text
//! <system runtime="12">
//! <task name=A period="4" priority="2" duration="1"/>
//! </system>
//! ```
//!
//! Numbers are parsed as signed so that zero or negative periods and
//! durations reach the validator instead of failing here. The runtime is
//! capped at `MAX_RUNTIME`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::utils::constants::MAX_RUNTIME;
use crate::utils::LoadError;
use crate::{Task, TaskSet, TimeStep};

pub fn read_system_file(path: impl AsRef<Path>) -> Result<(TaskSet, TimeStep), LoadError> {
    let file = File::open(path)?;
    parse_system(BufReader::new(file))
}

pub fn parse_system<R: BufRead>(reader: R) -> Result<(TaskSet, TimeStep), LoadError> {
    let mut lines = reader.split(b'\n').enumerate();

    let runtime = loop {
        match lines.next() {
            Some((index, bytes)) => {
                let line_no = index + 1;
                let line = decode(bytes?, || LoadError::MalformedHeader { line: line_no })?;
                if line.trim().is_empty() {
                    continue;
                }
                break parse_header(line.trim(), line_no)?;
            }
            None => return Err(LoadError::MissingHeader),
        }
    };

    let mut taskset = TaskSet::new_empty();
    let mut terminated = false;

    for (index, bytes) in lines {
        let line_no = index + 1;
        let line = decode(bytes?, || LoadError::MalformedTask {
            line: line_no,
            reason: "invalid UTF-8".to_string(),
        })?;
        let line = line.trim();

        if line.len() <= 1 {
            continue;
        }
        if line.as_bytes()[1] == b'/' {
            terminated = true;
            break;
        }

        let task = parse_task(line, line_no)?;
        debug!("loaded {:?}", task);
        taskset.add_task(task);
    }

    if !terminated {
        warn!("system file has no closing tag, reading stopped at end of file");
    }

    Ok((taskset, runtime))
}

/// Bytes that are not UTF-8 make the line malformed, not the read.
fn decode(bytes: Vec<u8>, malformed: impl FnOnce() -> LoadError) -> Result<String, LoadError> {
    String::from_utf8(bytes).map_err(|_| malformed())
}

fn parse_header(line: &str, line_no: usize) -> Result<TimeStep, LoadError> {
    let body = line
        .strip_prefix("<system")
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or(LoadError::MalformedHeader { line: line_no })?;

    let value = body
        .split_whitespace()
        .find_map(|token| token.strip_prefix("runtime="))
        .ok_or(LoadError::MalformedHeader { line: line_no })?;

    let value = unquote(value);
    let invalid = || LoadError::InvalidNumber {
        line: line_no,
        field: "runtime",
        value: value.to_string(),
    };

    let runtime: TimeStep = value.parse().map_err(|_| invalid())?;
    if runtime > MAX_RUNTIME {
        return Err(invalid());
    }
    Ok(runtime)
}

fn parse_task(line: &str, line_no: usize) -> Result<Task, LoadError> {
    let malformed = |reason: &str| LoadError::MalformedTask {
        line: line_no,
        reason: reason.to_string(),
    };

    let body = line
        .strip_prefix("<task")
        .ok_or_else(|| malformed("expected <task"))?
        .strip_suffix("/>")
        .ok_or_else(|| malformed("expected closing />"))?;

    let mut name = None;
    let mut period = None;
    let mut priority = None;
    let mut duration = None;

    for token in body.split_whitespace() {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| malformed("attribute without value"))?;

        match key {
            "name" if !value.is_empty() => name = Some(value.to_string()),
            "name" => return Err(malformed("empty name")),
            "period" => period = Some(parse_number(value, "period", line_no)?),
            "priority" => priority = Some(parse_number(value, "priority", line_no)?),
            "duration" => duration = Some(parse_number(value, "duration", line_no)?),
            _ => return Err(malformed(&format!("unknown attribute {key}"))),
        }
    }

    Ok(Task::new(
        name.ok_or_else(|| malformed("missing name"))?,
        period.ok_or_else(|| malformed("missing period"))?,
        priority.ok_or_else(|| malformed("missing priority"))?,
        duration.ok_or_else(|| malformed("missing duration"))?,
    ))
}

fn parse_number(value: &str, field: &'static str, line_no: usize) -> Result<i64, LoadError> {
    let value = unquote(value);
    value.parse().map_err(|_| LoadError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
    })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
