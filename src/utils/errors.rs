use std::io;

use thiserror::Error;

/// Why a task was dropped before scheduling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("Task {name} has incorrect period")]
    InvalidPeriod { name: String, period: i64 },
    #[error("Task {name} has incorrect duration")]
    InvalidDuration { name: String, duration: i64, period: i64 },
}

/// A period instance that did not have enough free slots.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Cannot put task {name} in its {instance} period")]
pub struct InfeasibleInstance {
    pub name: String,
    pub instance: usize,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("missing <system runtime=\"N\"> header")]
    MissingHeader,
    #[error("line {line}: malformed system header")]
    MalformedHeader { line: usize },
    #[error("line {line}: malformed task ({reason})")]
    MalformedTask { line: usize, reason: String },
    #[error("line {line}: invalid value {value:?} for {field}")]
    InvalidNumber { line: usize, field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
}
