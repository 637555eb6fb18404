/// Process exit status.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    IoFailure = 1,
    MalformedInput = 2,
}

pub const DEFAULT_OUTPUT: &str = "output.xml";

pub const USAGE_NOTICE: &str = "Wrong command line parameters, expecting .xml file";

/// Longest accepted run horizon; the timeline holds one slot per time unit.
pub const MAX_RUNTIME: usize = 10_000_000;
