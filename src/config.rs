use std::path::PathBuf;

use clap::ArgMatches;
use log::LevelFilter;

use crate::utils::constants::DEFAULT_OUTPUT;
use crate::utils::logger::level_from_verbosity;

/// Settings for one run of the command-line tool.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional per-slot CSV dump of the timeline.
    pub timeline_csv: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeline_csv: None,
            level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reads the arguments declared by the binary's command: `system_file`,
    /// `output`, `timeline`, `verbose` and `quiet`.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let default = Self::default();
        Self {
            input: matches
                .get_one::<String>("system_file")
                .map(PathBuf::from)
                .unwrap_or(default.input),
            output: matches
                .get_one::<String>("output")
                .map(PathBuf::from)
                .unwrap_or(default.output),
            timeline_csv: matches.get_one::<String>("timeline").map(PathBuf::from),
            level: level_from_verbosity(
                matches.get_count("verbose"),
                matches.get_flag("quiet"),
            ),
        }
    }
}
