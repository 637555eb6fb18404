//! Log sink for the command-line tool.
//!
//! Info and warnings (validation and feasibility diagnostics) go to stdout,
//! errors to stderr. Debug and trace records carry their source location.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

pub static CONSOLE: Console = Console;

pub struct Console;

/// Formats a record the way `Console` prints it, without the newline.
pub fn format_msg(record: &Record) -> String {
    match record.level() {
        Level::Info => format!("{}", record.args()),
        Level::Warn | Level::Error => format!("[{}] {}", record.level(), record.args()),
        _ => match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                format!("[{}] {file}:{line}: {}", record.level(), record.args())
            }
            _ => format!("[{}] {}", record.level(), record.args()),
        },
    }
}

impl Log for Console {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = format_msg(record);
        if record.level() == Level::Error {
            let _ = writeln!(std::io::stderr().lock(), "{msg}");
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{msg}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Installs `CONSOLE` as the global logger. Calling it again only changes
/// the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&CONSOLE);
    log::set_max_level(level);
}

/// Level for `-v` / `-q` counts: Info by default, Error when quiet.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
