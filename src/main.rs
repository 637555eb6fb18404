use std::io::Write;
use std::process;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

use tasker::constants::USAGE_NOTICE;
use tasker::io::{read_system_file, write_timeline_csv, write_trace};
use tasker::scheduler::FixedPriority;
use tasker::utils::{logger, LoadError};
use tasker::{simulation, Config, ExitCode};

pub fn build_cli_command() -> Command {
    Command::new("tasker")
    .version("0.1.0")
    .about("Builds a fixed-priority execution trace for periodic tasks")

    .arg(Arg::new("system_file")
        .required(true)
        .help("Path to the <system> task definition file"))

    .arg(Arg::new("output")
        .short('o')
        .long("output")
        .help("Where to write the <trace> file")
        .default_value(tasker::constants::DEFAULT_OUTPUT))

    .arg(Arg::new("timeline")
        .short('t')
        .long("timeline")
        .help("Also write the slot owners as CSV"))

    .arg(Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("More output (-v debug, -vv trace)"))

    .arg(Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only print errors"))
}

/// Bad argument lists are not an error for this tool: the notice and usage
/// are printed and the status is still success.
fn usage_notice<W: Write>(command: &mut Command, out: &mut W) -> ExitCode {
    let _ = writeln!(out, "{}", USAGE_NOTICE);
    let _ = writeln!(out, "{}", command.render_usage());
    ExitCode::Success
}

fn parse_args() -> ArgMatches {
    let mut command = build_cli_command();
    match command.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            let code = usage_notice(&mut command, &mut std::io::stdout().lock());
            process::exit(code as i32);
        }
    }
}

fn run(config: &Config) -> ExitCode {
    let (taskset, runtime) = match read_system_file(&config.input) {
        Ok(system) => system,
        Err(LoadError::Io(e)) => {
            error!("open {}: {}", config.input.display(), e);
            return ExitCode::IoFailure;
        }
        Err(e) => {
            error!("{}: {}", config.input.display(), e);
            return ExitCode::MalformedInput;
        }
    };

    let result = simulation(&FixedPriority, taskset, runtime);
    let trace = result.trace();

    if let Err(e) = write_trace(&config.output, runtime, &trace) {
        error!("create {}: {}", config.output.display(), e);
        return ExitCode::IoFailure;
    }
    info!("{} events written to {}", trace.len(), config.output.display());

    if let Some(path) = &config.timeline_csv {
        if let Err(e) = write_timeline_csv(path, result.schedule.timeline(), &result.taskset) {
            error!("create {}: {}", path.display(), e);
            return ExitCode::IoFailure;
        }
    }

    ExitCode::Success
}

fn main() {
    // cargo run <system_file> [-o output.xml] [-t timeline.csv] [-v|-q]
    let config = Config::from_matches(&parse_args());
    logger::init(config.level);

    process::exit(run(&config) as i32);
}
