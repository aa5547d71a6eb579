use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::debug;

use path_rename::prelude::*;
use path_rename::workflow;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every path was renamed without error
fn run() -> Result<bool> {
    let options = get_options()?;

    let log_file = resolve_log_file(&options.log_file, options.log_locally)?;
    init_logger(options.verbosity, &log_file)?;

    let stats = workflow::run(&options)?;
    debug!("Final statistics: {stats:?}");

    Ok(stats.errors == 0)
}
