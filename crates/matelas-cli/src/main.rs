//! `matelas` binary: parses arguments, sets up logging and reports failures.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use matelas::MatelasError;
use matelas_cli::{Args, error_adapter::ErrorAdapter};

/// Parses `--log-level`, warning on stderr and using `warn` when unrecognized.
fn log_level(value: &str) -> LevelFilter {
    LevelFilter::from_str(value).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{value}`, logging warnings and errors only.");
        LevelFilter::Warn
    })
}

/// Renders a failure as a miette report.
fn report(err: &MatelasError) -> String {
    let mut rendered = String::new();
    if miette::GraphicalReportHandler::new()
        .render_report(&mut rendered, &ErrorAdapter(err))
        .is_err()
    {
        rendered = err.to_string();
    }
    rendered
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let level = log_level(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    info!(log_level:? = level; "Matelas starting");
    debug!(args:?; "Arguments");

    match matelas_cli::run(&args) {
        Ok(()) => info!("Done"),
        Err(err) => {
            error!("{}", report(&err));
            process::exit(1);
        }
    }
}
