//! asminfo CLI - Bump AssemblyInfo versions and copyright years.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod banner;
mod cli;
mod legacy;

fn main() -> ExitCode {
    let args = legacy::normalize_args(std::env::args_os(), &cli::Cli::command());
    let parsed = match cli::Cli::try_parse_from(args) {
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        parsed => parsed,
    };

    // Initialize logging
    let verbose = parsed.as_ref().is_ok_and(|cli| cli.verbose);
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let session = banner::Session::start();
    println!("{}", session.startup_banner());

    let (status, stop) = match parsed {
        Ok(cli) => {
            let stop = cli.stop;
            (cli.run(), stop)
        }
        Err(err) => (cli::report_usage_error(&err), false),
    };
    tracing::debug!(%status, "finished");

    print!("{}", session.shutdown_banner());
    if stop {
        banner::await_return();
    }

    ExitCode::from(status.code())
}
