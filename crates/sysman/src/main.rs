//! Command-line interface for `sysman`.

use std::{io, process::ExitCode};

use sysman::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter, e.g. `SYSMAN_LOG=debug`.
const LOG_ENV: &str = "SYSMAN_LOG";

/// Parses arguments, loads configuration, and runs the selected command.
fn main() -> ExitCode {
    init_tracing();
    let cli = parse_cli();

    let ctx = if matches!(cli.command, Commands::Init(_) | Commands::New(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load(cli.file, cli.manual)
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}

/// Sends log output to stderr, filtered by `SYSMAN_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
