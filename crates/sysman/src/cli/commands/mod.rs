//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod edit;
pub mod init;
pub mod ls;
pub mod new;
pub mod search;
pub mod show;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
        Commands::Duplicate { what } => edit::run_duplicate(ctx, &what),
        Commands::Add { what } => edit::run_add(ctx, &what),
        Commands::Delete { what } => edit::run_delete(ctx, &what),
        Commands::Move { what } => edit::run_move(ctx, &what),
        Commands::New(cmd) => new::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
