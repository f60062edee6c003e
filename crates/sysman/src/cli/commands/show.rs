//! Implementation of `sysman show`.

use std::process::ExitCode;

use sysman_highlight::Highlighter;

use crate::cli::{
    args::ShowCommand,
    context::CommandContext,
    output::{print_entry, print_json},
};

/// Prints one entry of the selected manual, details included.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };
    let loaded = match ctx.select_manual(&library) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let Some((category, entry)) = loaded.document.entry(&cmd.entry) else {
        eprintln!(
            "error: no entry '{}' in manual '{}'",
            cmd.entry, loaded.document.id
        );
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return print_json(entry);
    }

    print_entry(category, entry, &Highlighter::new());
    ExitCode::SUCCESS
}
