//! Implementation of `sysman new`.

use std::process::ExitCode;

use sysman_document::{new_document, save_document};

use crate::cli::{
    args::NewCommand,
    output::{dim, success},
};

/// Writes an empty manual with placeholder name, description, and theme.
pub fn run(cmd: &NewCommand) -> ExitCode {
    let path = &cmd.path;
    if path.exists() && !cmd.force {
        eprintln!("error: file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let document = new_document();
    if let Err(e) = save_document(path, &document) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!("{} {}", success("Created"), path.display());
    println!(
        "{}",
        dim(&format!(
            "Manual id is '{}'; edit it, then run 'sysman add category --file {}'.",
            document.id,
            path.display()
        ))
    );
    ExitCode::SUCCESS
}
