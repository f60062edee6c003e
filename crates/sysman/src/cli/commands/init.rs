//! Implementation of `sysman init`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sysman_config::{
    CONFIG_FILENAME, DEFAULT_LIBRARY_DIR, global_config_path, global_template, local_template,
};
use sysman_highlight::Highlighter;

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, subheader, success},
};

/// Where `init` writes.
enum Target {
    /// `~/.sysman.toml`.
    Global(PathBuf),
    /// `.sysman.toml` in the working directory.
    Local(PathBuf),
}

impl Target {
    /// Picks the global file for `--global`, or when run from the home directory itself.
    fn select(cwd: &Path, global: bool) -> Option<Self> {
        let global_path = global_config_path();
        let in_home = global_path
            .as_deref()
            .and_then(Path::parent)
            .is_some_and(|home| home == cwd);

        if global || in_home {
            global_path.map(Self::Global)
        } else {
            Some(Self::Local(cwd.join(CONFIG_FILENAME)))
        }
    }

    /// The config file path.
    fn path(&self) -> &Path {
        match self {
            Self::Global(path) | Self::Local(path) => path,
        }
    }

    /// Commented-out template for this kind of file.
    fn template(&self) -> String {
        match self {
            Self::Global(_) => global_template(),
            Self::Local(_) => local_template(),
        }
    }
}

/// Writes a commented-out `.sysman.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some(target) = Target::select(&ctx.cwd, cmd.global) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };
    let path = target.path();

    if path.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = target.template();
    if let Err(e) = fs::write(path, &template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("{} {}", success("Created"), path.display());
    println!();
    println!("{}", subheader("Every setting starts commented out:"));
    print!("{}", Highlighter::new().highlight_toml(&template));

    if let Target::Local(_) = target
        && !ctx.cwd.join(DEFAULT_LIBRARY_DIR).is_dir()
    {
        println!();
        println!(
            "{}",
            dim(&format!(
                "Put manual files (*.json) in ./{DEFAULT_LIBRARY_DIR}/ or set [library] paths."
            ))
        );
    }

    ExitCode::SUCCESS
}
