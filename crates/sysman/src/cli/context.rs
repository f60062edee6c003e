//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sysman_config::Config;
use sysman_document::{Library, LoadedDocument};
use tracing::debug;

use crate::cli::output::warning;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Single manual file given with `--file`.
    pub file: Option<PathBuf>,
    /// Manual id given with `--manual`.
    pub manual: Option<String>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(file: Option<PathBuf>, manual: Option<String>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            file,
            manual,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            file: None,
            manual: None,
        })
    }

    /// Loads the manuals this invocation works with.
    ///
    /// With `--file` that is exactly one manual and a load failure is an error. Otherwise the
    /// configured library directories are read and bad files are reported as warnings.
    pub fn library(&self) -> Result<Library, ExitCode> {
        let library = self.load_library()?;
        for failure in library.failures() {
            eprintln!("{} {}", warning("warning:"), failure.error);
        }
        Ok(library)
    }

    /// Like [`library`](Self::library), but leaves reporting library load failures to the
    /// caller.
    pub fn load_library(&self) -> Result<Library, ExitCode> {
        if let Some(path) = &self.file {
            let mut library = Library::new();
            library.load_file(path);
            if let Some(failure) = library.failures().first() {
                eprintln!("error: {}", failure.error);
                return Err(ExitCode::FAILURE);
            }
            return Ok(library);
        }

        let dirs = self.config.library_dirs(&self.cwd);
        debug!(?dirs, "loading library");
        Ok(Library::load_dirs(&dirs))
    }

    /// Picks the manual to operate on from a loaded library.
    ///
    /// Order of preference: `--manual`, then `library.default` from config, then the first
    /// manual loaded.
    pub fn select_manual<'a>(&self, library: &'a Library) -> Result<&'a LoadedDocument, ExitCode> {
        let wanted = self
            .manual
            .as_deref()
            .or(self.config.library.default.as_deref());

        if let Some(id) = wanted {
            return library.get(id).ok_or_else(|| {
                eprintln!("error: no manual with id '{id}'");
                print_available(library);
                ExitCode::FAILURE
            });
        }

        library.first().ok_or_else(|| {
            eprintln!("error: no manuals found");
            eprintln!(
                "Add manual files (*.json) to a library directory, or run 'sysman init' to configure one."
            );
            ExitCode::FAILURE
        })
    }
}

/// Lists loaded manual ids on stderr after a lookup failure.
fn print_available(library: &Library) {
    if library.is_empty() {
        return;
    }
    let ids: Vec<&str> = library
        .documents()
        .iter()
        .map(|d| d.document.id.as_str())
        .collect();
    eprintln!("available: {}", ids.join(", "));
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
