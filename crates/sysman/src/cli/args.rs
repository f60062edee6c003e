//! Clap argument definitions for the `sysman` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sysman")]
#[command(about = "Browse, search, and edit structured system manuals")]
pub struct Cli {
    /// Use this manual file instead of the configured library
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Manual id to operate on [default: library.default, else the first manual]
    #[arg(short = 'm', long, global = true, value_name = "ID")]
    pub manual: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `sysman search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words; an empty query lists every entry
    pub query: Vec<String>,

    /// Filter one category only (live mode) instead of searching every category
    #[arg(short = 'c', long, value_name = "ID")]
    pub category: Option<String>,

    /// Minimum score, overriding search.live_min_score / search.advanced_min_score
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show the per-field score breakdown for each result
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `sysman show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Entry id
    pub entry: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sysman ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show descriptions and counts
    #[arg(short = 'l', long)]
    pub long: bool,

    /// What to list.
    #[command(subcommand)]
    pub what: LsWhat,
}

/// What to list with `sysman ls`.
#[derive(Clone, Subcommand, Debug)]
pub enum LsWhat {
    /// List every loaded manual
    Manuals,
    /// List the categories of a manual
    Categories,
    /// List the entries of a manual, optionally of one category
    Entries {
        /// Category id
        category: Option<String>,
    },
}

/// Flags shared by commands that modify a manual.
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// Print the new name and id without writing the manual
    #[arg(long)]
    pub dry_run: bool,
}

/// What to duplicate with `sysman duplicate`.
#[derive(Clone, Subcommand, Debug)]
pub enum DuplicateWhat {
    /// Copy an entry, placing the copy right after it
    Entry {
        /// Id of the entry to copy
        id: String,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
    /// Copy a category and all of its entries, placing the copy right after it
    Category {
        /// Id of the category to copy
        id: String,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
}

/// What to create with `sysman add`.
#[derive(Clone, Subcommand, Debug)]
pub enum AddWhat {
    /// Append an empty category
    Category {
        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
    /// Append a template entry to a category
    Entry {
        /// Id of the category to add to
        category: String,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
}

/// What to delete with `sysman delete`.
#[derive(Clone, Subcommand, Debug)]
pub enum DeleteWhat {
    /// Remove an entry
    Entry {
        /// Id of the entry to remove
        id: String,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
    /// Remove a category and every entry in it
    Category {
        /// Id of the category to remove
        id: String,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
}

/// Which way `sysman move` shifts a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MoveDirection {
    /// One place towards the start
    Up,
    /// One place towards the end
    Down,
}

/// What to move with `sysman move`.
#[derive(Clone, Subcommand, Debug)]
pub enum MoveWhat {
    /// Swap an entry with its neighbour in the same category
    Entry {
        /// Id of the entry to move
        id: String,

        /// Direction to move in
        #[arg(value_enum)]
        direction: MoveDirection,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
    /// Swap a category with its neighbour
    Category {
        /// Id of the category to move
        id: String,

        /// Direction to move in
        #[arg(value_enum)]
        direction: MoveDirection,

        #[command(flatten)]
        /// Edit flags.
        edit: EditArgs,
    },
}

/// Arguments for `sysman new`.
#[derive(Args, Debug, Clone)]
pub struct NewCommand {
    /// Manual file to create
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sysman init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sysman.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sysman` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank entries against a query
    #[command(after_help = "\
SCORING:
  Each query word is matched against an entry's name, description, content,
  examples, and notes. Exact words score highest, then substrings, then close
  spellings. Details are not searched.

EXAMPLES:
  sysman search ping
  sysman search -c net transfer
  sysman search --explain 'list files'
  sysman search --min-score 0.3 --json tar")]
    Search(SearchCommand),

    /// Print an entry in full
    Show(ShowCommand),

    /// List manuals, categories, or entries
    Ls(LsCommand),

    /// Validate configuration and manuals
    Check,

    /// Duplicate an entry or category without id collisions
    Duplicate {
        /// What to duplicate
        #[command(subcommand)]
        what: DuplicateWhat,
    },

    /// Add a new category or entry
    Add {
        /// What to add
        #[command(subcommand)]
        what: AddWhat,
    },

    /// Delete a category or entry
    Delete {
        /// What to delete
        #[command(subcommand)]
        what: DeleteWhat,
    },

    /// Move a category or entry up or down among its siblings
    Move {
        /// What to move
        #[command(subcommand)]
        what: MoveWhat,
    },

    /// Create an empty manual file
    New(NewCommand),

    /// Initialize sysman configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp && env::args().len() <= 2 {
                print_hierarchical_help();
                exit(0);
            }
            e.exit();
        }
    }
}

/// Prints help listing subcommands together with their nested subcommands.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: sysman [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:10} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("      --file <PATH>  Use this manual file instead of the configured library");
    println!("  -m, --manual <ID>  Manual id to operate on");
    println!("  -h, --help         Print help");
}
