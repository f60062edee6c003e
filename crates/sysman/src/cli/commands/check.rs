//! Implementation of `sysman check`.

use std::process::ExitCode;

use sysman_config::ConfigWarning;
use sysman_document::{ValidationIssue, validate_document};

use crate::cli::{
    context::CommandContext,
    output::{dim, ident, subheader, success, warning},
};

/// Validates configuration and every loaded manual.
///
/// Exits with failure when any warning or issue is found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    println!("{}", subheader("Config files:"));
    if config.sources.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    } else {
        for path in &config.sources {
            println!("   {}", path.display());
        }
    }
    println!();

    // Without any config file the default library directory is used and nothing is misconfigured.
    let config_warnings = if ctx.file.is_some() || config.sources.is_empty() {
        Vec::new()
    } else {
        config.validate()
    };
    let library = match ctx.load_library() {
        Ok(library) => library,
        Err(code) => return code,
    };

    let mut problems = config_warnings.len() + library.failures().len();
    let mut document_issues = false;

    println!("{}", subheader("Manuals:"));
    if library.is_empty() {
        println!("   {}", dim("(none loaded)"));
    }
    for loaded in library.documents() {
        let issues = validate_document(&loaded.document);
        let status = if issues.is_empty() {
            success("ok")
        } else {
            warning(&format!("{} issues", issues.len()))
        };
        println!(
            "   {} {} {}",
            ident(&loaded.document.id),
            dim(&format!("({})", loaded.path.display())),
            status
        );
        for issue in &issues {
            println!("      - {}", format_issue(issue));
        }
        problems += issues.len();
        document_issues |= !issues.is_empty();
    }
    println!();

    if !library.failures().is_empty() {
        println!(
            "{}",
            subheader(&format!("Unreadable files ({}):", library.failures().len()))
        );
        for failure in library.failures() {
            println!("   {}", warning(&failure.error.to_string()));
        }
        println!();
    }

    if !config_warnings.is_empty() {
        println!(
            "{}",
            subheader(&format!("Warnings ({}):", config_warnings.len()))
        );
        for w in &config_warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
    }

    if problems == 0 {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    print_hints(&config_warnings, document_issues);
    ExitCode::FAILURE
}

/// Formats a document issue for display.
fn format_issue(issue: &ValidationIssue) -> String {
    issue.to_string()
}

/// Prints hints for resolving common problems.
fn print_hints(warnings: &[ConfigWarning], document_issues: bool) {
    let mut hints = Vec::new();

    for w in warnings {
        match w {
            ConfigWarning::NoLibraryPaths => {
                hints.push("Add a [library] section with paths to .sysman.toml, or run 'sysman init'.");
            }
            ConfigWarning::LibraryPathMissing { .. } => {
                hints.push("Create the missing directory or update the library path.");
            }
            ConfigWarning::LibraryPathNotDirectory { .. } => {
                hints.push("Library paths must point to directories, not files.");
            }
            ConfigWarning::ThresholdOutOfRange { .. } => {
                hints.push("Search thresholds are scores between 0.0 and 1.0.");
            }
        }
    }
    if document_issues {
        hints.push("Use 'sysman duplicate' and 'sysman add' to create nodes with unique ids.");
    }

    hints.sort();
    hints.dedup();

    if !hints.is_empty() {
        println!("{}", subheader("Hints:"));
        for hint in hints {
            println!("   {}", dim(hint));
        }
    }
}
