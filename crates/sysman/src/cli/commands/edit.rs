//! Implementations of `sysman duplicate`, `add`, `delete` and `move`.
//!
//! Every edit works on a copy of the selected manual and writes it back to the file it was
//! loaded from, unless `--dry-run` is given or the edit changed nothing.

use std::process::ExitCode;

use sysman_document::{
    Direction, Document, DocumentError, LoadedDocument, NameAndId, add_category, add_entry,
    duplicate_category, duplicate_entry, move_category, move_entry, remove_category,
    remove_entry, save_document,
};
use tracing::debug;

use crate::cli::{
    args::{AddWhat, DeleteWhat, DuplicateWhat, EditArgs, MoveDirection, MoveWhat},
    context::CommandContext,
    output::{dim, ident, success},
};

/// What an edit did to the manual.
enum Change {
    /// A node was created under a fresh name and id.
    Created(&'static str, NameAndId),
    /// A node was removed.
    Removed(&'static str, NameAndId),
    /// A node moved to a new position among its siblings (zero-based).
    Moved(&'static str, String, usize),
    /// A move at the first or last position; nothing changed.
    AtBoundary(&'static str, String),
}

impl Change {
    /// Whether the manual needs saving.
    fn modified(&self) -> bool {
        !matches!(self, Self::AtBoundary(..))
    }

    /// One-line report, phrased as a plan for `--dry-run`.
    fn describe(&self, dry_run: bool) -> String {
        let verb = |done: &str, planned: &str| {
            if dry_run {
                planned.to_string()
            } else {
                success(done)
            }
        };
        match self {
            Self::Created(kind, named) => format!(
                "{} {kind} {} {}",
                verb("Created", "Would create"),
                ident(&named.id),
                dim(&format!("\"{}\"", named.name))
            ),
            Self::Removed(kind, named) => format!(
                "{} {kind} {} {}",
                verb("Removed", "Would remove"),
                ident(&named.id),
                dim(&format!("\"{}\"", named.name))
            ),
            Self::Moved(kind, id, position) => format!(
                "{} {kind} {} to position {}",
                verb("Moved", "Would move"),
                ident(id),
                position + 1
            ),
            Self::AtBoundary(kind, id) => {
                dim(&format!("{kind} {id} cannot move further, nothing changed"))
            }
        }
    }
}

/// Duplicates an entry or a category.
pub fn run_duplicate(ctx: &CommandContext, what: &DuplicateWhat) -> ExitCode {
    match what {
        DuplicateWhat::Entry { id, edit } => apply(ctx, edit, |document| {
            let (category, index) = find_entry(document, id)?;
            duplicate_entry(document, category, index)
                .map(|named| Change::Created("entry", named))
                .map_err(|e| e.to_string())
        }),
        DuplicateWhat::Category { id, edit } => apply(ctx, edit, |document| {
            let index = find_category(document, id)?;
            duplicate_category(document, index)
                .map(|named| Change::Created("category", named))
                .map_err(|e| e.to_string())
        }),
    }
}

/// Adds a new category or entry.
pub fn run_add(ctx: &CommandContext, what: &AddWhat) -> ExitCode {
    match what {
        AddWhat::Category { edit } => apply(ctx, edit, |document| {
            Ok(Change::Created("category", add_category(document)))
        }),
        AddWhat::Entry { category, edit } => apply(ctx, edit, |document| {
            let index = find_category(document, category)?;
            add_entry(document, index)
                .map(|named| Change::Created("entry", named))
                .map_err(|e| e.to_string())
        }),
    }
}

/// Deletes an entry or a category with all of its entries.
pub fn run_delete(ctx: &CommandContext, what: &DeleteWhat) -> ExitCode {
    match what {
        DeleteWhat::Entry { id, edit } => apply(ctx, edit, |document| {
            let (category, index) = find_entry(document, id)?;
            remove_entry(document, category, index)
                .map(|entry| Change::Removed("entry", NameAndId::new(&entry.name, &entry.id)))
                .map_err(|e| e.to_string())
        }),
        DeleteWhat::Category { id, edit } => apply(ctx, edit, |document| {
            let index = find_category(document, id)?;
            remove_category(document, index)
                .map(|c| Change::Removed("category", NameAndId::new(&c.name, &c.id)))
                .map_err(|e| e.to_string())
        }),
    }
}

/// Moves an entry or a category one place among its siblings.
pub fn run_move(ctx: &CommandContext, what: &MoveWhat) -> ExitCode {
    match what {
        MoveWhat::Entry {
            id,
            direction,
            edit,
        } => apply(ctx, edit, |document| {
            let (category, index) = find_entry(document, id)?;
            let moved = move_entry(document, category, index, to_direction(*direction))
                .map_err(|e| e.to_string())?;
            Ok(moved_or_not("entry", id, moved))
        }),
        MoveWhat::Category {
            id,
            direction,
            edit,
        } => apply(ctx, edit, |document| {
            let index = find_category(document, id)?;
            let moved = move_category(document, index, to_direction(*direction))
                .map_err(|e| e.to_string())?;
            Ok(moved_or_not("category", id, moved))
        }),
    }
}

/// Maps the command-line direction onto the document one.
fn to_direction(direction: MoveDirection) -> Direction {
    match direction {
        MoveDirection::Up => Direction::Up,
        MoveDirection::Down => Direction::Down,
    }
}

/// Builds the report for a move result.
fn moved_or_not(kind: &'static str, id: &str, moved: Option<usize>) -> Change {
    match moved {
        Some(position) => Change::Moved(kind, id.to_string(), position),
        None => Change::AtBoundary(kind, id.to_string()),
    }
}

/// Resolves an entry id to its `(category, index)` position.
fn find_entry(document: &Document, id: &str) -> Result<(usize, usize), String> {
    document
        .entry_position(id)
        .ok_or_else(|| format!("no entry '{id}' in manual '{}'", document.id))
}

/// Resolves a category id to its index.
fn find_category(document: &Document, id: &str) -> Result<usize, String> {
    document
        .category_position(id)
        .ok_or_else(|| format!("no category '{id}' in manual '{}'", document.id))
}

/// Runs one edit against the selected manual and saves the result.
fn apply<F>(ctx: &CommandContext, args: &EditArgs, op: F) -> ExitCode
where
    F: FnOnce(&mut Document) -> Result<Change, String>,
{
    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };
    let loaded = match ctx.select_manual(&library) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let mut document = loaded.document.clone();
    let change = match op(&mut document) {
        Ok(change) => change,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    if args.dry_run || !change.modified() {
        println!("{}", change.describe(args.dry_run));
        return ExitCode::SUCCESS;
    }

    if let Err(e) = save(loaded, &document) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!("{}", change.describe(false));
    ExitCode::SUCCESS
}

/// Writes an edited manual back over the file it came from.
fn save(loaded: &LoadedDocument, document: &Document) -> Result<(), DocumentError> {
    debug!(path = %loaded.path.display(), id = %document.id, "saving manual");
    save_document(&loaded.path, document)
}
