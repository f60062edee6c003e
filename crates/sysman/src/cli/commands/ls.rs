//! Implementation of `sysman ls`.

use std::process::ExitCode;

use sysman_document::{Category, Document, Library};

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
    output::{dim, header, ident},
};

/// Lists manuals, categories, or entries.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };

    match &cmd.what {
        LsWhat::Manuals => {
            list_manuals(&library, cmd.long);
            ExitCode::SUCCESS
        }
        LsWhat::Categories => match ctx.select_manual(&library) {
            Ok(loaded) => {
                list_categories(&loaded.document, cmd.long);
                ExitCode::SUCCESS
            }
            Err(code) => code,
        },
        LsWhat::Entries { category } => match ctx.select_manual(&library) {
            Ok(loaded) => list_document_entries(&loaded.document, category.as_deref(), cmd.long),
            Err(code) => code,
        },
    }
}

/// Prints one line per loaded manual.
fn list_manuals(library: &Library, long: bool) {
    if library.is_empty() {
        println!("{}", dim("No manuals found."));
        return;
    }
    for loaded in library.documents() {
        let document = &loaded.document;
        if !long {
            println!("{}", document.id);
            continue;
        }
        println!(
            "{} {} {}",
            ident(&document.id),
            document.name,
            dim(&format!(
                "({} categories, {} entries) {}",
                document.categories.len(),
                document.entry_count(),
                loaded.path.display()
            ))
        );
        if !document.description.is_empty() {
            println!("    {}", dim(&document.description));
        }
    }
}

/// Prints one line per category.
fn list_categories(document: &Document, long: bool) {
    for category in &document.categories {
        if long {
            println!(
                "{} {} {}",
                ident(&category.id),
                category.name,
                dim(&format!("({} entries)", category.entries.len()))
            );
        } else {
            println!("{}", category.id);
        }
    }
}

/// Prints entries of one category, or of every category under its heading.
fn list_document_entries(document: &Document, category: Option<&str>, long: bool) -> ExitCode {
    let Some(id) = category else {
        for category in &document.categories {
            println!("{}", header(&category.name));
            list_entries(category, long, "  ");
        }
        return ExitCode::SUCCESS;
    };

    let Some(category) = document.category(id) else {
        eprintln!("error: no category '{id}' in manual '{}'", document.id);
        return ExitCode::FAILURE;
    };
    list_entries(category, long, "");
    ExitCode::SUCCESS
}

/// Prints the entries of one category.
fn list_entries(category: &Category, long: bool, indent: &str) {
    for entry in &category.entries {
        if long {
            println!(
                "{indent}{} {} {}",
                ident(&entry.id),
                entry.name,
                dim(&entry.description)
            );
        } else {
            println!("{indent}{}", entry.id);
        }
    }
}
