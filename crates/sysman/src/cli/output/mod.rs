//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use sysman_document::{Category, Entry};
pub use sysman_highlight::{dim, header, ident, subheader, success, warning};
use sysman_highlight::{Highlighter, rule};
use sysman_search::{CategoryMatches, Field, FieldScores, SearchMode, score_entry_detailed};

/// JSON output for `sysman search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    /// The raw query string.
    pub query: &'a str,
    /// Tokens the query was split into.
    pub tokens: &'a [String],
    /// Which search was run.
    pub mode: SearchMode,
    /// Threshold applied.
    pub min_score: f64,
    /// Results grouped by category.
    pub groups: Vec<JsonGroup<'a>>,
}

/// One category's results in JSON output.
#[derive(Serialize)]
pub struct JsonGroup<'a> {
    /// Category id.
    pub category: &'a str,
    /// Category display name.
    pub name: &'a str,
    /// Matches, best first.
    pub results: Vec<JsonResult<'a>>,
}

/// A single match in JSON output.
#[derive(Serialize)]
pub struct JsonResult<'a> {
    /// Entry id.
    pub id: &'a str,
    /// Entry name.
    pub name: &'a str,
    /// Entry description.
    pub description: &'a str,
    /// Relevance score, absent for an empty query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Per-field contributions, with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldScores>,
}

impl<'a> JsonGroup<'a> {
    /// Builds a JSON group from search matches.
    pub fn from_matches(group: &CategoryMatches<'a>, tokens: &[String], explain: bool) -> Self {
        Self {
            category: &group.category.id,
            name: &group.category.name,
            results: group
                .entries
                .iter()
                .map(|scored| JsonResult {
                    id: &scored.entry.id,
                    name: &scored.entry.name,
                    description: &scored.entry.description,
                    score: scored.score,
                    fields: (explain && scored.score.is_some())
                        .then(|| score_entry_detailed(scored.entry, tokens)),
                })
                .collect(),
        }
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints grouped search results.
pub fn print_search_results(groups: &[CategoryMatches<'_>], tokens: &[String], explain: bool) {
    if groups.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }

    let mut total = 0;
    for group in groups {
        println!(
            "{} {}",
            header(&group.category.name),
            dim(&format!("({})", group.category.id))
        );
        for scored in &group.entries {
            total += 1;
            let score = scored
                .score
                .map(|s| dim(&format!("{s:.3}")))
                .unwrap_or_default();
            println!("  {} {} {score}", ident(&scored.entry.id), scored.entry.name);
            if !scored.entry.description.is_empty() {
                println!("      {}", dim(&scored.entry.description));
            }
            if explain && scored.score.is_some() {
                print_explanation(scored.entry, tokens);
            }
        }
        println!();
    }

    println!(
        "{}",
        dim(&format!("─── {total} results in {} categories ───", groups.len()))
    );
}

/// Prints the per-field score breakdown for one entry.
fn print_explanation(entry: &Entry, tokens: &[String]) {
    let scores = score_entry_detailed(entry, tokens);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Field", "Weight", "Contribution"]);
    for field in Field::ALL {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(format!("{:.1}", field.weight())),
            Cell::new(format!("{:.3}", scores.get(field))),
        ]);
    }
    table.add_row(vec![
        Cell::new("total"),
        Cell::new(""),
        Cell::new(format!("{:.3}", scores.total())),
    ]);

    for line in table.to_string().lines() {
        println!("      {line}");
    }
}

/// Prints an entry in full: every field, examples highlighted as shell.
pub fn print_entry(category: &Category, entry: &Entry, highlighter: &Highlighter) {
    println!(
        "{} {}",
        header(&entry.name),
        dim(&format!("({} in {})", entry.id, category.name))
    );
    println!("{}", rule(40));

    if !entry.description.is_empty() {
        println!("{}", entry.description);
        println!();
    }

    if !entry.content.is_empty() {
        for (key, value) in &entry.content {
            println!("{} {value}", subheader(&format!("{key}:")));
        }
        println!();
    }

    if !entry.examples.is_empty() {
        println!("{}", subheader("Examples:"));
        for example in &entry.examples {
            let (command, description) = example.parts();
            print!("  $ {}", highlighter.highlight_shell(command));
            println!();
            if let Some(description) = description {
                println!("    {}", dim(description));
            }
        }
        println!();
    }

    if !entry.details.is_empty() {
        println!("{}", subheader("Details:"));
        for detail in &entry.details {
            println!("  {}", subheader(&detail.label));
            for line in detail.value.lines() {
                println!("    {line}");
            }
        }
        println!();
    }

    if !entry.notes.is_empty() {
        println!("{}", subheader("Notes:"));
        for line in entry.notes.lines() {
            println!("  {line}");
        }
    }
}
