//! Implementation of `sysman search`.

use std::process::ExitCode;

use sysman_search::{CategoryMatches, SearchMode, search_document, search_entries_scored, tokenize};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonGroup, JsonSearchOutput, print_json, print_search_results},
};

/// Ranks entries of the selected manual against the query.
///
/// With `--category` only that category is filtered, using the live threshold. Otherwise
/// every category is searched with the advanced threshold and results are grouped.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };
    let loaded = match ctx.select_manual(&library) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let document = &loaded.document;

    let query = cmd.query.join(" ");
    let tokens = tokenize(&query);
    let params = ctx.config.search_params().with_override(cmd.min_score);

    let (mode, groups) = if let Some(category_id) = &cmd.category {
        let Some(category) = document.category(category_id) else {
            eprintln!(
                "error: no category '{category_id}' in manual '{}'",
                document.id
            );
            return ExitCode::FAILURE;
        };
        let min_score = params.min_score(SearchMode::Live);
        let entries = search_entries_scored(&category.entries, &query, min_score);
        let groups = if entries.is_empty() {
            Vec::new()
        } else {
            vec![CategoryMatches { category, entries }]
        };
        (SearchMode::Live, groups)
    } else {
        let min_score = params.min_score(SearchMode::Advanced);
        (SearchMode::Advanced, search_document(document, &query, min_score))
    };

    if cmd.json {
        let output = JsonSearchOutput {
            query: &query,
            tokens: &tokens,
            mode,
            min_score: params.min_score(mode),
            groups: groups
                .iter()
                .map(|group| JsonGroup::from_matches(group, &tokens, cmd.explain))
                .collect(),
        };
        return print_json(&output);
    }

    print_search_results(&groups, &tokens, cmd.explain);
    ExitCode::SUCCESS
}
