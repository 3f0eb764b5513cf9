//! Free-text search over catalog exercises and equipment.

use crate::catalog::{Equipment, Exercise};
use crate::search::SearchHits;
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Which part of the catalog to search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Exercise,
    Equipment,
    #[default]
    All,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search words. Every word must match; partial words match by prefix
    /// ("dumb row" finds "Dumbbell Row"). An empty query lists everything.
    pub query: String,
    /// Catalog section to search (default: all)
    #[serde(default)]
    pub kind: SearchKind,
    /// Maximum results per section (default and cap come from server config)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a catalog search and render the matches.
pub async fn handle_search(state: &CatalogState, request: SearchRequest) -> Result<String, String> {
    let catalog = state.catalog().await;
    let limit = state.config().effective_limit(request.limit);

    tracing::debug!(
        "search query='{}' kind={:?} limit={}",
        request.query,
        request.kind,
        limit
    );

    let exercises = matches!(request.kind, SearchKind::Exercise | SearchKind::All)
        .then(|| catalog.exercises().search_limited(&request.query, limit));
    let equipment = matches!(request.kind, SearchKind::Equipment | SearchKind::All)
        .then(|| catalog.equipment().search_limited(&request.query, limit));

    let total = exercises.as_ref().map_or(0, |hits| hits.total)
        + equipment.as_ref().map_or(0, |hits| hits.total);

    if total == 0 {
        return Ok(format!(
            "No results found for '{}'.\n\n\
             Search tips:\n\
             • Every word must match, so try fewer words\n\
             • Partial words work: 'dead' finds 'Deadlift'\n\
             • Alternate names are searchable: 'DB' for 'Dumbbell'\n",
            request.query
        ));
    }

    let mut output = format!("Search results for '{}':\n", request.query);
    if let Some(hits) = &exercises {
        format_section(&mut output, "Exercises", hits, format_exercise);
    }
    if let Some(hits) = &equipment {
        format_section(&mut output, "Equipment", hits, format_equipment);
    }

    Ok(output)
}

fn format_section<T>(
    output: &mut String,
    title: &str,
    hits: &SearchHits<'_, T>,
    format_item: fn(&mut String, &T),
) {
    let _ = writeln!(output, "\n{} ({} of {}):", title, hits.items.len(), hits.total);
    if hits.total == 0 {
        output.push_str("  (none)\n");
        return;
    }
    for item in &hits.items {
        format_item(output, item);
    }
    if hits.total > hits.items.len() {
        let _ = writeln!(output, "  ... and {} more", hits.total - hits.items.len());
    }
}

fn format_exercise(output: &mut String, exercise: &Exercise) {
    let _ = write!(output, "  • [{}] {}", exercise.id, exercise.name);
    if !exercise.alternate_names.is_empty() {
        let _ = write!(output, " (also: {})", exercise.alternate_names.join(", "));
    }
    output.push('\n');
}

fn format_equipment(output: &mut String, equipment: &Equipment) {
    let _ = write!(output, "  • [{}] {}", equipment.id, equipment.name);
    if let Some(category) = &equipment.category {
        let _ = write!(output, " - {}", category);
    }
    output.push('\n');
}
