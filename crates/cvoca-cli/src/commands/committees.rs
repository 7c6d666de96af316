//! Committee roster command.

use cvoca_core::search_committees;
use cvoca_store::EventStore;

use crate::error::CliResult;
use crate::render::format_committee;

/// Text shown when no committee matches.
pub const NO_COMMITTEES_TEXT: &str = "No committees found.";

/// Shows the committee rosters, optionally narrowed by a search query.
pub async fn list(store: &EventStore, search: Option<&str>) -> CliResult<String> {
    let mut committees = store.load_committees().await;
    if let Some(query) = search.filter(|q| !q.trim().is_empty()) {
        committees = search_committees(&committees, query.trim());
    }

    if committees.is_empty() {
        return Ok(NO_COMMITTEES_TEXT.to_string());
    }
    Ok(committees
        .iter()
        .map(format_committee)
        .collect::<Vec<_>>()
        .join("\n\n"))
}
