use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::non_empty_catalog;

/// Case-insensitive substring match on titles, in store order.
pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let movies = non_empty_catalog(store)?;
    let term_lower = term.to_lowercase();

    let matches: Vec<_> = movies
        .into_iter()
        .filter(|m| m.title.to_lowercase().contains(&term_lower))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No movies found matching your search."));
    }
    Ok(result.with_listed_movies(matches))
}
