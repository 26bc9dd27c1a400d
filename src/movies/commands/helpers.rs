use crate::error::{CatalogError, Result};
use crate::model::Movie;
use crate::store::CatalogStore;

/// Full catalog, or `EmptyCatalog` when there is nothing to work on.
pub fn non_empty_catalog<S: CatalogStore>(store: &S) -> Result<Vec<Movie>> {
    let movies = store.list()?;
    if movies.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    Ok(movies)
}

/// Exact, case-sensitive title match.
pub fn find_exact<S: CatalogStore>(store: &S, title: &str) -> Result<Movie> {
    store
        .list()?
        .into_iter()
        .find(|m| m.title == title)
        .ok_or_else(|| CatalogError::NotFound(title.to_string()))
}

/// Fails with `AlreadyExists` if any stored title matches ignoring case.
pub fn ensure_title_free<S: CatalogStore>(store: &S, title: &str) -> Result<()> {
    if store.list()?.iter().any(|m| m.same_title(title)) {
        return Err(CatalogError::AlreadyExists(title.to_string()));
    }
    Ok(())
}
