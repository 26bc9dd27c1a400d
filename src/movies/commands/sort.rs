use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::non_empty_catalog;

/// All movies by rating, best first. Equal ratings keep store order.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut movies = non_empty_catalog(store)?;
    // sort_by is stable
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    Ok(CmdResult::default().with_listed_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn orders_by_rating_descending() {
        let store = StoreFixture::new()
            .with_movie("Inception", 2010, 8.8)
            .with_movie("The Dark Knight", 2008, 9.0)
            .with_movie("Interstellar", 2014, 8.6)
            .store;

        let ratings: Vec<f64> = run(&store)
            .unwrap()
            .listed_movies
            .iter()
            .map(|m| m.rating)
            .collect();
        assert_eq!(ratings, vec![9.0, 8.8, 8.6]);
    }

    #[test]
    fn ties_keep_store_order() {
        let store = StoreFixture::new()
            .with_movie("First", 2000, 7.0)
            .with_movie("Top", 2001, 9.0)
            .with_movie("Second", 2002, 7.0)
            .store;

        let titles: Vec<String> = run(&store)
            .unwrap()
            .listed_movies
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Top", "First", "Second"]);
    }

    #[test]
    fn empty_catalog_is_reported() {
        let store = StoreFixture::new().store;
        assert!(matches!(run(&store), Err(CatalogError::EmptyCatalog)));
    }
}
