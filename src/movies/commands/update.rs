use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{format_rating, parse_rating};
use crate::store::CatalogStore;

use super::helpers::find_exact;

/// Sets a new rating from user input. Only the rating changes.
///
/// The rating is validated before the title is resolved, so bad input is
/// reported as such even for an unknown title.
pub fn run<S: CatalogStore>(store: &mut S, title: &str, rating_input: &str) -> Result<CmdResult> {
    let rating = parse_rating(rating_input)?;
    let mut movie = find_exact(store, title)?;

    store.update(&movie.title, rating)?;
    movie.rating = rating;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie rating updated: {}: {}",
        movie.title,
        format_rating(rating)
    )));
    Ok(result.with_affected_movies(vec![movie]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    fn store_with_poster() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store
            .add(&Movie::new("Interstellar", 2014, 8.6).with_poster("i.jpg"))
            .unwrap();
        store
    }

    #[test]
    fn updates_rating_only() {
        let mut store = store_with_poster();
        run(&mut store, "Interstellar", "9.1").unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec![Movie::new("Interstellar", 2014, 9.1).with_poster("i.jpg")]
        );
    }

    #[test]
    fn out_of_range_leaves_store_unchanged() {
        let mut store = store_with_poster();
        let before = store.list().unwrap();

        let err = run(&mut store, "Interstellar", "11").unwrap_err();
        assert!(matches!(err, CatalogError::OutOfRange(_)));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn non_numeric_leaves_store_unchanged() {
        let mut store = store_with_poster();
        let before = store.list().unwrap();

        let err = run(&mut store, "Interstellar", "abc").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn invalid_rating_wins_over_unknown_title() {
        let mut store = store_with_poster();
        assert!(matches!(
            run(&mut store, "X", "11"),
            Err(CatalogError::OutOfRange(_))
        ));
        assert!(matches!(
            run(&mut store, "X", "abc"),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_title_is_not_found() {
        let mut store = store_with_poster();
        assert!(matches!(
            run(&mut store, "X", "5"),
            Err(CatalogError::NotFound(_))
        ));
    }
}
