use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::lookup::{LookupOutcome, MetadataLookup};
use crate::model::{format_rating, parse_rating, Movie, NO_POSTER};
use crate::store::CatalogStore;
use tracing::info;

use super::helpers::ensure_title_free;

/// Adds a movie resolved through the metadata lookup.
///
/// The duplicate check runs before the lookup so an existing title never
/// costs a network call.
pub fn from_lookup<S: CatalogStore, L: MetadataLookup + ?Sized>(
    store: &mut S,
    lookup: &L,
    title: &str,
) -> Result<CmdResult> {
    let title = require_title(title)?;
    ensure_title_free(store, title)?;

    let movie = match lookup.lookup(title) {
        LookupOutcome::Found(movie) => movie,
        LookupOutcome::NotFound => return Err(CatalogError::RemoteNotFound(title.to_string())),
        LookupOutcome::Unreachable(reason) => return Err(CatalogError::Unreachable(reason)),
    };

    // The service may return a canonical title that differs from the request.
    if movie.title != title {
        ensure_title_free(store, &movie.title)?;
    }

    insert(store, movie)
}

/// Adds a movie from user-entered fields, without consulting the lookup.
pub fn manual<S: CatalogStore>(
    store: &mut S,
    title: &str,
    year: i32,
    rating_input: &str,
    poster: Option<String>,
) -> Result<CmdResult> {
    let title = require_title(title)?;
    let rating = parse_rating(rating_input)?;
    ensure_title_free(store, title)?;

    let poster = poster
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| NO_POSTER.to_string());
    insert(store, Movie::new(title, year, rating).with_poster(poster))
}

fn require_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CatalogError::InvalidInput("title cannot be empty".into()));
    }
    Ok(title)
}

fn insert<S: CatalogStore>(store: &mut S, movie: Movie) -> Result<CmdResult> {
    store.add(&movie)?;
    info!(title = %movie.title, "movie added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "New movie added: {}, Rating: {}, Year: {}, Poster: {}",
        movie.title,
        format_rating(movie.rating),
        movie.year,
        movie.poster
    )));
    Ok(result.with_affected_movies(vec![movie]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::cell::Cell;

    struct FakeLookup {
        outcome: LookupOutcome,
        calls: Cell<usize>,
    }

    impl FakeLookup {
        fn new(outcome: LookupOutcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl MetadataLookup for FakeLookup {
        fn lookup(&self, _title: &str) -> LookupOutcome {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn found(movie: Movie) -> FakeLookup {
        FakeLookup::new(LookupOutcome::Found(movie))
    }

    #[test]
    fn adds_movie_from_lookup() {
        let mut store = InMemoryStore::new();
        let movie = Movie::new("Inception", 2010, 8.8).with_poster("https://img/i.jpg");
        let lookup = found(movie.clone());

        let result = from_lookup(&mut store, &lookup, "inception").unwrap();
        assert_eq!(result.affected_movies, vec![movie.clone()]);
        assert_eq!(store.list().unwrap(), vec![movie]);
    }

    #[test]
    fn existing_title_in_any_case_is_rejected_before_lookup() {
        let mut store = StoreFixture::new().with_nolan_movies().store;
        let lookup = found(Movie::new("Inception", 2010, 8.8));

        let err = from_lookup(&mut store, &lookup, "INCEPTION").unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists(_)));
        assert_eq!(lookup.calls.get(), 0);
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn canonical_title_collision_is_rejected() {
        let mut store = StoreFixture::new().with_nolan_movies().store;
        let lookup = found(Movie::new("The Dark Knight", 2008, 9.0));

        let err = from_lookup(&mut store, &lookup, "dark knight").unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists(_)));
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn remote_not_found_writes_nothing() {
        let mut store = InMemoryStore::new();
        let lookup = FakeLookup::new(LookupOutcome::NotFound);

        let err = from_lookup(&mut store, &lookup, "Nope").unwrap_err();
        assert!(matches!(err, CatalogError::RemoteNotFound(t) if t == "Nope"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn unreachable_writes_nothing() {
        let mut store = InMemoryStore::new();
        let lookup = FakeLookup::new(LookupOutcome::Unreachable("offline".into()));

        let err = from_lookup(&mut store, &lookup, "Inception").unwrap_err();
        assert!(matches!(err, CatalogError::Unreachable(_)));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn manual_add_stores_exact_fields() {
        let mut store = InMemoryStore::new();
        manual(&mut store, "Alien", 1979, "8.5", Some("a.jpg".into())).unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec![Movie::new("Alien", 1979, 8.5).with_poster("a.jpg")]
        );
    }

    #[test]
    fn manual_add_defaults_poster() {
        let mut store = InMemoryStore::new();
        manual(&mut store, "Alien", 1979, "8.5", None).unwrap();
        assert_eq!(store.list().unwrap()[0].poster, NO_POSTER);
    }

    #[test]
    fn manual_add_validates_rating_and_title() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            manual(&mut store, "Alien", 1979, "eleven", None),
            Err(CatalogError::InvalidInput(_))
        ));
        assert!(matches!(
            manual(&mut store, "Alien", 1979, "11", None),
            Err(CatalogError::OutOfRange(_))
        ));
        assert!(matches!(
            manual(&mut store, "  ", 1979, "5", None),
            Err(CatalogError::InvalidInput(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn second_add_of_same_title_keeps_store_size() {
        let mut store = InMemoryStore::new();
        manual(&mut store, "Alien", 1979, "8.5", None).unwrap();
        let err = manual(&mut store, "alien", 1979, "8.5", None).unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists(_)));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
