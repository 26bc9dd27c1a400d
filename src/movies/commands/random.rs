use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::format_rating;
use crate::store::CatalogStore;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::helpers::non_empty_catalog;

/// Picks one movie uniformly at random.
pub fn run<S: CatalogStore, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    let movies = non_empty_catalog(store)?;
    let pick = movies.choose(rng).cloned().ok_or(CatalogError::EmptyCatalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Random movie: {}, Rating: {}, Year: {}",
        pick.title,
        format_rating(pick.rating),
        pick.year
    )));
    Ok(result.with_listed_movies(vec![pick]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn picks_a_stored_movie() {
        let store = StoreFixture::new().with_nolan_movies().store;
        let mut rng = StdRng::seed_from_u64(7);

        let result = run(&store, &mut rng).unwrap();
        assert_eq!(result.listed_movies.len(), 1);
        assert!(store.list().unwrap().contains(&result.listed_movies[0]));
    }

    #[test]
    fn every_movie_can_be_picked() {
        let store = StoreFixture::new().with_nolan_movies().store;
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: HashMap<String, usize> = HashMap::new();

        for _ in 0..600 {
            let pick = run(&store, &mut rng).unwrap().listed_movies.remove(0);
            *seen.entry(pick.title).or_default() += 1;
        }

        assert_eq!(seen.len(), 3);
        assert!(seen.values().all(|&n| n > 100));
    }

    #[test]
    fn empty_catalog_has_nothing_to_pick() {
        let store = StoreFixture::new().store;
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            run(&store, &mut rng),
            Err(CatalogError::EmptyCatalog)
        ));
    }
}
