use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let movies = store.list()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} movies in total",
        movies.len()
    )));
    Ok(result.with_listed_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_movies_with_total() {
        let store = StoreFixture::new().with_nolan_movies().store;
        let result = run(&store).unwrap();

        assert_eq!(result.listed_movies.len(), 3);
        assert_eq!(result.messages[0].content, "3 movies in total");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = StoreFixture::new().store;
        let result = run(&store).unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages[0].content, "0 movies in total");
    }
}
