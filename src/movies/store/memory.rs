use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }
}

impl CatalogStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    fn add(&mut self, movie: &Movie) -> Result<()> {
        if self.position(&movie.title).is_some() {
            return Err(CatalogError::DuplicateKey(movie.title.clone()));
        }
        self.movies.push(movie.clone());
        Ok(())
    }

    fn delete(&mut self, title: &str) -> Result<()> {
        let idx = self
            .position(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;
        self.movies.remove(idx);
        Ok(())
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<()> {
        let idx = self
            .position(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;
        self.movies[idx].rating = rating;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_movie(mut self, title: &str, year: i32, rating: f64) -> Self {
            self.store
                .add(&Movie::new(title, year, rating))
                .expect("fixture titles must be unique");
            self
        }

        /// Inception (8.8), Interstellar (8.6), The Dark Knight (9.0).
        pub fn with_nolan_movies(self) -> Self {
            self.with_movie("Inception", 2010, 8.8)
                .with_movie("Interstellar", 2014, 8.6)
                .with_movie("The Dark Knight", 2008, 9.0)
        }
    }
}
