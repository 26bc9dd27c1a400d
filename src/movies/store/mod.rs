//! # Storage Layer
//!
//! The [`CatalogStore`] trait is the persistence boundary of the catalog. It is
//! a plain keyed table: records are identified by their exact title, and the
//! store knows nothing about case-insensitive duplicates or rating ranges.
//! Those rules live in the command layer.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: production storage in a single SQLite file
//!   - One `movies` table, `title` is the primary key
//!   - Every operation is one SQL statement, so a crash never leaves a
//!     half-written row
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Ordering
//!
//! `list` returns records in insertion order. Search, statistics ties and the
//! rendered website all inherit that order.

use crate::error::Result;
use crate::model::Movie;

pub mod memory;
pub mod sqlite;

/// Abstract interface for movie storage.
pub trait CatalogStore {
    /// All records, in insertion order.
    fn list(&self) -> Result<Vec<Movie>>;

    /// Insert a new record. Fails with `DuplicateKey` if the exact title exists.
    fn add(&mut self, movie: &Movie) -> Result<()>;

    /// Remove the record with this exact title. Fails with `NotFound` if absent.
    fn delete(&mut self, title: &str) -> Result<()>;

    /// Set the rating of the record with this exact title. Fails with `NotFound` if absent.
    fn update(&mut self, title: &str, rating: f64) -> Result<()>;
}
