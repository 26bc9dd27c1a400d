//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every catalog operation, whichever UI drives it.
//!
//! It dispatches to `commands/*.rs`, hands them the store and the metadata
//! lookup it owns, and returns `Result<CmdResult>`. It never prints and holds
//! no business rules of its own.
//!
//! ## Generic Over Store and Lookup
//!
//! `CatalogApi<S: CatalogStore, L: MetadataLookup>`:
//! - Production: `CatalogApi<SqliteStore, OmdbClient>`
//! - Testing: `CatalogApi<InMemoryStore, _>` with a canned lookup

use crate::commands;
use crate::error::Result;
use crate::lookup::MetadataLookup;
use crate::model::Movie;
use crate::store::CatalogStore;
use std::path::Path;

/// The main API facade for catalog operations.
pub struct CatalogApi<S: CatalogStore, L: MetadataLookup> {
    store: S,
    lookup: L,
    paths: commands::CatalogPaths,
}

impl<S: CatalogStore, L: MetadataLookup> CatalogApi<S, L> {
    pub fn new(store: S, lookup: L, paths: commands::CatalogPaths) -> Self {
        Self {
            store,
            lookup,
            paths,
        }
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::add::from_lookup(&mut self.store, &self.lookup, title)
    }

    pub fn add_movie_manually(
        &mut self,
        title: &str,
        year: i32,
        rating: &str,
        poster: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::add::manual(&mut self.store, title, year, rating, poster)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn update_rating(&mut self, title: &str, rating: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, title, rating)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.store, &mut rand::rng())
    }

    pub fn search_movies(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn movies_by_rating(&self) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store)
    }

    pub fn generate_website(
        &self,
        template: &Path,
        output: &Path,
        page_title: &str,
    ) -> Result<commands::CmdResult> {
        commands::website::run(&self.store, template, output, page_title)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Exact-title lookup, for UIs that confirm a movie exists before asking for more input.
    pub fn find_movie(&self, title: &str) -> Result<Movie> {
        commands::helpers::find_exact(&self.store, title)
    }

    /// Hands the store back, e.g. to close it explicitly.
    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel};
