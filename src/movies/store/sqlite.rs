use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use rusqlite::{params, Connection, ErrorCode};
use std::fs;
use std::path::Path;
use tracing::debug;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS movies (
    title TEXT PRIMARY KEY,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster TEXT NOT NULL
)";

/// SQLite-backed catalog. Owns its connection until [`SqliteStore::close`] or drop.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file, creating parent directories as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        debug!(path = %path.display(), "opening catalog database");
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(CREATE_TABLE, [])?;
        Ok(Self { conn })
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| CatalogError::Database(e))
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl CatalogStore for SqliteStore {
    fn list(&self) -> Result<Vec<Movie>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, year, rating, poster FROM movies ORDER BY rowid ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Movie {
                title: row.get(0)?,
                year: row.get(1)?,
                rating: row.get(2)?,
                poster: row.get(3)?,
            })
        })?;

        let mut movies = Vec::new();
        for movie in rows {
            movies.push(movie?);
        }
        Ok(movies)
    }

    fn add(&mut self, movie: &Movie) -> Result<()> {
        let inserted = self.conn.execute(
            "INSERT INTO movies (title, year, rating, poster) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster],
        );
        match inserted {
            Ok(_) => {
                debug!(title = %movie.title, "inserted movie");
                Ok(())
            }
            Err(e) if is_constraint_violation(&e) => {
                Err(CatalogError::DuplicateKey(movie.title.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, title: &str) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM movies WHERE title = ?1", params![title])?;
        if removed == 0 {
            return Err(CatalogError::NotFound(title.to_string()));
        }
        debug!(title, "deleted movie");
        Ok(())
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE movies SET rating = ?1 WHERE title = ?2",
            params![rating, title],
        )?;
        if changed == 0 {
            return Err(CatalogError::NotFound(title.to_string()));
        }
        debug!(title, rating, "updated movie rating");
        Ok(())
    }
}
