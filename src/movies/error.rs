use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Movie '{0}' is already stored")]
    DuplicateKey(String),

    #[error("Movie '{0}' not found")]
    NotFound(String),

    #[error("Movie '{0}' is already in the database")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rating must be between 1 and 10 (got {0})")]
    OutOfRange(f64),

    #[error("No movies in database")]
    EmptyCatalog,

    #[error("Movie lookup service is not reachable: {0}")]
    Unreachable(String),

    #[error("Movie '{0}' was not found by the lookup service")]
    RemoteNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
