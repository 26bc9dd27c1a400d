use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Movie, Statistics};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod random;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;
pub mod website;

/// Where the catalog keeps its database and config.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub data_dir: PathBuf,
    pub database: PathBuf,
}

impl CatalogPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        let database = data_dir.join("movies.db");
        Self { data_dir, database }
    }

    pub fn with_database(mut self, database: PathBuf) -> Self {
        self.database = database;
        self
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(CatalogError::Io)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<Movie>,
    pub statistics: Option<Statistics>,
    pub output_path: Option<PathBuf>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
