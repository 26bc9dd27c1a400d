//! # Movies Architecture
//!
//! `movies` is a small movie catalog: records with a title, release year,
//! rating and poster URL, kept in one SQLite table, with statistics, search
//! and a static website export on top. The library holds all of the logic;
//! the `movies` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive 0-9 menu                 │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and lookup         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, duplicate detection, statistics, search      │
//! │  - Returns Result<CmdResult>, never prints                  │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Storage (store/)            │  │  Collaborators            │
//! │  CatalogStore trait          │  │  lookup.rs (OMDb)         │
//! │  SqliteStore, InMemoryStore  │  │  website.rs (HTML page)   │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`error::CatalogError`] variant. Nothing below the CLI
//! layer is fatal: the interactive menu reports the error and carries on.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Movie`, `Statistics`, rating parsing
//! - [`lookup`]: Metadata lookup trait and the OMDb client
//! - [`website`]: Template-driven HTML export
//! - [`config`]: Persisted configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod store;
pub mod website;
