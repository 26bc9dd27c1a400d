//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit codes,
//! and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of `movies`.
//!
//! ## Two Ways In
//!
//! - **Subcommands** (`movies list`, `movies add Heat`, ...): one operation, then
//!   exit. Any error is printed to stderr and the process exits with 1.
//! - **Interactive menu** (`movies` or `movies menu`): the numbered `0`-`9` loop.
//!   Operation errors are reported and the loop carries on; only `0` or end of
//!   input leaves it.
//!
//! Both paths share the same handlers, so a menu choice and its subcommand
//! print the same thing.
//!
//! ## Environment
//!
//! - `MOVIES_HOME`: data directory (config.json, movies.db)
//! - `MOVIES_DB`: database file, same as `--db`
//! - `OMDB_API_KEY` / `API_KEY`: lookup service key, overriding the config
//! - `MOVIES_LOG`: tracing filter (default `warn`, `-v` gives `debug`)
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring, dispatch and per-command handlers
//! - `menu`: The interactive loop
//! - `render`: Output formatting through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod menu;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
