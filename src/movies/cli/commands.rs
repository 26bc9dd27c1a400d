use super::menu;
use super::render::{print_messages, render_config, render_movie_list, render_statistics};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use movies::api::{CatalogApi, CatalogPaths, ConfigAction};
use movies::config::CatalogConfig;
use movies::error::{CatalogError, Result};
use movies::lookup::OmdbClient;
use movies::store::sqlite::SqliteStore;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EMPTY_LIST_MESSAGE: &str = "No movies in database.";

pub(super) struct AppContext {
    pub(super) api: CatalogApi<SqliteStore, OmdbClient>,
    pub(super) config: CatalogConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A `.env` in the working directory (or a parent) may carry API_KEY; real env vars win.
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add {
            title,
            year,
            rating,
            poster,
        }) => {
            let title = title.join(" ");
            match rating {
                Some(rating) => {
                    handle_add_manual(&mut ctx, &title, year.unwrap_or(0), &rating, poster)
                }
                None => handle_add(&mut ctx, &title),
            }
        }
        Some(Commands::Delete { title }) => handle_delete(&mut ctx, &title.join(" ")),
        Some(Commands::Update { title, rating }) => handle_update(&mut ctx, &title, &rating),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Random) => handle_random(&ctx),
        Some(Commands::Search { term }) => handle_search(&ctx, &term.join(" ")),
        Some(Commands::Sort) => handle_sort(&ctx),
        Some(Commands::Website {
            template,
            output,
            title,
        }) => handle_website(&ctx, template, output, title),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Menu) | None => menu::run(&mut ctx),
    };

    // The store is closed on every path; an operation error still wins.
    let closed = ctx.api.into_store().close();
    outcome.and(closed)
}

fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_env("MOVIES_LOG") {
        Ok(f) => f,
        Err(_) => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("MOVIES_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "movies", "movies")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut paths = CatalogPaths::new(data_dir()?);
    if let Some(db) = &cli.db {
        paths = paths.with_database(db.clone());
    }
    paths.ensure_data_dir()?;

    let config = CatalogConfig::load(&paths.data_dir)?.with_env_overrides();
    tracing::debug!(
        data_dir = %paths.data_dir.display(),
        database = %paths.database.display(),
        "initializing catalog"
    );

    let store = SqliteStore::open(&paths.database)?;
    let lookup = OmdbClient::new(
        config.api_url.clone(),
        config.api_key.clone(),
        Duration::from_secs(config.timeout_secs),
    );
    let api = CatalogApi::new(store, lookup, paths);

    Ok(AppContext { api, config })
}

pub(super) fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_movies()?;
    print_messages(&result.messages);
    print!("{}", render_movie_list(&result.listed_movies, EMPTY_LIST_MESSAGE));
    Ok(())
}

pub(super) fn handle_add(ctx: &mut AppContext, title: &str) -> Result<()> {
    let result = ctx.api.add_movie(title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_add_manual(
    ctx: &mut AppContext,
    title: &str,
    year: i32,
    rating: &str,
    poster: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_movie_manually(title, year, rating, poster)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_delete(ctx: &mut AppContext, title: &str) -> Result<()> {
    let result = ctx.api.delete_movie(title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_update(ctx: &mut AppContext, title: &str, rating: &str) -> Result<()> {
    let result = ctx.api.update_rating(title, rating)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.statistics {
        print!("{}", render_statistics(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_random(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.random_movie()?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_movies(term)?;
    if !result.listed_movies.is_empty() {
        print!("{}", render_movie_list(&result.listed_movies, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_sort(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.movies_by_rating()?;
    println!("Movies sorted by rating (best to worst):");
    print!("{}", render_movie_list(&result.listed_movies, EMPTY_LIST_MESSAGE));
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_website(
    ctx: &AppContext,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    title: Option<String>,
) -> Result<()> {
    let template = template.unwrap_or_else(|| ctx.config.template.clone());
    let output = output.unwrap_or_else(|| ctx.config.output.clone());
    let title = title.unwrap_or_else(|| ctx.config.site_title.clone());

    let result = ctx.api.generate_website(&template, &output, &title)?;
    print_messages(&result.messages);
    if let Some(path) = &result.output_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(&config.entries()));
        ctx.config = config.clone().with_env_overrides();
    }
    print_messages(&result.messages);
    Ok(())
}
