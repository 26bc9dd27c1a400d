use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "movies", bin_name = "movies", version = get_version())]
#[command(
    about = "A small movie catalog: add, rate, search and publish your movies",
    long_about = None
)]
pub struct Cli {
    /// Without a command, the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog database (defaults to movies.db in the data directory)
    #[arg(long, global = true, env = "MOVIES_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a movie, looking up its details online unless --rating is given
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Release year, for entering a movie by hand
        #[arg(long, requires = "rating")]
        year: Option<i32>,

        /// Rating between 1 and 10; skips the online lookup
        #[arg(long, allow_hyphen_values = true)]
        rating: Option<String>,

        /// Poster URL, for entering a movie by hand
        #[arg(long, requires = "rating")]
        poster: Option<String>,
    },

    /// Delete a movie by its exact title
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Update the rating of a movie
    #[command(display_order = 4)]
    Update {
        /// Exact title of the movie
        title: String,

        /// New rating between 1 and 10
        #[arg(allow_hyphen_values = true)]
        rating: String,
    },

    /// Show rating statistics
    #[command(display_order = 5)]
    Stats,

    /// Pick a random movie
    #[command(display_order = 6)]
    Random,

    /// Search titles (case-insensitive substring)
    #[command(display_order = 7)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List movies sorted by rating, best first
    #[command(display_order = 8)]
    Sort,

    /// Generate the static website
    #[command(display_order = 9)]
    Website {
        /// Template file (defaults to the configured template)
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,

        /// Output file (defaults to the configured output)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Page title (defaults to the configured site title)
        #[arg(long)]
        title: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g., api-key, site-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive menu
    #[command(display_order = 11)]
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_means_menu() {
        let cli = Cli::try_parse_from(["movies"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_joins_title_words_and_accepts_manual_fields() {
        let cli = Cli::try_parse_from([
            "movies", "add", "The", "Dark", "Knight", "--rating", "9", "--year", "2008",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                year,
                rating,
                poster,
            }) => {
                assert_eq!(title.join(" "), "The Dark Knight");
                assert_eq!(year, Some(2008));
                assert_eq!(rating.as_deref(), Some("9"));
                assert!(poster.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn year_requires_rating() {
        assert!(Cli::try_parse_from(["movies", "add", "Alien", "--year", "1979"]).is_err());
    }

    #[test]
    fn search_joins_term_words() {
        let cli = Cli::try_parse_from(["movies", "search", "dark", "knight"]).unwrap();
        match cli.command {
            Some(Commands::Search { term }) => assert_eq!(term.join(" "), "dark knight"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn update_accepts_negative_rating_text() {
        let cli = Cli::try_parse_from(["movies", "update", "Alien", "-3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update { ref rating, .. }) if rating == "-3"
        ));
    }
}
