//! # Movies CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into exit code 1.
//!
//! ```text
//! movies                      interactive menu (0-9)
//! movies list                 every movie, in insertion order
//! movies add Blade Runner     look the movie up online and store it
//! movies add Heat --rating 8.3 --year 1995
//! movies update Heat 9
//! movies website --output public/index.html
//! ```
//!
//! Rendering goes through minijinja templates in `cli/templates/`, embedded at
//! compile time, so layout changes stay out of the handler code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
