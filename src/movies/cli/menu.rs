//! The interactive `0`-`9` menu.
//!
//! Each choice prompts for whatever it needs, then runs the same handler as
//! the matching subcommand. Errors are printed and the loop continues; `0`
//! or end of input ends it.

use super::commands::{self, AppContext};
use super::render::{print_messages, render_menu};
use colored::Colorize;
use movies::api::CmdMessage;
use movies::error::{CatalogError, Result};
use std::io::{self, BufRead, Write};

const MENU_ENTRIES: &[(&str, &str)] = &[
    ("0", "Exit"),
    ("1", "List all movies"),
    ("2", "Add a movie"),
    ("3", "Delete a movie"),
    ("4", "Update movie rating"),
    ("5", "Show statistics"),
    ("6", "Random movie"),
    ("7", "Search movie"),
    ("8", "Movies sorted by rating"),
    ("9", "Generate website"),
];

/// What the loop does after a choice.
enum Flow {
    Continue,
    Exit,
}

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    run_with(ctx, &mut stdin.lock())
}

fn run_with<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    loop {
        print!("{}", render_menu(MENU_ENTRIES));
        println!();

        let choice = match prompt(input, "Choose an option (0-9): ") {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                println!();
                break;
            }
            // An undecodable line is consumed; report it and ask again.
            Err(CatalogError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                println!();
                print_messages(&[CmdMessage::error(format!("Invalid input: {}", e))]);
                continue;
            }
            // Any other read failure means stdin is gone.
            Err(e) => {
                println!();
                print_messages(&[CmdMessage::error(e.to_string())]);
                break;
            }
        };
        println!();

        match dispatch(ctx, input, choice.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }
    Ok(())
}

fn dispatch<R: BufRead>(ctx: &mut AppContext, input: &mut R, choice: &str) -> Result<Flow> {
    match choice {
        "0" => {
            println!("Bye!");
            return Ok(Flow::Exit);
        }
        "1" => commands::handle_list(ctx)?,
        "2" => {
            let Some(title) = prompt(input, "Please enter movie name: ")? else {
                return Ok(Flow::Exit);
            };
            commands::handle_add(ctx, &title)?;
        }
        "3" => {
            let Some(title) = prompt(input, "What movie should be deleted? ")? else {
                return Ok(Flow::Exit);
            };
            commands::handle_delete(ctx, &title)?;
        }
        "4" => {
            let Some(title) = prompt(input, "Please enter movie name: ")? else {
                return Ok(Flow::Exit);
            };
            ctx.api.find_movie(&title)?;
            let Some(rating) = prompt(input, "Please enter your rating between 1-10: ")? else {
                return Ok(Flow::Exit);
            };
            commands::handle_update(ctx, &title, &rating)?;
        }
        "5" => commands::handle_stats(ctx)?,
        "6" => commands::handle_random(ctx)?,
        "7" => {
            if ctx.api.list_movies()?.listed_movies.is_empty() {
                return Err(CatalogError::EmptyCatalog);
            }
            let Some(term) = prompt(input, "Enter part of movie name: ")? else {
                return Ok(Flow::Exit);
            };
            commands::handle_search(ctx, &term)?;
        }
        "8" => commands::handle_sort(ctx)?,
        "9" => commands::handle_website(ctx, None, None, None)?,
        _ => print_messages(&[CmdMessage::warning("Invalid choice. Please try again.")]),
    }
    Ok(Flow::Continue)
}

/// Prints `label` and reads one line. `None` means end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{}", label.cyan());
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
