//! # Rendering Module
//!
//! Styled terminal output: data structs are serialized into the templates in
//! [`super::templates`], and the `style` filter resolves names against
//! [`MOVIES_THEME`]. Colour is auto-detected from stdout unless forced, which
//! the tests do to get plain text.

use super::styles::{names, rating_style, MOVIES_THEME};
use super::templates::{
    CONFIG_TEMPLATE, LIST_TEMPLATE, MENU_TEMPLATE, MESSAGES_TEMPLATE, STATISTICS_TEMPLATE,
};
use console::Term;
use minijinja::{Environment, Value};
use movies::api::{CmdMessage, MessageLevel};
use movies::model::{format_rating, Movie, Statistics};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the title column in movie lists.
pub const TITLE_WIDTH: usize = 48;

#[derive(Serialize)]
struct MovieLineData {
    title: String,
    padding: String,
    rating: String,
    rating_style: &'static str,
    year: String,
}

#[derive(Serialize)]
struct ListData {
    movies: Vec<MovieLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct StatisticsData {
    mean: String,
    median: String,
    best_rating: String,
    best: Vec<String>,
    worst_rating: String,
    worst: Vec<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MenuItem {
    choice: String,
    label: &'static str,
}

#[derive(Serialize)]
struct MenuData {
    items: Vec<MenuItem>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let theme = &*MOVIES_THEME;

    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

pub fn render_movie_list(movies: &[Movie], empty_message: &str) -> String {
    render_movie_list_internal(movies, empty_message, None)
}

fn render_movie_list_internal(
    movies: &[Movie],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let lines = movies
        .iter()
        .map(|m| {
            let title = truncate_to_width(&m.title, TITLE_WIDTH);
            let padding = " ".repeat(TITLE_WIDTH.saturating_sub(title.width()));
            MovieLineData {
                title,
                padding,
                rating: format_rating(m.rating),
                rating_style: rating_style(m.rating),
                year: m.year.to_string(),
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: lines.is_empty(),
        movies: lines,
        empty_message: empty_message.to_string(),
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_statistics(stats: &Statistics) -> String {
    render_statistics_internal(stats, None)
}

fn render_statistics_internal(stats: &Statistics, use_color: Option<bool>) -> String {
    let data = StatisticsData {
        mean: format!("{:.2}", stats.mean),
        median: format!("{:.2}", stats.median),
        best_rating: format_rating(stats.best_rating),
        best: stats.best.clone(),
        worst_rating: format_rating(stats.worst_rating),
        worst: stats.worst.clone(),
    };

    render_template(STATISTICS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(entries: &[(String, String)]) -> String {
    let data = ConfigData {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, None)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_menu(entries: &[(&str, &'static str)]) -> String {
    let data = MenuData {
        items: entries
            .iter()
            .map(|(choice, label)| MenuItem {
                choice: choice.to_string(),
                label: *label,
            })
            .collect(),
    };
    render_template(MENU_TEMPLATE, &data, None)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    if s.width() <= max_width {
        return s.to_string();
    }

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Statistics {
        Statistics {
            count: 3,
            mean: 26.4 / 3.0,
            median: 8.8,
            best_rating: 9.0,
            best: vec!["The Dark Knight".into()],
            worst_rating: 8.6,
            worst: vec!["Interstellar".into()],
        }
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_movie_list_internal(&[], "No movies in database.", Some(false));
        assert_eq!(output.trim(), "No movies in database.");
    }

    #[test]
    fn test_render_list_lines() {
        let movies = vec![
            Movie::new("Inception", 2010, 8.8),
            Movie::new("Cats", 2019, 2.8),
        ];
        let output = render_movie_list_internal(&movies, "", Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Inception"));
        assert!(lines[0].ends_with("8.8  2010"));
        assert!(lines[1].ends_with("2.8  2019"));
        // Columns line up
        assert_eq!(lines[0].find("8.8"), lines[1].find("2.8"));
    }

    #[test]
    fn test_render_list_truncates_long_titles() {
        let long = "A".repeat(80);
        let output = render_movie_list_internal(&[Movie::new(long, 2000, 5.0)], "", Some(false));
        assert!(output.contains('…'));
        assert!(output.lines().next().unwrap().width() < 80);
    }

    #[test]
    fn test_render_statistics() {
        let output = render_statistics_internal(&stats(), Some(false));
        assert!(output.contains("Average rating: 8.80"));
        assert!(output.contains("Median rating: 8.80"));
        assert!(output.contains("Best movie(s) (rating 9.0):\n  The Dark Knight\n"));
        assert!(output.contains("Worst movie(s) (rating 8.6):\n  Interstellar\n"));
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[]).is_empty());
    }

    #[test]
    fn test_render_messages_multiple() {
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::success("Movie added"),
            CmdMessage::error("Error message"),
        ];
        let output = render_messages_internal(&messages, Some(false));
        assert_eq!(output, "Info message\nMovie added\nError message\n");
    }

    #[test]
    fn test_truncate_keeps_short_titles() {
        assert_eq!(truncate_to_width("Heat", 10), "Heat");
        assert_eq!(truncate_to_width("Heat and Dust", 6), "Heat …");
    }
}
