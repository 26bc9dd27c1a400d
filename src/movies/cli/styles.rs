//! Styles for the movies CLI.
//!
//! Templates only ever name semantic styles (`title`, `rating_high`, `error`,
//! …). This module maps each name to a `console::Style`, registered once in
//! [`MOVIES_THEME`]. Unknown names are flagged with `(!?)` so typos in a
//! template show up in the output instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
    pub const RATING_HIGH: &str = "rating_high";
    pub const RATING_MID: &str = "rating_mid";
    pub const RATING_LOW: &str = "rating_low";
    pub const LABEL: &str = "label";
    pub const HEADING: &str = "heading";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` by name; with `use_color` off only the missing-style check remains.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static MOVIES_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::YEAR, Style::new().dim())
        .add(names::RATING_HIGH, Style::new().green())
        .add(names::RATING_MID, Style::new().yellow())
        .add(names::RATING_LOW, Style::new().red())
        .add(names::LABEL, Style::new().cyan())
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::MUTED, Style::new().dim().italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

/// Style name for a rating value.
pub fn rating_style(rating: f64) -> &'static str {
    if rating >= 8.0 {
        names::RATING_HIGH
    } else if rating >= 5.0 {
        names::RATING_MID
    } else {
        names::RATING_LOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(MOVIES_THEME.apply(names::TITLE, "Alien", false), "Alien");
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(MOVIES_THEME.apply("titel", "Alien", false), "(!?) Alien");
    }

    #[test]
    fn ratings_map_to_bands() {
        assert_eq!(rating_style(9.0), names::RATING_HIGH);
        assert_eq!(rating_style(6.5), names::RATING_MID);
        assert_eq!(rating_style(0.0), names::RATING_LOW);
    }
}
