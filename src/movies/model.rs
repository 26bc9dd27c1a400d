use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Poster value stored when no poster URL is known.
pub const NO_POSTER: &str = "N/A";

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: NO_POSTER.to_string(),
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    /// Case-insensitive title comparison, used for duplicate detection.
    pub fn same_title(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }
}

/// Aggregates over the ratings of the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    /// Rounded once from the exact sum of the ratings.
    pub mean: f64,
    pub median: f64,
    pub best_rating: f64,
    pub best: Vec<String>,
    pub worst_rating: f64,
    pub worst: Vec<String>,
}

/// Parses a user-entered rating and checks it against `[MIN_RATING, MAX_RATING]`.
pub fn parse_rating(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let rating: f64 = trimmed
        .parse()
        .map_err(|_| CatalogError::InvalidInput(format!("rating must be a number, got '{}'", trimmed)))?;
    if !rating.is_finite() {
        return Err(CatalogError::InvalidInput(format!(
            "rating must be a number, got '{}'",
            trimmed
        )));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CatalogError::OutOfRange(rating));
    }
    Ok(rating)
}

/// Formats a rating the way it is shown to users: always with a decimal part.
pub fn format_rating(rating: f64) -> String {
    format!("{:?}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_ratings() {
        assert_eq!(parse_rating("8.5").unwrap(), 8.5);
        assert_eq!(parse_rating(" 1 ").unwrap(), 1.0);
        assert_eq!(parse_rating("10").unwrap(), 10.0);
    }

    #[test]
    fn rejects_non_numeric_rating() {
        assert!(matches!(
            parse_rating("abc"),
            Err(CatalogError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_rating("NaN"),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert!(matches!(parse_rating("11"), Err(CatalogError::OutOfRange(r)) if r == 11.0));
        assert!(matches!(parse_rating("0.5"), Err(CatalogError::OutOfRange(_))));
    }

    #[test]
    fn formats_ratings_with_decimal() {
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_rating(8.8), "8.8");
    }

    #[test]
    fn title_comparison_ignores_case() {
        let movie = Movie::new("Inception", 2010, 8.8);
        assert!(movie.same_title("inception"));
        assert!(!movie.same_title("Interstellar"));
    }
}
