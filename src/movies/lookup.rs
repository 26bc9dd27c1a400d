//! # Metadata Lookup
//!
//! Resolves a title to year, rating and poster through an external service.
//! The production client talks to the OMDb HTTP API; tests substitute their own
//! [`MetadataLookup`] implementation.
//!
//! Every call has exactly three outcomes, see [`LookupOutcome`]. No retries are
//! made: a failed lookup aborts the single operation that asked for it.

use crate::model::{Movie, NO_POSTER};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_API_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Movie),
    /// The service answered but has no match for the title.
    NotFound,
    /// Transport failure, non-success status or unusable response.
    Unreachable(String),
}

pub trait MetadataLookup {
    fn lookup(&self, title: &str) -> LookupOutcome;
}

/// Raw OMDb response. Every field is optional; OMDb reports missing values as `"N/A"`.
#[derive(Debug, Deserialize)]
pub struct OmdbResponse {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl OmdbResponse {
    pub fn is_match(&self) -> bool {
        self.response.as_deref() != Some("False")
    }

    /// Converts the response into a record, falling back to `requested` for a missing title.
    pub fn into_movie(self, requested: &str) -> Movie {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| requested.to_string());
        let year = self.year.as_deref().map(parse_year).unwrap_or(0);
        let rating = self.imdb_rating.as_deref().map(parse_rating).unwrap_or(0.0);
        let poster = self.poster.unwrap_or_else(|| NO_POSTER.to_string());
        Movie {
            title,
            year,
            rating,
            poster,
        }
    }
}

/// Leading digits of the year field ("2010", "2008–2013"), or 0.
fn parse_year(raw: &str) -> i32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn parse_rating(raw: &str) -> f64 {
    match raw.trim() {
        "N/A" => 0.0,
        other => other.parse::<f64>().ok().filter(|r| r.is_finite()).unwrap_or(0.0),
    }
}

/// OMDb client. The HTTP client is built on the first lookup, so commands that
/// never look anything up do not start one.
pub struct OmdbClient {
    client: OnceCell<Client>,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: OnceCell::new(),
            base_url: base_url.into(),
            api_key,
            timeout,
        }
    }

    fn client(&self) -> Result<&Client, String> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| format!("cannot build HTTP client: {}", e))
        })
    }

    fn fetch(&self, title: &str, api_key: &str) -> Result<OmdbResponse, String> {
        let response = self
            .client()?
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", api_key)])
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(format!("service answered with status {}", status));
        }
        response
            .json::<OmdbResponse>()
            .map_err(|e| format!("unreadable response: {}", e))
    }
}

impl MetadataLookup for OmdbClient {
    fn lookup(&self, title: &str) -> LookupOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            return LookupOutcome::Unreachable("no API key configured".to_string());
        };

        debug!(title, url = %self.base_url, "looking up movie");
        match self.fetch(title, api_key) {
            Ok(body) if !body.is_match() => {
                info!(title, "lookup found no match");
                LookupOutcome::NotFound
            }
            Ok(body) => LookupOutcome::Found(body.into_movie(title)),
            Err(reason) => {
                warn!(title, %reason, "lookup failed");
                LookupOutcome::Unreachable(reason)
            }
        }
    }
}
