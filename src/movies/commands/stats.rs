use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::model::{Movie, Statistics};
use crate::store::CatalogStore;

use super::helpers::non_empty_catalog;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let movies = non_empty_catalog(store)?;
    let stats = compute(&movies).ok_or(CatalogError::EmptyCatalog)?;
    Ok(CmdResult::default().with_statistics(stats))
}

/// Mean, median and tied extremes over the ratings. `None` for an empty slice.
pub fn compute(movies: &[Movie]) -> Option<Statistics> {
    if movies.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    let count = ratings.len();
    let mean = mean(&ratings);

    ratings.sort_by(|a, b| a.total_cmp(b));
    let mid = count / 2;
    let median = if count % 2 == 1 {
        ratings[mid]
    } else {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    };

    let worst_rating = ratings[0];
    let best_rating = ratings[count - 1];
    let titles_rated = |rating: f64| -> Vec<String> {
        movies
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect()
    };

    Some(Statistics {
        count,
        mean,
        median,
        best_rating,
        best: titles_rated(best_rating),
        worst_rating,
        worst: titles_rated(worst_rating),
    })
}

/// Arithmetic mean, rounded once from the exact sum rather than once per addition,
/// so that `[8.8, 8.6, 9.0]` averages to exactly `8.8`.
fn mean(values: &[f64]) -> f64 {
    // Neumaier summation: `sum + carry` is the exact total to within one rounding of `carry`.
    let (mut sum, mut carry) = (0.0_f64, 0.0_f64);
    for &x in values {
        let t = sum + x;
        carry += if sum.abs() >= x.abs() {
            (sum - t) + x
        } else {
            (x - t) + sum
        };
        sum = t;
    }

    let n = values.len() as f64;
    let q = sum / n;
    // Remainder of `sum / n`, exact thanks to the fused multiply-add.
    let remainder = (-q).mul_add(n, sum);
    q + (remainder + carry) / n
}
