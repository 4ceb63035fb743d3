use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Upper bound on review excerpts kept per movie.
///
/// The crawler stores more, but only the first few carry signal for
/// similarity scoring; anything past this is noise and cost.
pub const MAX_REVIEW_EXCERPTS: usize = 5;

/// Delimiter used to store the excerpt list as a single text column.
pub const EXCERPT_DELIMITER: char = '|';

/// One catalog entry. Read-only within this service; the crawler owns writes.
///
/// Every similarity-relevant field is optional: a movie with nothing but an
/// id and a title still scores (as zero) against any other movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique catalog identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Title in the original language, if different
    pub original_title: Option<String>,
    /// Aggregate rating in [0, 10]
    pub rating: Option<f64>,
    /// Free-text plot synopsis
    pub synopsis: Option<String>,
    /// Short review excerpts, at most [`MAX_REVIEW_EXCERPTS`]
    pub review_excerpts: Vec<String>,
    /// Descriptive metadata (year, country, genre tags) as prose.
    /// Scored as plain text, never parsed.
    pub metadata: Option<String>,
}

/// Row shape of the `movies` table.
///
/// Excerpts live pipe-joined in one text column at rest; the split into a
/// bounded list happens here, at the catalog boundary, so nothing downstream
/// ever sees the storage encoding.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub rating: Option<f64>,
    pub synopsis: Option<String>,
    pub metadata: Option<String>,
    pub review_excerpts: Option<String>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let review_excerpts = row
            .review_excerpts
            .as_deref()
            .map(split_excerpts)
            .unwrap_or_default();

        Movie {
            id: row.id,
            title: row.title,
            original_title: row.original_title,
            // The crawler should only ever write [0, 10], but a bad row must
            // not leak an out-of-range rating into scoring.
            rating: row.rating.map(|r| r.clamp(0.0, 10.0)),
            synopsis: row.synopsis,
            review_excerpts,
            metadata: row.metadata,
        }
    }
}

fn split_excerpts(joined: &str) -> Vec<String> {
    joined
        .split(EXCERPT_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .take(MAX_REVIEW_EXCERPTS)
        .collect()
}

/// One ranked entry in a recommendation response.
///
/// The score is ephemeral: computed fresh for every request, never cached or
/// persisted, and meaningless outside the request that produced it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub movie: Movie,
    pub score: f64,
}
