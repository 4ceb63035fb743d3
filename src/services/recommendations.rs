//! Recommendation engine.
//!
//! Ranks a candidate pool against one or more reference movies and returns
//! the top K. Scoring is synchronous and request-scoped: every request
//! fetches its own records and recomputes every score, nothing is cached or
//! shared between requests. The catalog is small (low hundreds of movies),
//! so recomputation is the accepted cost.

use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{Movie, Recommendation},
    services::similarity::MovieScorer,
};

/// Result size for favorites-based recommendations (profile page).
pub const FAVORITES_RESULT_LIMIT: usize = 10;

/// Result size for single-movie recommendations (detail page).
pub const SIMILAR_RESULT_LIMIT: usize = 6;

pub struct RecommendationEngine {
    catalog: Arc<dyn Catalog>,
    scorer: MovieScorer,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<dyn Catalog>, scorer: MovieScorer) -> Self {
        Self { catalog, scorer }
    }

    /// Recommends movies resembling any of the user's favorites.
    ///
    /// Each candidate is scored against every reference and keeps its best
    /// score: a movie that strongly resembles one favorite is a good pick
    /// even if it resembles none of the others. Favorite ids that do not
    /// resolve are skipped; an empty (or entirely unresolvable) reference
    /// set yields an empty result, not an error.
    pub async fn recommend_for_favorites(
        &self,
        favorite_ids: &[i64],
    ) -> AppResult<Vec<Recommendation>> {
        let favorite_ids = dedup_preserving_order(favorite_ids);

        let mut references = Vec::new();
        for &id in &favorite_ids {
            match self.catalog.fetch_by_id(id).await? {
                Some(movie) => references.push(movie),
                None => tracing::debug!(movie_id = id, "favorite not in catalog, skipping"),
            }
        }

        if references.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.catalog.fetch_all_except(&favorite_ids).await?;
        let ranked = self.rank(&references, candidates, FAVORITES_RESULT_LIMIT);

        tracing::info!(
            references = references.len(),
            results = ranked.len(),
            "favorites recommendation computed"
        );

        Ok(ranked)
    }

    /// Recommends movies resembling one reference movie.
    ///
    /// An unknown reference id is a `NotFound` error: the caller must be able
    /// to tell "no such movie" apart from "no similar movies".
    pub async fn recommend_similar_to(&self, movie_id: i64) -> AppResult<Vec<Recommendation>> {
        let reference = self
            .catalog
            .fetch_by_id(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("movie {movie_id} not found")))?;

        let candidates = self.catalog.fetch_all_except(&[movie_id]).await?;
        let ranked = self.rank(std::slice::from_ref(&reference), candidates, SIMILAR_RESULT_LIMIT);

        tracing::info!(
            movie_id,
            results = ranked.len(),
            "similar-movie recommendation computed"
        );

        Ok(ranked)
    }

    /// Scores every candidate against the references (keeping the max),
    /// sorts descending, and truncates to `limit`.
    ///
    /// The sort is stable and scores are never NaN, so ties keep the
    /// candidate pool's first-seen order and results are deterministic.
    fn rank(
        &self,
        references: &[Movie],
        candidates: Vec<Movie>,
        limit: usize,
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = candidates
            .into_iter()
            .map(|candidate| {
                let score = references
                    .iter()
                    .map(|reference| self.scorer.score(reference, &candidate))
                    .fold(0.0_f64, f64::max);
                Recommendation {
                    movie: candidate,
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }
}

fn dedup_preserving_order(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
