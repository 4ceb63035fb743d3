//! Pairwise movie similarity.
//!
//! Combines one numeric factor (rating closeness) and three lexical factors
//! (synopsis, review excerpts, metadata) into a single weighted score in
//! [0, 1]. A factor contributes only when both movies carry the attribute;
//! a missing attribute contributes nothing and the remaining weights are
//! not rescaled, so sparse records degrade to lower ceilings instead of
//! inflated scores.

use crate::models::Movie;
use crate::services::text::TextScorer;

/// Per-factor weights. They sum to 1.0 so a fully-populated identical pair
/// scores exactly 1.0.
pub const RATING_WEIGHT: f64 = 0.25;
pub const SYNOPSIS_WEIGHT: f64 = 0.25;
pub const EXCERPT_WEIGHT: f64 = 0.25;
pub const METADATA_WEIGHT: f64 = 0.25;

/// Ratings live in [0, 10]; a full-scale gap means zero closeness.
const RATING_SCALE: f64 = 10.0;

/// Scores movie pairs. Symmetric, infallible, range [0, 1].
pub struct MovieScorer {
    text: TextScorer,
}

impl MovieScorer {
    pub fn new(text: TextScorer) -> Self {
        Self { text }
    }

    /// Weighted similarity of two movies.
    ///
    /// Never fails and never leaves [0, 1]: a malformed record scores low,
    /// it does not abort the batch it is part of.
    pub fn score(&self, a: &Movie, b: &Movie) -> f64 {
        let mut total = 0.0;

        if let (Some(ra), Some(rb)) = (a.rating, b.rating) {
            let closeness = (1.0 - (ra - rb).abs() / RATING_SCALE).clamp(0.0, 1.0);
            total += closeness * RATING_WEIGHT;
        }

        if let (Some(sa), Some(sb)) = (&a.synopsis, &b.synopsis) {
            total += self.text.score(sa, sb) * SYNOPSIS_WEIGHT;
        }

        if !a.review_excerpts.is_empty() && !b.review_excerpts.is_empty() {
            let joined_a = a.review_excerpts.join(" ");
            let joined_b = b.review_excerpts.join(" ");
            total += self.text.score(&joined_a, &joined_b) * EXCERPT_WEIGHT;
        }

        if let (Some(ma), Some(mb)) = (&a.metadata, &b.metadata) {
            total += self.text.score(ma, mb) * METADATA_WEIGHT;
        }

        total.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::text::JiebaSegmenter;

    fn scorer() -> MovieScorer {
        MovieScorer::new(TextScorer::new(Arc::new(JiebaSegmenter::new())))
    }

    fn movie(id: i64) -> Movie {
        Movie {
            id,
            title: format!("movie {id}"),
            original_title: None,
            rating: None,
            synopsis: None,
            review_excerpts: Vec::new(),
            metadata: None,
        }
    }

    fn full_movie(id: i64) -> Movie {
        Movie {
            rating: Some(8.5),
            synopsis: Some("a detective solves a murder in the rain".to_string()),
            review_excerpts: vec!["gripping ending".to_string(), "tense pacing".to_string()],
            metadata: Some("1995 USA crime thriller".to_string()),
            ..movie(id)
        }
    }

    #[test]
    fn test_identical_full_movies_score_one() {
        let scorer = scorer();
        let a = full_movie(1);
        let b = full_movie(2);
        let score = scorer.score(&a, &b);
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_bare_movies_score_zero_without_error() {
        let scorer = scorer();
        assert_eq!(scorer.score(&movie(1), &movie(2)), 0.0);
        assert_eq!(scorer.score(&movie(1), &full_movie(2)), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let scorer = scorer();
        let a = full_movie(1);
        let b = Movie {
            rating: Some(6.0),
            synopsis: Some("a romance blooms on a beach".to_string()),
            ..full_movie(2)
        };
        assert_eq!(scorer.score(&a, &b), scorer.score(&b, &a));
    }

    #[test]
    fn test_rating_closeness() {
        let scorer = scorer();

        let mut a = movie(1);
        let mut b = movie(2);
        a.rating = Some(9.0);
        b.rating = Some(9.0);
        assert!((scorer.score(&a, &b) - RATING_WEIGHT).abs() < 1e-9);

        b.rating = Some(4.0);
        assert!((scorer.score(&a, &b) - 0.5 * RATING_WEIGHT).abs() < 1e-9);

        // Full-scale gap bottoms out at zero contribution.
        a.rating = Some(10.0);
        b.rating = Some(0.0);
        assert_eq!(scorer.score(&a, &b), 0.0);
    }

    #[test]
    fn test_rating_of_zero_counts_as_present() {
        let scorer = scorer();
        let mut a = movie(1);
        let mut b = movie(2);
        a.rating = Some(0.0);
        b.rating = Some(0.0);
        assert!((scorer.score(&a, &b) - RATING_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rating_subtracts_exactly_its_contribution() {
        let scorer = scorer();

        let a = full_movie(1);
        let b = Movie {
            rating: Some(8.5),
            ..full_movie(2)
        };
        let with_rating = scorer.score(&a, &b);

        let a_no_rating = Movie { rating: None, ..a };
        let b_no_rating = Movie { rating: None, ..b };
        let without_rating = scorer.score(&a_no_rating, &b_no_rating);

        // Identical ratings contribute the full factor weight; removing them
        // must change the total by exactly that amount, with no rescaling of
        // the remaining factors.
        assert!((with_rating - without_rating - RATING_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_one_sided_attribute_contributes_nothing() {
        let scorer = scorer();
        let mut a = movie(1);
        a.synopsis = Some("a heist goes wrong".to_string());
        let b = movie(2);
        assert_eq!(scorer.score(&a, &b), 0.0);
    }

    #[test]
    fn test_excerpts_are_scored_as_joined_text() {
        let scorer = scorer();
        let mut a = movie(1);
        let mut b = movie(2);
        a.review_excerpts = vec!["brilliant acting".to_string(), "slow start".to_string()];
        b.review_excerpts = vec!["brilliant acting slow start".to_string()];
        let score = scorer.score(&a, &b);
        assert!((score - EXCERPT_WEIGHT).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let scorer = scorer();
        let pairs = [
            (full_movie(1), full_movie(2)),
            (full_movie(1), movie(2)),
            (movie(1), movie(2)),
        ];
        for (a, b) in &pairs {
            let s = scorer.score(a, b);
            assert!((0.0..=1.0).contains(&s), "score was {s}");
        }
    }
}
