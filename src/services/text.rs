//! Lexical text similarity.
//!
//! Scores two free-text strings in [0, 1] by segmenting them into tokens,
//! weighting term frequencies with TF-IDF, and taking the cosine of the two
//! weighted vectors.
//!
//! The IDF here is computed over the two compared texts only, not over the
//! whole catalog. That is a deliberate simplification carried over from the
//! system this replaces: it biases weight toward terms that distinguish the
//! pair, and widening the corpus would rescale every score in the product.

use std::collections::HashMap;
use std::sync::Arc;

use jieba_rs::Jieba;

/// Shortest token kept after segmentation. Single characters (a stray "a",
/// an isolated hanzi) carry almost no lexical signal and are dropped, which
/// also keeps scores on the same scale as the previous system.
const MIN_TOKEN_CHARS: usize = 2;

/// Language-aware word segmentation.
///
/// Splitting text into word-like tokens is the one step here that is tied to
/// a specific natural language, so it sits behind a trait: the scorer takes
/// whatever segmenter it is constructed with.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Default segmenter, backed by jieba.
///
/// Handles scripts without whitespace word boundaries (the catalog is mostly
/// Chinese prose) and degrades to whitespace splitting for Latin text.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Builds a segmenter with the default dictionary. Loading the dictionary
    /// is not cheap; construct once and share.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, false)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Text similarity scorer.
///
/// Infallible by construction: every degenerate input (empty text,
/// punctuation-only text, empty vocabulary, zero vector) scores 0.0. This
/// factor must never abort a batch ranking, so there is no error path at all.
pub struct TextScorer {
    segmenter: Arc<dyn Segmenter>,
}

impl TextScorer {
    pub fn new(segmenter: Arc<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Scores two texts in [0, 1]. 1.0 means identical term distribution,
    /// 0.0 means no shared weighted terms (or no usable terms at all).
    pub fn score(&self, text1: &str, text2: &str) -> f64 {
        if text1.trim().is_empty() || text2.trim().is_empty() {
            return 0.0;
        }

        let terms1 = self.terms(text1);
        let terms2 = self.terms(text2);
        if terms1.is_empty() || terms2.is_empty() {
            return 0.0;
        }

        tfidf_cosine(&terms1, &terms2)
    }

    /// Strips punctuation and symbols (every non-alphanumeric character acts
    /// as a separator), segments, lowercases, and drops sub-minimum tokens.
    fn terms(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .collect()
    }
}

/// Cosine similarity of TF-IDF vectors over the two-document corpus
/// {doc1, doc2}, with smoothed IDF and L2 normalization, so identical
/// token streams score exactly 1.0.
fn tfidf_cosine(doc1: &[String], doc2: &[String]) -> f64 {
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    for term in doc1.iter().chain(doc2) {
        let next = vocabulary.len();
        vocabulary.entry(term.as_str()).or_insert(next);
    }

    let mut v1 = vec![0.0_f64; vocabulary.len()];
    let mut v2 = vec![0.0_f64; vocabulary.len()];
    for term in doc1 {
        v1[vocabulary[term.as_str()]] += 1.0;
    }
    for term in doc2 {
        v2[vocabulary[term.as_str()]] += 1.0;
    }

    // Smoothed IDF over n = 2 documents: ln((1 + n) / (1 + df)) + 1.
    for i in 0..vocabulary.len() {
        let df = (v1[i] > 0.0) as u32 + (v2[i] > 0.0) as u32;
        let idf = (3.0 / (1.0 + f64::from(df))).ln() + 1.0;
        v1[i] *= idf;
        v2[i] *= idf;
    }

    let norm1 = v1.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm2 = v2.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    let dot: f64 = v1.iter().zip(&v2).map(|(a, b)| a * b).sum();
    (dot / (norm1 * norm2)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> TextScorer {
        TextScorer::new(Arc::new(JiebaSegmenter::new()))
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = scorer();
        assert_eq!(scorer.score("", "anything"), 0.0);
        assert_eq!(scorer.score("anything", ""), 0.0);
        assert_eq!(scorer.score("", ""), 0.0);
        assert_eq!(scorer.score("   \t\n", "words here"), 0.0);
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        let scorer = scorer();
        assert_eq!(scorer.score("!!! ... ###", "a real sentence"), 0.0);
    }

    #[test]
    fn test_identical_text_scores_one() {
        let scorer = scorer();
        let text = "a detective solves a murder";
        let score = scorer.score(text, text);
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scorer = scorer();
        let score = scorer.score("detective murder mystery", "romance beach sunset");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let scorer = scorer();
        let score = scorer.score(
            "a detective solves a murder in paris",
            "a detective retires to paris",
        );
        assert!(score > 0.0 && score < 1.0, "score was {score}");
    }

    #[test]
    fn test_symmetry() {
        let scorer = scorer();
        let a = "an old man and the sea";
        let b = "the old man fishes alone";
        assert_eq!(scorer.score(a, b), scorer.score(b, a));
    }

    #[test]
    fn test_punctuation_is_separator_not_glue() {
        let scorer = scorer();
        // "murder!" must match "murder", not become a distinct token.
        let score = scorer.score("murder!", "murder");
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_chinese_text_segments_into_words() {
        let scorer = scorer();
        // Shared vocabulary (喜欢 / 电影) must be found despite the absence
        // of whitespace word boundaries.
        let score = scorer.score("我喜欢看电影", "他也喜欢这部电影");
        assert!(score > 0.0, "score was {score}");
    }

    #[test]
    fn test_custom_segmenter_is_pluggable() {
        struct Whitespace;
        impl Segmenter for Whitespace {
            fn segment(&self, text: &str) -> Vec<String> {
                text.split_whitespace().map(str::to_owned).collect()
            }
        }

        let scorer = TextScorer::new(Arc::new(Whitespace));
        let score = scorer.score("shared words here", "shared words there");
        assert!(score > 0.0 && score < 1.0, "score was {score}");
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let scorer = scorer();
        let samples = [
            "a detective solves a murder",
            "a romance on a beach",
            "空山新雨后 天气晚来秋",
            "mixed 中文 and english text",
        ];
        for a in &samples {
            for b in &samples {
                let s = scorer.score(a, b);
                assert!((0.0..=1.0).contains(&s), "score({a}, {b}) = {s}");
            }
        }
    }
}
