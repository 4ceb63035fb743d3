pub mod recommendations;
pub mod similarity;
pub mod text;

pub use recommendations::RecommendationEngine;
pub use similarity::MovieScorer;
pub use text::{JiebaSegmenter, Segmenter, TextScorer};
