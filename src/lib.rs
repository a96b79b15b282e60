pub mod heuristics;
pub mod io;
pub mod llm;
pub mod models;
pub mod scoring;

pub use heuristics::{analyze_transcript, count_words, HeuristicsConfig};
pub use io::{load_transcript, ScoreReport};
pub use llm::{GeminiClient, GeminiConfig, SemanticError, SemanticScorer};
pub use models::{
    CategoryWeights, HeuristicScores, ScoreFlags, ScoreResult, SemanticScores, RUBRIC,
};
pub use scoring::{combine, highlight, score_transcript, HighlightConfig};
