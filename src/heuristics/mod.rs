pub mod flow;
pub mod key_info;
pub mod salutation;
pub mod speech_rate;

pub use flow::*;
pub use key_info::*;
pub use salutation::*;
pub use speech_rate::*;

use crate::models::HeuristicScores;

/// Configuration for the deterministic heuristics
#[derive(Debug, Clone)]
pub struct HeuristicsConfig {
    /// Phrases that mark an enthusiastic salutation (highest tier)
    pub enthusiasm_phrases: Vec<String>,
    /// Words counted toward the filler-word rate
    pub filler_words: Vec<String>,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            enthusiasm_phrases: vec![
                "excited to".to_string(),
                "thrilled to".to_string(),
                "happy to".to_string(),
                "glad to".to_string(),
                "feeling great to".to_string(),
                "delighted to".to_string(),
            ],
            filler_words: vec![
                "uh".to_string(),
                "um".to_string(),
                "like".to_string(),
                "basically".to_string(),
                "you know".to_string(),
                "literally".to_string(),
            ],
        }
    }
}

/// Run every deterministic heuristic over the transcript
///
/// These never fail: an empty or degenerate transcript simply floors each
/// sub-score to its minimum. Only the transcript text is consulted; no
/// external calls are made.
pub fn analyze_transcript(text: &str, config: &HeuristicsConfig) -> HeuristicScores {
    HeuristicScores {
        salutation: salutation_score(text, &config.enthusiasm_phrases),
        key_info: score_key_info(text),
        flow: flow_score(text),
        speech_rate: speech_rate_score(text),
        filler_rate: filler_word_rate(text, &config.filler_words),
    }
}
