pub mod combiner;
pub mod highlight;

pub use combiner::*;
pub use highlight::*;

use tracing::{debug, warn};

use crate::heuristics::{analyze_transcript, count_words, HeuristicsConfig};
use crate::llm::{SemanticError, SemanticScorer};
use crate::models::ScoreResult;

/// Score a self-introduction transcript
///
/// Runs the deterministic heuristics, obtains semantic judgments from the
/// given scorer, and merges both through the rubric. The two analyses are
/// independent of each other; only the semantic side can fail, and its
/// errors propagate unchanged with no partial result.
///
/// An empty or near-empty transcript is not an error: heuristic sub-scores
/// floor to zero and the degenerate input is logged.
pub async fn score_transcript<S: SemanticScorer>(
    scorer: &S,
    transcript: &str,
    context: &str,
    config: &HeuristicsConfig,
) -> Result<ScoreResult, SemanticError> {
    let transcript = transcript.trim();

    if count_words(transcript) == 0 {
        warn!("transcript has no scoreable words; heuristic scores will floor to zero");
    }

    let heuristic = analyze_transcript(transcript, config);
    debug!(
        "heuristics: salutation={} key_info={:.2} flow={:.2} speech_rate={} filler_rate={:.3}",
        heuristic.salutation,
        heuristic.key_info,
        heuristic.flow,
        heuristic.speech_rate,
        heuristic.filler_rate
    );

    let semantic = scorer.score_semantics(transcript, context).await?;

    Ok(combine(heuristic, semantic))
}
