use crate::models::{HeuristicScores, ScoreFlags, ScoreResult, SemanticScores};

/// Merge heuristic and semantic sub-scores into the final result
///
/// Category totals follow the rubric allocation (content 40, speech rate 10,
/// language 20, clarity 15, engagement 15). The overall value is rounded to
/// 2 decimals and deliberately NOT clamped: when upstream scores exceed
/// their nominal ranges the excess shows up in `overall`, which is the
/// caller's signal that the semantic scorer misbehaved.
pub fn combine(heuristic: HeuristicScores, semantic: SemanticScores) -> ScoreResult {
    let content_total = f64::from(heuristic.salutation)
        + heuristic.key_info
        + heuristic.flow
        + (semantic.flow_quality / 10.0) * 5.0
        + semantic.unique_point_score;

    let speech_total = f64::from(heuristic.speech_rate);
    let language_total = semantic.grammar_score + semantic.vocab_score;
    let clarity_total = semantic.clarity_score;
    let engagement_total = semantic.engagement_score;

    let overall = round2(
        content_total + speech_total + language_total + clarity_total + engagement_total,
    );

    let score_flags = ScoreFlags::from_scores(&heuristic, &semantic);

    ScoreResult {
        overall,
        heuristic,
        semantic,
        score_flags,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
