use tracing::warn;

use super::SemanticError;
use crate::models::SemanticScores;

/// Documented range of each numeric field in the semantic response
const NUMERIC_RANGES: [(&str, f64, f64); 6] = [
    ("grammar_score", 0.0, 10.0),
    ("vocab_score", 0.0, 10.0),
    ("flow_quality", 0.0, 10.0),
    ("clarity_score", 0.0, 15.0),
    ("engagement_score", 0.0, 15.0),
    ("unique_point_score", 0.0, 5.0),
];

/// Parse the raw model output into validated semantic scores
///
/// Strips any code-fence wrapping, then parses the remainder strictly: a
/// missing or wrongly-typed numeric field is a contract violation. Values
/// outside their documented range are kept (the combiner never re-clamps
/// them) but logged, since they signal a data-quality problem with the
/// scorer rather than something to silently correct.
pub fn parse_semantic_response(raw: &str) -> Result<SemanticScores, SemanticError> {
    let cleaned = strip_code_fences(raw);

    let scores: SemanticScores =
        serde_json::from_str(cleaned).map_err(|e| SemanticError::Parse {
            reason: e.to_string(),
        })?;

    let values = [
        scores.grammar_score,
        scores.vocab_score,
        scores.flow_quality,
        scores.clarity_score,
        scores.engagement_score,
        scores.unique_point_score,
    ];
    for ((field, min, max), value) in NUMERIC_RANGES.iter().zip(values) {
        if value < *min || value > *max {
            warn!(
                "semantic scorer returned {}={} outside [{}, {}]",
                field, value, min, max
            );
        }
    }

    Ok(scores)
}

/// Remove a Markdown code fence wrapping the payload, if present
///
/// Models frequently wrap JSON in ```json ... ``` despite being told not
/// to. Handles a fence with or without a language tag; anything else is
/// returned trimmed but otherwise untouched.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") up to the end of the opening line
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest.strip_prefix("json").unwrap_or(rest),
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESPONSE: &str = r#"{
        "grammar_score": 8,
        "vocab_score": 7,
        "flow_quality": 8,
        "clarity_score": 12,
        "engagement_score": 11,
        "unique_point_score": 2,
        "unique_point_explanation": "Mentioned a painting competition win.",
        "strengths": ["clear structure"],
        "improvements": ["slow down"]
    }"#;

    #[test]
    fn test_parse_plain_json() {
        let scores = parse_semantic_response(VALID_RESPONSE).unwrap();

        assert_eq!(scores.grammar_score, 8.0);
        assert_eq!(scores.clarity_score, 12.0);
        assert_eq!(scores.strengths, vec!["clear structure"]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", VALID_RESPONSE);
        let scores = parse_semantic_response(&fenced).unwrap();
        assert_eq!(scores.vocab_score, 7.0);
    }

    #[test]
    fn test_parse_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", VALID_RESPONSE);
        let scores = parse_semantic_response(&fenced).unwrap();
        assert_eq!(scores.engagement_score, 11.0);
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let json = r#"{
            "grammar_score": 8,
            "flow_quality": 8,
            "clarity_score": 12,
            "engagement_score": 11,
            "unique_point_score": 2
        }"#;

        let err = parse_semantic_response(json).unwrap_err();
        match err {
            SemanticError::Parse { reason } => assert!(reason.contains("vocab_score")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let json = r#"{
            "grammar_score": "eight",
            "vocab_score": 7,
            "flow_quality": 8,
            "clarity_score": 12,
            "engagement_score": 11,
            "unique_point_score": 2
        }"#;

        assert!(matches!(
            parse_semantic_response(json),
            Err(SemanticError::Parse { .. })
        ));
    }

    #[test]
    fn test_feedback_lists_may_be_absent() {
        let json = r#"{
            "grammar_score": 8,
            "vocab_score": 7,
            "flow_quality": 8,
            "clarity_score": 12,
            "engagement_score": 11,
            "unique_point_score": 2
        }"#;

        let scores = parse_semantic_response(json).unwrap();
        assert!(scores.strengths.is_empty());
        assert!(scores.improvements.is_empty());
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let json = r#"{
            "grammar_score": 14,
            "vocab_score": 7,
            "flow_quality": 8,
            "clarity_score": 12,
            "engagement_score": 11,
            "unique_point_score": 2
        }"#;

        // Logged as a warning, never clamped
        let scores = parse_semantic_response(json).unwrap();
        assert_eq!(scores.grammar_score, 14.0);
    }

    #[test]
    fn test_strip_code_fences_passthrough() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fences_inline() {
        assert_eq!(strip_code_fences("```json{\"a\": 1}```"), "{\"a\": 1}");
    }
}
