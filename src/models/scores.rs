use serde::{Deserialize, Serialize};

/// Deterministic sub-scores computed from the transcript text alone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicScores {
    /// Salutation tier: 0 (none), 2 (basic), 4 (formal), 5 (enthusiastic)
    pub salutation: u32,
    /// Key information coverage, 0-30 (eight equally-weighted categories)
    pub key_info: f64,
    /// Narrative ordering score, 0-5
    pub flow: f64,
    /// Word-count bucket score: 0, 5, or 10
    pub speech_rate: u32,
    /// Fraction of tokens that are filler words, 0.0-1.0 (informational only)
    pub filler_rate: f64,
}

/// Semantic judgments returned by the external scorer
///
/// All numeric fields are required; a response missing any of them fails to
/// parse. Values outside the documented ranges are kept as-is so that
/// downstream consumers can see exactly what the scorer returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticScores {
    /// Grammar quality, 0-10
    pub grammar_score: f64,
    /// Vocabulary richness, 0-10
    pub vocab_score: f64,
    /// Perceived flow quality, 0-10
    pub flow_quality: f64,
    /// Clarity of expression, 0-15
    pub clarity_score: f64,
    /// Engagement of the listener, 0-15
    pub engagement_score: f64,
    /// Whether anything unique or impressive was mentioned, 0-5
    pub unique_point_score: f64,
    /// Short description of the unique point found (if any)
    #[serde(default)]
    pub unique_point_explanation: String,
    /// Free-text feedback: what the speaker did well
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Free-text feedback: what the speaker should work on
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Weak-area indicators derived from fixed thresholds on sub-scores
///
/// Always recomputed from the scores they describe, never stored on their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreFlags {
    pub flow: bool,
    pub clarity: bool,
    pub grammar: bool,
    pub vocab: bool,
    pub engagement: bool,
    pub unique: bool,
}

impl ScoreFlags {
    pub fn from_scores(heuristic: &HeuristicScores, semantic: &SemanticScores) -> Self {
        Self {
            flow: heuristic.flow < 5.0,
            clarity: semantic.clarity_score < 5.0,
            grammar: semantic.grammar_score < 7.0,
            vocab: semantic.vocab_score < 5.0,
            engagement: semantic.engagement_score < 5.0,
            unique: semantic.unique_point_score < 5.0,
        }
    }

    /// True if any weak area was flagged
    pub fn any(&self) -> bool {
        self.flow || self.clarity || self.grammar || self.vocab || self.engagement || self.unique
    }

    /// Names of the flagged weak areas, in rubric order
    pub fn flagged(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.flow {
            names.push("flow");
        }
        if self.clarity {
            names.push("clarity");
        }
        if self.grammar {
            names.push("grammar");
        }
        if self.vocab {
            names.push("vocab");
        }
        if self.engagement {
            names.push("engagement");
        }
        if self.unique {
            names.push("unique");
        }
        names
    }
}

/// Complete scoring result for one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Combined rubric-weighted score, rounded to 2 decimals (not clamped)
    pub overall: f64,
    /// The deterministic sub-scores that went into `overall`
    pub heuristic: HeuristicScores,
    /// The semantic sub-scores that went into `overall`
    pub semantic: SemanticScores,
    /// Weak-area indicators derived from the sub-scores
    pub score_flags: ScoreFlags,
}
