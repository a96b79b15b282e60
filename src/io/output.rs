use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::models::ScoreResult;

/// Machine-readable scoring report
///
/// Wraps the score result with the request metadata the presentation layer
/// shows alongside it: transcript length counts, the context label, and the
/// display copy of the transcript with filler terms marked up.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Unique id for this scoring request
    pub request_id: String,
    /// When the transcript was scored (RFC 3339, UTC)
    pub scored_at: String,
    /// Context label the semantic scorer was given
    pub context: String,
    /// Transcript length in characters
    pub char_count: usize,
    /// Transcript length in whitespace-delimited words
    pub word_count: usize,
    /// Combined rubric-weighted score and its sources
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Display copy of the transcript with filler terms wrapped in markers
    pub highlighted_transcript: String,
}

impl ScoreReport {
    pub fn new(
        result: ScoreResult,
        transcript: &str,
        highlighted_transcript: String,
        context: &str,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            scored_at: Utc::now().to_rfc3339(),
            context: context.to_string(),
            char_count: transcript.chars().count(),
            word_count: transcript.split_whitespace().count(),
            result,
            highlighted_transcript,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write output file: {:?}", path))?;
        Ok(())
    }

    /// Render the report as human-readable text
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        let result = &self.result;

        out.push_str("Self-Introduction Score Report\n");
        out.push_str("==============================\n");
        out.push_str(&format!("Overall: {:.2} / 100\n", result.overall));
        out.push_str(&format!(
            "Transcript: {} words, {} characters (context: {})\n\n",
            self.word_count, self.char_count, self.context
        ));

        out.push_str("Breakdown\n");
        out.push_str("---------\n");
        out.push_str(&format!(
            "Salutation:        {} / 5\n",
            result.heuristic.salutation
        ));
        out.push_str(&format!(
            "Key information:   {:.2} / 30\n",
            result.heuristic.key_info
        ));
        out.push_str(&format!(
            "Flow (order):      {:.2} / 5\n",
            result.heuristic.flow
        ));
        out.push_str(&format!(
            "Flow (quality):    {:.1} / 10\n",
            result.semantic.flow_quality
        ));
        out.push_str(&format!(
            "Speech rate:       {} / 10\n",
            result.heuristic.speech_rate
        ));
        out.push_str(&format!(
            "Grammar:           {:.1} / 10\n",
            result.semantic.grammar_score
        ));
        out.push_str(&format!(
            "Vocabulary:        {:.1} / 10\n",
            result.semantic.vocab_score
        ));
        out.push_str(&format!(
            "Clarity:           {:.1} / 15\n",
            result.semantic.clarity_score
        ));
        out.push_str(&format!(
            "Engagement:        {:.1} / 15\n",
            result.semantic.engagement_score
        ));
        out.push_str(&format!(
            "Unique point:      {:.1} / 5\n",
            result.semantic.unique_point_score
        ));
        out.push_str(&format!(
            "Filler word rate:  {:.1}%\n",
            result.heuristic.filler_rate * 100.0
        ));

        if !result.semantic.unique_point_explanation.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "Unique point: {}\n",
                result.semantic.unique_point_explanation
            ));
        }

        let flagged = result.score_flags.flagged();
        if !flagged.is_empty() {
            out.push('\n');
            out.push_str(&format!("Weak areas: {}\n", flagged.join(", ")));
        }

        if !result.semantic.strengths.is_empty() {
            out.push_str("\nStrengths\n---------\n");
            for s in &result.semantic.strengths {
                out.push_str(&format!("- {}\n", s));
            }
        }

        if !result.semantic.improvements.is_empty() {
            out.push_str("\nImprovements\n------------\n");
            for s in &result.semantic.improvements {
                out.push_str(&format!("- {}\n", s));
            }
        }

        out
    }

    /// Write the human-readable rendering to a file
    pub fn write_human(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        file.write_all(self.render_human().as_bytes())
            .with_context(|| format!("Failed to write output file: {:?}", path))?;
        Ok(())
    }
}
