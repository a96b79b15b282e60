/// Scoring instructions sent ahead of the transcript
///
/// The field names and ranges here are load-bearing: they must match the
/// `SemanticScores` contract exactly, since the response is parsed strictly
/// against that shape.
const SCORING_INSTRUCTIONS: &str = r#"You are scoring a student's self-introduction transcript to test their communication skills.

Analyze the transcript and return STRICT JSON with these keys:

1. grammar_score (0-10)
2. vocab_score (0-10)
3. flow_quality (0-10)
4. clarity_score (0-15)
5. engagement_score (0-15)

6. unique_point_score (0-5)
   - Score based on whether the student mentioned anything special, uncommon, or impressive
     (award, achievement, responsibility, unique skill, project, leadership, creativity,
      volunteering, competition, entrepreneurship, or any notable detail).
   - 0 means nothing unique was found.
   - 5 means clearly unique or special information was expressed.

7. unique_point_explanation (1-2 sentence description)

8. strengths (list of strings)
9. improvements (list of strings)"#;

/// Build the scoring prompt for a transcript
///
/// The context label biases the scorer's judgment (e.g. "interview" vs a
/// casual setting) but is otherwise opaque to this crate.
pub fn build_scoring_prompt(transcript: &str, context: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(SCORING_INSTRUCTIONS);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Context is: {}.\n\n", context));
    prompt.push_str("Transcript:\n");
    prompt.push_str(transcript);
    prompt.push_str("\n\nReturn JSON ONLY.\n");

    prompt
}
