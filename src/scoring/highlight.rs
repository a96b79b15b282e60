/// Configuration for the display-only filler highlighter
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Terms to wrap, matched case-sensitively between single spaces
    pub terms: Vec<String>,
    /// Marker inserted before a matched term
    pub open_marker: String,
    /// Marker inserted after a matched term
    pub close_marker: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            terms: vec![
                "um".to_string(),
                "uh".to_string(),
                "uhh".to_string(),
                "like".to_string(),
                "you know".to_string(),
                "basically".to_string(),
                "actually".to_string(),
                "ummm".to_string(),
                "uhhh".to_string(),
                "don't know".to_string(),
                "not sure".to_string(),
                "ahh".to_string(),
                "hmm".to_string(),
                "So".to_string(),
                "so".to_string(),
            ],
            open_marker: "<span class='bad'>".to_string(),
            close_marker: "</span>".to_string(),
        }
    }
}

/// Annotate a transcript copy for display by wrapping filler terms
///
/// Purely cosmetic; scores never consult the output. Each term is replaced
/// in its own sequential pass and must be surrounded by single spaces in
/// the original text, so terms at string boundaries or flush against
/// punctuation are missed, and adjacent fillers may not all be caught in
/// one pass. Applying the function twice can wrap already-wrapped text.
/// These limitations are accepted for what is a display-only concern.
pub fn highlight(transcript: &str, config: &HighlightConfig) -> String {
    let mut result = transcript.to_string();

    for term in &config.terms {
        let needle = format!(" {} ", term);
        let replacement = format!(
            " {}{}{} ",
            config.open_marker, term, config.close_marker
        );
        result = result.replace(&needle, &replacement);
    }

    result
}
