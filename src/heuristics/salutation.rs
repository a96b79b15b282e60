use std::sync::LazyLock;

use regex::Regex;

static BASIC_GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(hello|hi)\b").unwrap());

const FORMAL_GREETINGS: [&str; 3] = ["good morning", "good afternoon", "good evening"];

/// Score the transcript's opening salutation
///
/// Tiers are checked from weakest to strongest and the strongest matched tier
/// wins: a bare "hello"/"hi" scores 2, a formal greeting phrase scores 4, and
/// an enthusiasm phrase scores 5. No greeting at all scores 0.
pub fn salutation_score(text: &str, enthusiasm_phrases: &[String]) -> u32 {
    let t = text.to_lowercase();
    let mut score = 0;

    if BASIC_GREETING.is_match(&t) {
        score = 2;
    }

    if FORMAL_GREETINGS.iter().any(|p| t.contains(p)) {
        score = 4;
    }

    if enthusiasm_phrases.iter().any(|p| t.contains(p.as_str())) {
        score = 5;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicsConfig;

    fn score(text: &str) -> u32 {
        let config = HeuristicsConfig::default();
        salutation_score(text, &config.enthusiasm_phrases)
    }

    #[test]
    fn test_no_salutation() {
        assert_eq!(score("My name is Ravi."), 0);
    }

    #[test]
    fn test_basic_salutation() {
        assert_eq!(score("Hello everyone, my name is Ravi."), 2);
        assert_eq!(score("hi, I am Ravi"), 2);
    }

    #[test]
    fn test_word_boundary_respected() {
        // "this" contains "hi" but is not a greeting
        assert_eq!(score("this is my introduction"), 0);
    }

    #[test]
    fn test_formal_overrides_basic() {
        assert_eq!(score("Hello and good morning everyone."), 4);
    }

    #[test]
    fn test_enthusiastic_overrides_formal() {
        assert_eq!(score("Good morning! I am excited to introduce myself."), 5);
    }

    #[test]
    fn test_result_is_a_known_tier() {
        for text in [
            "",
            "hi",
            "good evening",
            "thrilled to be here",
            "no greeting here at all",
        ] {
            assert!([0, 2, 4, 5].contains(&score(text)));
        }
    }
}
