use std::sync::LazyLock;

use regex::Regex;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Count alphanumeric word tokens in the transcript
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Score the transcript length against the expected speaking range
///
/// A self-introduction of 60-120 words is ideal (10 points); slightly short
/// or slightly long earns partial credit (5 points); anything outside
/// 40-150 words earns nothing.
pub fn speech_rate_score(text: &str) -> u32 {
    let wc = count_words(text);
    if (60..=120).contains(&wc) {
        10
    } else if (40..60).contains(&wc) || (121..=150).contains(&wc) {
        5
    } else {
        0
    }
}

/// Fraction of word tokens that are filler words
///
/// Tokens are lowercased before comparison. A transcript with no tokens has
/// a rate of 0. Reported for display only; the rate never enters the
/// weighted total.
pub fn filler_word_rate(text: &str, filler_words: &[String]) -> f64 {
    let t = text.to_lowercase();
    let words: Vec<&str> = WORD_PATTERN.find_iter(&t).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return 0.0;
    }

    let count = words
        .iter()
        .filter(|w| filler_words.iter().any(|f| f == *w))
        .count();
    count as f64 / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicsConfig;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_count_words_ignores_punctuation() {
        assert_eq!(count_words("Hello, world! I'm 12."), 5); // hello world I m 12
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("...!?"), 0);
    }

    #[test]
    fn test_ideal_range() {
        assert_eq!(speech_rate_score(&words(90)), 10);
        assert_eq!(speech_rate_score(&words(60)), 10);
        assert_eq!(speech_rate_score(&words(120)), 10);
    }

    #[test]
    fn test_partial_ranges() {
        assert_eq!(speech_rate_score(&words(45)), 5);
        assert_eq!(speech_rate_score(&words(40)), 5);
        assert_eq!(speech_rate_score(&words(59)), 5);
        assert_eq!(speech_rate_score(&words(121)), 5);
        assert_eq!(speech_rate_score(&words(150)), 5);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(speech_rate_score(&words(10)), 0);
        assert_eq!(speech_rate_score(&words(39)), 0);
        assert_eq!(speech_rate_score(&words(151)), 0);
        assert_eq!(speech_rate_score(""), 0);
    }

    #[test]
    fn test_filler_rate_empty_transcript() {
        let config = HeuristicsConfig::default();
        assert_eq!(filler_word_rate("", &config.filler_words), 0.0);
        assert_eq!(filler_word_rate("   ", &config.filler_words), 0.0);
    }

    #[test]
    fn test_filler_rate_counts_tokens() {
        let config = HeuristicsConfig::default();
        // 2 fillers out of 4 tokens
        let rate = filler_word_rate("um I like painting", &config.filler_words);
        assert_eq!(rate, 0.5);
    }

    #[test]
    fn test_filler_rate_is_case_insensitive() {
        let config = HeuristicsConfig::default();
        let rate = filler_word_rate("Um yes UM no", &config.filler_words);
        assert_eq!(rate, 0.5);
    }
}
