use std::sync::LazyLock;

use regex::Regex;

/// Maximum points for key-information coverage
pub const KEY_INFO_MAX: f64 = 30.0;

/// The eight categories of information expected in a self-introduction,
/// each with the trigger phrases that mark it as mentioned
const KEYWORD_CATEGORIES: [(&str, &[&str]); 8] = [
    ("name", &["my name is", "i am", "this is"]),
    ("age", &["years old", "year old", "yrs old"]),
    ("class", &["class", "grade", "studying in"]),
    ("school", &["school", "high school"]),
    ("family", &["family", "parents", "brother", "sister", "siblings"]),
    (
        "hobbies",
        &["i like", "i love", "my hobby", "my hobbies are", "interested in", "interests"],
    ),
    (
        "goals",
        &["my goal", "i want to become", "i aim to", "in the future i want", "goals"],
    ),
    (
        "unique_point",
        &["something unique", "unique about me", "special about me"],
    ),
];

// The age category needs an actual number, not just the phrase
static AGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s*(years old|year old|yrs old)\b").unwrap());

/// Score how many key-information categories the transcript covers
///
/// Each category is worth an equal share of [`KEY_INFO_MAX`] and is counted
/// at most once, regardless of how many of its trigger phrases appear.
/// Categories are independent; any subset may match.
pub fn score_key_info(text: &str) -> f64 {
    let t = text.to_lowercase();
    let per_category = KEY_INFO_MAX / KEYWORD_CATEGORIES.len() as f64;
    let mut score = 0.0;

    for (category, keywords) in KEYWORD_CATEGORIES {
        if category == "age" {
            if AGE_PATTERN.is_match(&t) {
                score += per_category;
            }
            continue;
        }

        if keywords.iter().any(|kw| t.contains(kw)) {
            score += per_category;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_categories() {
        assert_eq!(score_key_info("the weather is nice today"), 0.0);
    }

    #[test]
    fn test_single_category() {
        assert_eq!(score_key_info("My name is Priya."), KEY_INFO_MAX / 8.0);
    }

    #[test]
    fn test_age_requires_a_number() {
        // The bare phrase without a preceding number does not count
        assert_eq!(score_key_info("when I was years old"), 0.0);
        assert_eq!(score_key_info("I am 13 years old"), 2.0 * KEY_INFO_MAX / 8.0); // "i am" + age
        assert_eq!(score_key_info("13 yrs old"), KEY_INFO_MAX / 8.0);
    }

    #[test]
    fn test_category_counted_once() {
        // Two hobby phrases still earn a single category share
        assert_eq!(
            score_key_info("I like cricket and I love chess"),
            KEY_INFO_MAX / 8.0
        );
    }

    #[test]
    fn test_monotone_in_matched_categories() {
        let fragments = [
            "my name is Dev.",
            "I am 12 years old.",
            "I am in class 6.",
            "I go to Hill School.",
            "my parents are teachers.",
            "my hobbies are reading.",
            "my goal is to be a pilot.",
            "something unique about me is my memory.",
        ];

        let mut text = String::new();
        let mut previous = 0.0;
        for fragment in fragments {
            text.push(' ');
            text.push_str(fragment);
            let score = score_key_info(&text);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_all_eight_categories_reach_max() {
        let text = "my name is Dev. I am 12 years old. I am in class 6 at Hill \
                    School. My parents are kind. My hobbies are reading. My goal \
                    is to be a pilot. Something unique about me is my memory.";
        let score = score_key_info(text);
        assert!((score - KEY_INFO_MAX).abs() < 1e-9);
    }
}
