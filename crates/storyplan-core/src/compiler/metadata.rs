//! Readability metrics of the input text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Complexity;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_BREAK regex should compile"));

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rates a text by word count and words per sentence.
///
/// Sentence pieces are counted including the empty piece after a final
/// terminator, so "One. Two." has three pieces.
pub fn complexity(text: &str) -> Complexity {
    let words = word_count(text);
    let sentences = SENTENCE_BREAK.split(text).count().max(1);
    let words_per_sentence = words as f64 / sentences as f64;

    if words < 20 || words_per_sentence < 5.0 {
        Complexity::Simple
    } else if words < 100 || words_per_sentence < 15.0 {
        Complexity::Moderate
    } else {
        Complexity::Complex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  I click\tthe\nbutton "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_short_text_is_simple() {
        assert_eq!(complexity("I click the login button."), Complexity::Simple);
    }

    #[test]
    fn test_choppy_text_is_simple() {
        let text = "Go. ".repeat(30);
        assert_eq!(complexity(&text), Complexity::Simple);
    }

    #[test]
    fn test_medium_text_is_moderate() {
        let text = "I open the application and then I review every field on the page carefully today. "
            .repeat(3);
        assert_eq!(complexity(&text), Complexity::Moderate);
    }

    #[test]
    fn test_long_run_on_text_is_complex() {
        let text = format!("{}.", "word ".repeat(120));
        assert_eq!(complexity(&text), Complexity::Complex);
    }
}
