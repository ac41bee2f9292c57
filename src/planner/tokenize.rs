//! Sentence tokenization.
//!
//! Prompts are reduced to lowercase alphanumeric words. Every other
//! character acts as a separator, so "NEAR-based" yields `near` and `based`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a lowercase letter, digit, or whitespace.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("separator pattern is valid"));

/// Split a sentence into lowercase word tokens.
///
/// Never fails; input without any alphanumeric characters yields an
/// empty vector.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    SEPARATOR.replace_all(&lowered, " ").split_whitespace().map(str::to_string).collect()
}

/// Set of tokens from a sentence, used for keyword membership tests.
///
/// Matching is exact: `founders` does not match `founder`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    /// Tokenize a sentence into a membership set.
    pub fn from_sentence(sentence: &str) -> Self {
        Self { tokens: tokenize(sentence).into_iter().collect() }
    }

    /// Check whether a single word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    /// Check whether any of the given words is present.
    pub fn contains_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.contains(word))
    }

    /// Words from `words` that are present, in the order given.
    pub fn matching<'a>(&self, words: &[&'a str]) -> Vec<&'a str> {
        words.iter().copied().filter(|word| self.contains(word)).collect()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Build a NEAR Dashboard"), vec!["build", "a", "near", "dashboard"]);
    }

    #[test]
    fn test_tokenize_punctuation_is_separator() {
        assert_eq!(
            tokenize("NEAR-based, mobile/telegram bot!"),
            vec!["near", "based", "mobile", "telegram", "bot"]
        );
        assert_eq!(tokenize("snake_case"), vec!["snake", "case"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("web3 tool v2.0"), vec!["web3", "tool", "v2", "0"]);
    }

    #[test]
    fn test_tokenize_non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café crème"), vec!["caf", "cr", "me"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
        assert!(tokenize("!!! ??? ...").is_empty());
    }

    #[test]
    fn test_token_set_exact_match() {
        let tokens = TokenSet::from_sentence("For founders and developers.");
        assert!(tokens.contains("founders"));
        assert!(!tokens.contains("founder"));
        assert!(!tokens.contains("developer"));
        assert!(tokens.contains_any(&["x", "developers"]));
    }

    #[test]
    fn test_token_set_matching_preserves_word_order() {
        let tokens = TokenSet::from_sentence("dashboard with analytics, dashboard again");
        let matched = tokens.matching(&["analytics", "dashboard", "metrics"]);
        assert_eq!(matched, vec!["analytics", "dashboard"]);
        assert_eq!(tokens.len(), 4);
    }
}
