//! Tokenizers that turn raw corpus text into lowercase word tokens.
//!
//! The splitting rule is load-bearing: the frequency model is only as good as
//! the tokens it counts, so the default rule is fixed to maximal runs of word
//! characters (`\w+`: letters, digits and underscore), folded to lowercase.
//!
//! # Examples
//!
//! ```
//! use tierspell::analysis::tokenizer::words;
//!
//! let tokens: Vec<String> = words("This is a TEST.").collect();
//! assert_eq!(tokens, vec!["this", "is", "a", "test"]);
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{Result, SpellError};

/// Pattern used by [`words`] and [`RegexTokenizer::new`].
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_WORD_PATTERN).expect("Default word pattern should be valid")
});

/// A lazy stream of lowercase tokens borrowed from the input text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Trait for tokenizers that split text into lowercase word tokens.
///
/// Tokenizers are shared between threads when a corpus is loaded once and
/// served to many correction requests, hence the `Send + Sync` bound.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of lowercase tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Split `text` into lowercase word tokens using the default `\w+` rule.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_REGEX
        .find_iter(text)
        .map(|mat| mat.as_str().to_lowercase())
}

/// A regex-based tokenizer that extracts every match of its pattern and
/// lowercases it.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer with the default `\w+` pattern.
    pub fn new() -> Self {
        RegexTokenizer {
            pattern: Arc::new(WORD_REGEX.clone()),
        }
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpellError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(
            self.pattern
                .find_iter(text)
                .map(|mat| mat.as_str().to_lowercase()),
        )
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_words_lowercases_and_strips_punctuation() {
        let tokens: Vec<String> = words("This is a TEST.").collect();
        assert_eq!(tokens, vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn test_words_keeps_digits_and_underscore() {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in words("This is a test. 123; A TEST this is.") {
            *counts.entry(token).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 5);
        assert_eq!(counts["this"], 2);
        assert_eq!(counts["is"], 2);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["test"], 2);
        assert_eq!(counts["123"], 1);

        let tokens: Vec<String> = words("snake_case-word").collect();
        assert_eq!(tokens, vec!["snake_case", "word"]);
    }

    #[test]
    fn test_words_on_empty_and_symbol_only_text() {
        assert_eq!(words("").count(), 0);
        assert_eq!(words("?! -- ...").count(), 0);
    }

    #[test]
    fn test_regex_tokenizer_matches_free_function() {
        let tokenizer = RegexTokenizer::new();
        let text = "It was the BEST of times, it was the worst of times.";
        let from_trait: Vec<String> = tokenizer.tokenize(text).collect();
        let from_fn: Vec<String> = words(text).collect();

        assert_eq!(from_trait, from_fn);
        assert_eq!(tokenizer.pattern(), DEFAULT_WORD_PATTERN);
        assert_eq!(tokenizer.name(), "regex");
    }

    #[test]
    fn test_regex_tokenizer_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[A-Za-z]+").unwrap();
        let tokens: Vec<String> = tokenizer.tokenize("Route 66 ROCKS").collect();
        assert_eq!(tokens, vec!["route", "rocks"]);
    }

    #[test]
    fn test_regex_tokenizer_invalid_pattern() {
        let result = RegexTokenizer::with_pattern(r"[unclosed");
        assert!(matches!(result, Err(SpellError::Analysis(_))));
    }
}
