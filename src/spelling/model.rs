//! Word-frequency model built from a text corpus.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::tokenizer::{Tokenizer, words};
use crate::error::Result;

/// Occurrence counts for every word seen in a corpus.
///
/// The model is built once and never mutated afterwards; rebuilding means
/// constructing a new value. That makes it safe to share between threads
/// (for example behind an `Arc`) without any locking.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    /// Words and their occurrence counts. Every stored count is positive.
    counts: AHashMap<String, u64>,
    /// Sum of all counts.
    total: u64,
}

impl FrequencyModel {
    /// Create an empty model. Every probability query on it returns 0.
    pub fn new() -> Self {
        FrequencyModel {
            counts: AHashMap::new(),
            total: 0,
        }
    }

    /// Count the occurrences of each token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        let mut total = 0u64;

        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
            total += 1;
        }

        debug!(
            "built frequency model: {} distinct words, {} tokens",
            counts.len(),
            total
        );

        FrequencyModel { counts, total }
    }

    /// Build a model from raw corpus text using the default `\w+` rule.
    pub fn from_corpus(text: &str) -> Self {
        Self::from_tokens(words(text))
    }

    /// Build a model from raw corpus text using a specific tokenizer.
    pub fn from_corpus_with(text: &str, tokenizer: &dyn Tokenizer) -> Self {
        Self::from_tokens(tokenizer.tokenize(text))
    }

    /// Load a corpus file and build a model from its text.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// stray encoding error in a large corpus does not abort the load.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        debug!("loaded corpus {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::from_corpus(&text))
    }

    /// Raw occurrence count of a word, 0 if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Check if a word is known (present with a positive count).
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Relative frequency of a word: `count / total`.
    ///
    /// Unseen words, and every word of an empty model, yield exactly 0.
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }

    /// The subset of `words` that appear in the model.
    ///
    /// An empty result means "nothing known here, try the next tier".
    pub fn known<I, S>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        words
            .into_iter()
            .filter(|word| self.contains(word.as_ref()))
            .map(Into::into)
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the model has no words at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over every word and its count, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `limit` most frequent words, highest count first.
    ///
    /// Words with equal counts are ordered alphabetically so the listing is
    /// stable across runs.
    pub fn most_common(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyModel {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
