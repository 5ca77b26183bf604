//! Configuration for the spelling corrector.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::edits::{ENGLISH_ALPHABET, EditGenerator};

/// Configuration for [`SpellingCorrector`](crate::spelling::corrector::SpellingCorrector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Whether the restricted third edit tier is searched.
    pub allow_tier3: bool,
    /// Words longer than this (in characters) skip edit generation entirely.
    pub max_word_length: Option<usize>,
    /// Alphabet used for replacements and insertions.
    pub alphabet: String,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            allow_tier3: false,
            max_word_length: None,
            alphabet: ENGLISH_ALPHABET.to_string(),
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(SpellError::invalid_config("alphabet must not be empty"));
        }
        if self.max_word_length == Some(0) {
            return Err(SpellError::invalid_config(
                "max_word_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the edit generator described by this configuration.
    pub fn edit_generator(&self) -> Result<EditGenerator> {
        EditGenerator::with_alphabet(&self.alphabet)
    }

    /// Check whether a word is short enough to run edit generation on.
    pub fn accepts_length(&self, word: &str) -> bool {
        match self.max_word_length {
            Some(max) => word.chars().count() <= max,
            None => true,
        }
    }
}
