//! Maximum-likelihood correction on top of tiered candidate selection.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::candidates::{Tier, candidates, without_edits};
use crate::spelling::config::CorrectorConfig;
use crate::spelling::edits::EditGenerator;
use crate::spelling::model::FrequencyModel;

/// Result of correcting a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The word as given.
    pub original: String,
    /// The chosen correction, or the original when nothing better was found.
    pub corrected: String,
    /// Tier the correction was found at.
    pub tier: Tier,
    /// Probability of the corrected word in the model.
    pub probability: f64,
    /// Raw count of the corrected word in the model.
    pub count: u64,
}

impl CorrectionResult {
    /// Check if the correction differs from the input.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }

    /// Check if the input was already a known word.
    pub fn is_known(&self) -> bool {
        self.tier == Tier::Known
    }

    /// Check if no known word was found and the input came back unchanged.
    pub fn is_fallback(&self) -> bool {
        self.tier == Tier::Fallback
    }
}

/// Pick the most probable word of a candidate set.
///
/// Ties go to the lexicographically smallest word so the answer never depends
/// on hashing or iteration order. Counts share a denominator, so comparing
/// them is the same as comparing probabilities.
pub fn rank<'a>(model: &FrequencyModel, words: &'a BTreeSet<String>) -> Option<&'a str> {
    let mut best: Option<(&str, u64)> = None;

    for word in words {
        let count = model.count(word);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((word.as_str(), count)),
        }
    }

    best.map(|(word, _)| word)
}

/// Spelling corrector bound to a shared frequency model.
///
/// The model is held behind an `Arc`, so one corpus load can serve any number
/// of correctors and threads.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    model: Arc<FrequencyModel>,
    generator: EditGenerator,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(model: Arc<FrequencyModel>) -> Self {
        SpellingCorrector {
            model,
            generator: EditGenerator::new(),
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(model: Arc<FrequencyModel>, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        let generator = config.edit_generator()?;

        Ok(SpellingCorrector {
            model,
            generator,
            config,
        })
    }

    /// Get the frequency model.
    pub fn model(&self) -> &Arc<FrequencyModel> {
        &self.model
    }

    /// Get the configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// The most probable correction of `word`.
    pub fn correct(&self, word: &str) -> String {
        self.correct_detailed(word).corrected
    }

    /// Correct `word` using the configured tier 3 setting, reporting the tier.
    pub fn correct_detailed(&self, word: &str) -> CorrectionResult {
        self.correct_with(word, self.config.allow_tier3)
    }

    /// Correct `word` with an explicit tier 3 setting.
    pub fn correct_with(&self, word: &str, allow_tier3: bool) -> CorrectionResult {
        let found = if self.config.accepts_length(word) {
            candidates(&self.model, &self.generator, word, allow_tier3)
        } else {
            debug!(
                "{word:?} exceeds max_word_length {:?}, skipping edits",
                self.config.max_word_length
            );
            without_edits(&self.model, word)
        };

        let corrected = rank(&self.model, &found.words).unwrap_or(word).to_string();

        CorrectionResult {
            original: word.to_string(),
            probability: self.model.probability(&corrected),
            count: self.model.count(&corrected),
            corrected,
            tier: found.tier,
        }
    }

    /// Probability of `word` in the model.
    pub fn probability(&self, word: &str) -> f64 {
        self.model.probability(word)
    }

    /// Check if `word` is in the model.
    pub fn is_known(&self, word: &str) -> bool {
        self.model.contains(word)
    }
}

/// Correct a single word against `model` with the default alphabet.
pub fn correct(word: &str, allow_tier3: bool, model: &FrequencyModel) -> String {
    let generator = EditGenerator::new();
    let found = candidates(model, &generator, word, allow_tier3);
    rank(model, &found.words).unwrap_or(word).to_string()
}
