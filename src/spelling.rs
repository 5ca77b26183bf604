//! Spelling correction for tierspell.
//!
//! A [`FrequencyModel`] counts the words of a corpus. To correct a word, the
//! [`candidates`](candidates::candidates) selector walks the edit tiers of an
//! [`EditGenerator`] nearest first and keeps the first tier containing known
//! words; [`rank`] then picks the most frequent of them.
//!
//! ```
//! use tierspell::spelling::{build_model, correct, probability};
//!
//! let model = build_model(["spelling", "spelling", "spewing"]);
//! assert_eq!(correct("speling", false, &model), "spelling");
//! assert_eq!(probability("unseen", &model), 0.0);
//! ```

pub mod candidates;
pub mod config;
pub mod corrector;
pub mod edits;
pub mod evaluation;
pub mod model;

pub use candidates::{Candidates, Tier};
pub use config::CorrectorConfig;
pub use corrector::{CorrectionResult, SpellingCorrector, correct, rank};
pub use edits::{EditGenerator, restricted_edits};
pub use evaluation::{SpellTestReport, TestPair, spell_test};
pub use model::FrequencyModel;

/// Count a token stream into a frequency model.
pub fn build_model<I, S>(tokens: I) -> FrequencyModel
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FrequencyModel::from_tokens(tokens)
}

/// Probability of `word` in `model`; 0 for unseen words.
pub fn probability(word: &str, model: &FrequencyModel) -> f64 {
    model.probability(word)
}
