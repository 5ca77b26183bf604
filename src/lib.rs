//! # tierspell
//!
//! A frequency-ranked spelling corrector for Rust.
//!
//! ## Features
//!
//! - Word-frequency model built from any text corpus
//! - Tiered candidate search: one edit, two edits, and an optional restricted
//!   third edit aimed at vowel and `c`/`s` confusions
//! - Deterministic maximum-likelihood ranking
//! - Regression replay of labeled misspelling sets
//! - Command-line front end

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{
        CorrectionResult, CorrectorConfig, FrequencyModel, SpellingCorrector, Tier, build_model,
        correct, probability,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
