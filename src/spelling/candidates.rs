//! Tiered candidate selection.
//!
//! Tiers are tried nearest first and the first one holding at least one known
//! word wins outright: frequency never lets a farther edit beat a nearer one.

use std::collections::BTreeSet;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::spelling::edits::EditGenerator;
use crate::spelling::model::FrequencyModel;

/// The tier at which a candidate set was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The word itself is known.
    Known,
    /// One edit away.
    One,
    /// Two edits away.
    Two,
    /// Two edits plus one restricted edit.
    Three,
    /// Nothing known was found; the input is returned unchanged.
    Fallback,
}

impl Tier {
    /// Edit distance represented by this tier, `None` for the fallback.
    pub fn distance(&self) -> Option<usize> {
        match self {
            Tier::Known => Some(0),
            Tier::One => Some(1),
            Tier::Two => Some(2),
            Tier::Three => Some(3),
            Tier::Fallback => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Known => "known",
            Tier::One => "one",
            Tier::Two => "two",
            Tier::Three => "three",
            Tier::Fallback => "fallback",
        };
        write!(f, "{name}")
    }
}

/// The winning candidate set of a single correction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    /// Tier the words were found at.
    pub tier: Tier,
    /// Never empty. Known words, except for [`Tier::Fallback`] where it
    /// holds only the input.
    pub words: BTreeSet<String>,
}

impl Candidates {
    fn new(tier: Tier, words: BTreeSet<String>) -> Self {
        Candidates { tier, words }
    }
}

/// Collect the candidate set for `word`.
///
/// Tries, in order: the word itself, tier 1, tier 2, tier 3 (only when
/// `allow_tier3` is set), and finally falls back to `{word}`.
pub fn candidates(
    model: &FrequencyModel,
    generator: &EditGenerator,
    word: &str,
    allow_tier3: bool,
) -> Candidates {
    if model.contains(word) {
        return without_edits(model, word);
    }

    let known = model.known(generator.edits1(word));
    if !known.is_empty() {
        trace!("{word:?}: {} candidates at tier one", known.len());
        return Candidates::new(Tier::One, known);
    }

    let known = model.known(generator.edits2(word));
    if !known.is_empty() {
        trace!("{word:?}: {} candidates at tier two", known.len());
        return Candidates::new(Tier::Two, known);
    }

    if allow_tier3 {
        let known = model.known(generator.edits3(word));
        if !known.is_empty() {
            trace!("{word:?}: {} candidates at tier three", known.len());
            return Candidates::new(Tier::Three, known);
        }
    }

    trace!("{word:?}: no known candidates");
    without_edits(model, word)
}

/// The candidate set when no edits are generated: the word itself, either
/// known or as the fallback.
pub fn without_edits(model: &FrequencyModel, word: &str) -> Candidates {
    let tier = if model.contains(word) {
        Tier::Known
    } else {
        Tier::Fallback
    };
    Candidates::new(tier, BTreeSet::from([word.to_string()]))
}
