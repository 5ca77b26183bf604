//! Regression replay of labeled misspellings.
//!
//! Test sets are plain text, one target per line followed by the misspellings
//! observed for it:
//!
//! ```text
//! spelling: speling spellling
//! poetry: peotry peotryy
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::corrector::SpellingCorrector;

/// A labeled misspelling: the intended word and one way it was misspelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPair {
    /// The intended spelling.
    pub right: String,
    /// An observed misspelling of it.
    pub wrong: String,
}

impl TestPair {
    /// Create a new test pair.
    pub fn new<R: Into<String>, W: Into<String>>(right: R, wrong: W) -> Self {
        TestPair {
            right: right.into(),
            wrong: wrong.into(),
        }
    }
}

/// Parse `right: wrong1 wrong2 ...` lines into one pair per misspelling.
///
/// Blank lines are skipped. Any other line must contain exactly one `:`
/// with a non-empty target before it.
pub fn parse_test_set(text: &str) -> Result<Vec<TestPair>> {
    let mut pairs = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut parts = line.split(':');
        let (Some(right), Some(wrongs), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SpellError::parse(format!(
                "line {}: expected 'right: wrong1 wrong2 ...', got {line:?}",
                line_num + 1
            )));
        };

        let right = right.trim();
        if right.is_empty() {
            return Err(SpellError::parse(format!(
                "line {}: missing target word",
                line_num + 1
            )));
        }

        for wrong in wrongs.split_whitespace() {
            pairs.push(TestPair::new(right, wrong));
        }
    }

    Ok(pairs)
}

/// Load and parse a test set file.
pub fn load_test_set<P: AsRef<Path>>(path: P) -> Result<Vec<TestPair>> {
    let text = fs::read_to_string(path)?;
    parse_test_set(&text)
}

/// A pair the corrector got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miss {
    /// The misspelling that was corrected.
    pub wrong: String,
    /// What the corrector returned.
    pub got: String,
    /// Model count of the returned word.
    pub got_count: u64,
    /// The intended word.
    pub expected: String,
    /// Model count of the intended word; 0 means it is outside the vocabulary.
    pub expected_count: u64,
}

/// Summary of a replay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellTestReport {
    /// Number of pairs replayed.
    pub total: usize,
    /// Pairs corrected to the intended word.
    pub correct: usize,
    /// Misses whose intended word is not in the vocabulary.
    pub unknown: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    /// Every miss, in test-set order.
    pub misses: Vec<Miss>,
}

impl SpellTestReport {
    /// Fraction of pairs corrected to the intended word.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Fraction of pairs whose intended word is outside the vocabulary.
    pub fn unknown_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.unknown as f64 / self.total as f64
    }

    /// Throughput of the run.
    pub fn words_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total as f64 / secs
    }
}

impl fmt::Display for SpellTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% of {} correct ({:.0}% unknown) at {:.0} words per second",
            self.accuracy() * 100.0,
            self.total,
            self.unknown_rate() * 100.0,
            self.words_per_second()
        )
    }
}

/// Correct every misspelling in `pairs` and score the answers.
///
/// Pairs are corrected in parallel over the shared model; misses keep the
/// order of `pairs`.
pub fn spell_test(
    corrector: &SpellingCorrector,
    pairs: &[TestPair],
    allow_tier3: bool,
) -> SpellTestReport {
    let start = Instant::now();

    let outcomes: Vec<Option<Miss>> = pairs
        .par_iter()
        .map(|pair| {
            let result = corrector.correct_with(&pair.wrong, allow_tier3);
            if result.corrected == pair.right {
                None
            } else {
                Some(Miss {
                    wrong: pair.wrong.clone(),
                    got: result.corrected,
                    got_count: result.count,
                    expected: pair.right.clone(),
                    expected_count: corrector.model().count(&pair.right),
                })
            }
        })
        .collect();

    let elapsed = start.elapsed();
    let misses: Vec<Miss> = outcomes.into_iter().flatten().collect();
    let unknown = misses.iter().filter(|m| m.expected_count == 0).count();

    for miss in &misses {
        debug!(
            "correct({}) => {} ({}); expected {} ({})",
            miss.wrong, miss.got, miss.got_count, miss.expected, miss.expected_count
        );
    }

    let report = SpellTestReport {
        total: pairs.len(),
        correct: pairs.len() - misses.len(),
        unknown,
        elapsed,
        misses,
    };
    info!("{report}");
    report
}
