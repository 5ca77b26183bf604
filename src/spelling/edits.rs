//! Candidate generation by bounded string edits.
//!
//! Three tiers are produced, each strictly built on the previous one:
//!
//! - **Tier 1** ([`EditGenerator::edits1`]): every delete, adjacent
//!   transpose, replace and insert of a single character.
//! - **Tier 2** ([`EditGenerator::edits2`]): tier 1 applied to every tier 1
//!   string. Generated exhaustively, so its size is quadratic in tier 1 and it
//!   dominates the cost of a correction.
//! - **Tier 3** ([`EditGenerator::edits3`]): not a third full tier but the
//!   narrow [`restricted_edits`] family (vowel insertion next to a vowel,
//!   vowel-for-vowel replacement, `c`/`s` interchange) applied to every tier 2
//!   string.
//!
//! Edits operate on `char`s, so any input is safe, but replacement and
//! insertion only ever use the generator's alphabet.

use ahash::AHashSet;

use crate::error::{Result, SpellError};

/// The default replacement/insertion alphabet.
pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Characters treated as vowels by the restricted tier.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Consonants the restricted tier lets interchange.
pub const SIBILANTS: [char; 2] = ['c', 's'];

/// Generates edit candidates over a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

impl EditGenerator {
    /// Create a generator over the 26 lowercase ASCII letters.
    pub fn new() -> Self {
        EditGenerator {
            alphabet: ENGLISH_ALPHABET.chars().collect(),
        }
    }

    /// Create a generator over a custom alphabet.
    ///
    /// Repeated characters are ignored. An empty alphabet is rejected since
    /// replace and insert would silently produce nothing.
    pub fn with_alphabet(alphabet: &str) -> Result<Self> {
        let mut letters: Vec<char> = Vec::new();
        for ch in alphabet.chars() {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }

        if letters.is_empty() {
            return Err(SpellError::invalid_config("alphabet must not be empty"));
        }

        Ok(EditGenerator { alphabet: letters })
    }

    /// Get the alphabet used for replacements and insertions.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// All strings one edit away from `word`.
    ///
    /// For a word of length n this builds `n + (n-1) + k*n + k*(n+1)` strings
    /// (k = alphabet size) before deduplication. Identity replacements are
    /// kept, so the result contains `word` itself whenever one of its
    /// characters is in the alphabet.
    pub fn edits1(&self, word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let k = self.alphabet.len();
        let mut edits = AHashSet::with_capacity(len * (2 * k + 2) + k);

        // Deletions
        for i in 0..len {
            edits.insert(splice(&chars[..i], &[], &chars[i + 1..]));
        }

        // Transpositions (swapping adjacent characters)
        for i in 0..len.saturating_sub(1) {
            edits.insert(splice(&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]));
        }

        // Replacements
        for i in 0..len {
            for &ch in &self.alphabet {
                edits.insert(splice(&chars[..i], &[ch], &chars[i + 1..]));
            }
        }

        // Insertions, including before the first and after the last character
        for i in 0..=len {
            for &ch in &self.alphabet {
                edits.insert(splice(&chars[..i], &[ch], &chars[i..]));
            }
        }

        edits
    }

    /// All strings two edits away from `word`, lazily.
    ///
    /// The stream is not deduplicated; filtering it through the model's known
    /// set takes care of that without materializing the whole tier.
    pub fn edits2(&self, word: &str) -> impl Iterator<Item = String> + '_ {
        self.edits1(word)
            .into_iter()
            .flat_map(move |e1| self.edits1(&e1).into_iter())
    }

    /// The restricted third tier: [`restricted_edits`] of every tier 2 string.
    pub fn edits3(&self, word: &str) -> impl Iterator<Item = String> + '_ {
        self.edits2(word)
            .flat_map(|e2| restricted_edits(&e2).into_iter())
    }
}

impl Default for EditGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The narrow edit family used for the third tier.
///
/// - insert a vowel at a split point whose left or right neighbour is a vowel
/// - replace a vowel with any vowel
/// - replace a `c` or `s` with `c` or `s`
pub fn restricted_edits(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::new();

    for i in 0..=len {
        let left_vowel = i > 0 && is_vowel(chars[i - 1]);
        let right_vowel = i < len && is_vowel(chars[i]);
        if left_vowel || right_vowel {
            for &vowel in &VOWELS {
                edits.insert(splice(&chars[..i], &[vowel], &chars[i..]));
            }
        }
    }

    for i in 0..len {
        let class: &[char] = if is_vowel(chars[i]) {
            &VOWELS
        } else if SIBILANTS.contains(&chars[i]) {
            &SIBILANTS
        } else {
            continue;
        };

        for &ch in class {
            edits.insert(splice(&chars[..i], &[ch], &chars[i + 1..]));
        }
    }

    edits
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

fn splice(left: &[char], middle: &[char], right: &[char]) -> String {
    let mut out = String::with_capacity(left.len() + middle.len() + right.len());
    out.extend(left);
    out.extend(middle);
    out.extend(right);
    out
}
