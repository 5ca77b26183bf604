//! Text analysis for tierspell.
//!
//! Corpus text enters the system here: tokenizers split it into the lowercase
//! words that the frequency model counts.

pub mod tokenizer;
