//! Command line argument parsing for the tierspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// tierspell - a frequency-ranked spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "tierspell")]
#[command(about = "Correct misspelled words against a corpus-derived vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TierspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Corpus text file the vocabulary is built from
    #[arg(
        short,
        long,
        env = "TIERSPELL_CORPUS",
        value_name = "CORPUS_FILE",
        global = true
    )]
    pub corpus: Option<PathBuf>,

    /// Corrector configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Also search the restricted third edit tier
    #[arg(long, global = true)]
    pub tier3: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TierspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct words given as arguments, or read from stdin one per line
    Correct(CorrectArgs),

    /// Show the probability of words in the corpus
    Probability(ProbabilityArgs),

    /// Replay a labeled test set and report accuracy
    #[command(name = "spelltest")]
    SpellTest(SpellTestArgs),

    /// Show vocabulary statistics
    Stats(StatsArgs),
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct (reads stdin when omitted)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Arguments for probability lookups
#[derive(Parser, Debug, Clone)]
pub struct ProbabilityArgs {
    /// Words to look up
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

/// Arguments for replaying a test set
#[derive(Parser, Debug, Clone)]
pub struct SpellTestArgs {
    /// Test set file with 'right: wrong1 wrong2' lines
    #[arg(value_name = "TEST_FILE")]
    pub test_file: PathBuf,

    /// Print every miss
    #[arg(long)]
    pub show_misses: bool,
}

/// Arguments for vocabulary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Number of most common words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_command() {
        let args = TierspellArgs::try_parse_from([
            "tierspell",
            "--corpus",
            "big.txt",
            "correct",
            "speling",
            "korrectud",
        ])
        .unwrap();

        assert_eq!(args.corpus, Some(PathBuf::from("big.txt")));
        assert!(!args.tier3);
        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.words, vec!["speling", "korrectud"]);
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = TierspellArgs::try_parse_from([
            "tierspell",
            "correct",
            "--tier3",
            "-c",
            "big.txt",
        ])
        .unwrap();

        assert!(args.tier3);
        if let Command::Correct(correct_args) = args.command {
            assert!(correct_args.words.is_empty());
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_spelltest_command() {
        let args = TierspellArgs::try_parse_from([
            "tierspell",
            "-c",
            "big.txt",
            "spelltest",
            "spell-testset1.txt",
            "--show-misses",
        ])
        .unwrap();

        if let Command::SpellTest(test_args) = args.command {
            assert_eq!(test_args.test_file, PathBuf::from("spell-testset1.txt"));
            assert!(test_args.show_misses);
        } else {
            panic!("Expected SpellTest command");
        }
    }

    #[test]
    fn test_probability_requires_words() {
        assert!(TierspellArgs::try_parse_from(["tierspell", "probability"]).is_err());
    }

    #[test]
    fn test_stats_default_top() {
        let args = TierspellArgs::try_parse_from(["tierspell", "stats"]).unwrap();
        if let Command::Stats(stats_args) = args.command {
            assert_eq!(stats_args.top, 10);
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TierspellArgs::try_parse_from(["tierspell", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TierspellArgs::try_parse_from(["tierspell", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = TierspellArgs::try_parse_from(["tierspell", "-vvv", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TierspellArgs::try_parse_from(["tierspell", "--format", "json", "stats"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
