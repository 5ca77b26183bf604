//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TierspellArgs};
use crate::error::Result;
use crate::spelling::{CorrectionResult, SpellTestReport, Tier};

/// Result structure for word corrections.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub corrections: Vec<CorrectionResult>,
}

/// Probability of one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbabilityEntry {
    pub word: String,
    pub count: u64,
    pub probability: f64,
}

/// Result structure for probability lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbabilityOutput {
    pub words: Vec<ProbabilityEntry>,
}

/// Vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub distinct_words: usize,
    pub total_tokens: u64,
    pub most_common: Vec<(String, u64)>,
}

/// Result structure for a test-set replay.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellTestOutput {
    #[serde(flatten)]
    pub report: SpellTestReport,
    pub accuracy: f64,
    pub unknown_rate: f64,
    pub words_per_second: f64,
    #[serde(skip)]
    pub show_misses: bool,
}

impl SpellTestOutput {
    pub fn new(report: SpellTestReport, show_misses: bool) -> Self {
        SpellTestOutput {
            accuracy: report.accuracy(),
            unknown_rate: report.unknown_rate(),
            words_per_second: report.words_per_second(),
            report,
            show_misses,
        }
    }
}

/// One line of human output for a correction.
pub fn describe_correction(result: &CorrectionResult) -> String {
    match result.tier {
        Tier::Known => format!("{} is the correct spelling!", result.original),
        Tier::Fallback => format!("{}: no correction found", result.original),
        tier => format!(
            "{} -> {} (tier {}, p={:.6})",
            result.original, result.corrected, tier, result.probability
        ),
    }
}

impl fmt::Display for CorrectionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.corrections {
            writeln!(f, "{}", describe_correction(result))?;
        }
        Ok(())
    }
}

impl fmt::Display for ProbabilityOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.words {
            writeln!(
                f,
                "{:<20} {:>10} {:.8}",
                entry.word, entry.count, entry.probability
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for StatsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distinct words: {}", self.distinct_words)?;
        writeln!(f, "Total tokens:   {}", self.total_tokens)?;
        if !self.most_common.is_empty() {
            writeln!(f)?;
            writeln!(f, "Most common:")?;
            for (word, count) in &self.most_common {
                writeln!(f, "  {word:<20} {count:>10}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SpellTestOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_misses {
            for miss in &self.report.misses {
                writeln!(
                    f,
                    "correct({}) => {} ({}); expected {} ({})",
                    miss.wrong, miss.got, miss.got_count, miss.expected, miss.expected_count
                )?;
            }
        }
        writeln!(f, "{}", self.report)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &TierspellArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &TierspellArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TierspellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::spelling::evaluation::Miss;

    fn result(original: &str, corrected: &str, tier: Tier) -> CorrectionResult {
        CorrectionResult {
            original: original.to_string(),
            corrected: corrected.to_string(),
            tier,
            probability: 0.5,
            count: 1,
        }
    }

    #[test]
    fn test_describe_correction() {
        assert_eq!(
            describe_correction(&result("word", "word", Tier::Known)),
            "word is the correct spelling!"
        );
        assert_eq!(
            describe_correction(&result("xq", "xq", Tier::Fallback)),
            "xq: no correction found"
        );
        assert_eq!(
            describe_correction(&result("peotry", "poetry", Tier::One)),
            "peotry -> poetry (tier one, p=0.500000)"
        );
    }

    #[test]
    fn test_spelltest_output_json_flattens_report() {
        let report = SpellTestReport {
            total: 2,
            correct: 1,
            unknown: 0,
            elapsed: Duration::from_millis(10),
            misses: vec![Miss {
                wrong: "wird".to_string(),
                got: "bird".to_string(),
                got_count: 3,
                expected: "word".to_string(),
                expected_count: 1,
            }],
        };
        let output = SpellTestOutput::new(report, true);

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["accuracy"], 0.5);
        assert_eq!(value["misses"][0]["got"], "bird");
        assert!(value.get("show_misses").is_none());

        let text = output.to_string();
        assert!(text.starts_with("correct(wird) => bird (3); expected word (1)\n"));
        assert!(text.contains("50% of 2 correct"));
    }

    #[test]
    fn test_stats_output_display() {
        let stats = StatsOutput {
            distinct_words: 2,
            total_tokens: 3,
            most_common: vec![("the".to_string(), 2)],
        };
        let text = stats.to_string();
        assert!(text.contains("Distinct words: 2"));
        assert!(text.contains("Most common:"));
        assert!(text.contains("the"));
    }
}
