//! Command implementations for the tierspell CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellError};
use crate::spelling::evaluation::{load_test_set, spell_test};
use crate::spelling::{CorrectorConfig, FrequencyModel, SpellingCorrector};

/// Execute a CLI command.
pub fn execute_command(args: TierspellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Probability(probability_args) => {
            show_probabilities(probability_args.clone(), &args)
        }
        Command::SpellTest(test_args) => run_spell_test(test_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the corpus named on the command line.
fn load_model(cli_args: &TierspellArgs) -> Result<Arc<FrequencyModel>> {
    let path = cli_args.corpus.as_ref().ok_or_else(|| {
        SpellError::invalid_argument("no corpus given; use --corpus or TIERSPELL_CORPUS")
    })?;

    let start_time = Instant::now();
    let model = FrequencyModel::load_from_file(path)?;
    info!(
        "Loaded {} distinct words ({} tokens) from {} in {} ms",
        model.len(),
        model.total(),
        path.display(),
        start_time.elapsed().as_millis()
    );

    Ok(Arc::new(model))
}

/// Resolve the corrector configuration: file values first, then flags.
fn load_config(cli_args: &TierspellArgs) -> Result<CorrectorConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            CorrectorConfig::from_file(path)?
        }
        None => CorrectorConfig::default(),
    };

    if cli_args.tier3 {
        config.allow_tier3 = true;
    }

    Ok(config)
}

fn build_corrector(cli_args: &TierspellArgs) -> Result<SpellingCorrector> {
    let config = load_config(cli_args)?;
    let model = load_model(cli_args)?;
    SpellingCorrector::with_config(model, config)
}

/// Correct words from the arguments, or interactively from stdin.
fn correct_words(args: CorrectArgs, cli_args: &TierspellArgs) -> Result<()> {
    let corrector = build_corrector(cli_args)?;

    if !args.words.is_empty() {
        let corrections = args
            .words
            .iter()
            .map(|word| corrector.correct_detailed(word))
            .collect();

        return output_result(
            "Corrections",
            &CorrectionOutput { corrections },
            cli_args,
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            let result = corrector.correct_detailed(word);
            match cli_args.output_format {
                OutputFormat::Human => writeln!(stdout, "{}", describe_correction(&result))?,
                OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string(&result)?)?,
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

/// Show the probability of each word.
fn show_probabilities(args: ProbabilityArgs, cli_args: &TierspellArgs) -> Result<()> {
    let model = load_model(cli_args)?;

    let words = args
        .words
        .into_iter()
        .map(|word| ProbabilityEntry {
            count: model.count(&word),
            probability: model.probability(&word),
            word,
        })
        .collect();

    output_result("Probabilities", &ProbabilityOutput { words }, cli_args)
}

/// Replay a test set.
fn run_spell_test(args: SpellTestArgs, cli_args: &TierspellArgs) -> Result<()> {
    let corrector = build_corrector(cli_args)?;
    let pairs = load_test_set(&args.test_file)?;
    info!(
        "Replaying {} pairs from {}",
        pairs.len(),
        args.test_file.display()
    );

    let report = spell_test(&corrector, &pairs, corrector.config().allow_tier3);

    output_result(
        "Spell test results",
        &SpellTestOutput::new(report, args.show_misses),
        cli_args,
    )
}

/// Show vocabulary statistics.
fn show_stats(args: StatsArgs, cli_args: &TierspellArgs) -> Result<()> {
    let model = load_model(cli_args)?;

    output_result(
        "Vocabulary statistics",
        &StatsOutput {
            distinct_words: model.len(),
            total_tokens: model.total(),
            most_common: model.most_common(args.top),
        },
        cli_args,
    )
}
