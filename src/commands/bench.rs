//! Self-play benchmark
//!
//! Runs the computer guesser against a computer checker for every selected
//! dictionary word and aggregates the outcomes.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::{
    ComputerChecker, ComputerGuesser, GUESS_LIMIT, Outcome, SilentConsole, run_game,
};
use crate::solver::StrategyKind;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average guesses across won games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Won games keyed by guess count
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Benchmark a strategy by self-play over the dictionary
///
/// Every selected word is played once as the secret, with a fresh guesser.
/// `count` caps the number of games; `length` restricts the secrets to one
/// word length. Games run in parallel.
#[must_use]
pub fn run_bench(
    dictionary: &Dictionary,
    strategy: StrategyKind,
    count: Option<usize>,
    length: Option<usize>,
) -> BenchResult {
    let targets: Vec<&Word> = dictionary
        .words()
        .iter()
        .filter(|w| length.is_none_or(|n| w.len() == n))
        .take(count.unwrap_or(usize::MAX))
        .collect();

    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(Outcome, usize)> = targets
        .par_iter()
        .map(|&secret| {
            let mut guesser = ComputerGuesser::new(strategy, dictionary);
            let mut checker = ComputerChecker::new(secret.clone());
            let mut console = SilentConsole;

            let result = match run_game(&mut guesser, &mut checker, &mut console) {
                Ok(report) => (report.outcome, report.guesses),
                // Self-play never prompts; treat any failure as a loss
                Err(_) => (Outcome::Lost, GUESS_LIMIT + 1),
            };
            bar.inc(1);
            result
        })
        .collect();

    bar.finish_and_clear();
    let duration = start.elapsed();

    let wins = outcomes
        .iter()
        .filter(|(outcome, _)| *outcome == Outcome::Won)
        .count();
    let winning_counts: Vec<usize> = outcomes
        .iter()
        .filter(|(outcome, _)| *outcome == Outcome::Won)
        .map(|&(_, guesses)| guesses)
        .collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &guesses in &winning_counts {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_games = outcomes.len();
    let average_guesses = if winning_counts.is_empty() {
        0.0
    } else {
        winning_counts.iter().sum::<usize>() as f64 / winning_counts.len() as f64
    };

    BenchResult {
        total_games,
        wins,
        losses: total_games - wins,
        average_guesses,
        min_guesses: winning_counts.iter().min().copied().unwrap_or(0),
        max_guesses: winning_counts.iter().max().copied().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "cat", "car", "can", "dog", "mouse", "horse",
        ]))
    }

    #[test]
    fn bench_plays_every_word() {
        let dict = dictionary();
        let result = run_bench(&dict, StrategyKind::from_name("coverage"), None, None);

        assert_eq!(result.total_games, 6);
        assert_eq!(result.wins + result.losses, 6);
    }

    #[test]
    fn bench_coverage_wins_dictionary_secrets() {
        // Every secret is a dictionary word, so the guesser always completes it
        let dict = dictionary();
        let result = run_bench(&dict, StrategyKind::from_name("coverage"), None, None);

        assert_eq!(result.wins, 6);
        assert_eq!(result.losses, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= GUESS_LIMIT + 1);
    }

    #[test]
    fn bench_distribution_sums_to_wins() {
        let dict = dictionary();
        let result = run_bench(&dict, StrategyKind::from_name("coverage"), None, None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
    }

    #[test]
    fn bench_respects_count_limit() {
        let dict = dictionary();
        let result = run_bench(&dict, StrategyKind::from_name("coverage"), Some(2), None);

        assert_eq!(result.total_games, 2);
    }

    #[test]
    fn bench_respects_length_filter() {
        let dict = dictionary();
        let result =
            run_bench(&dict, StrategyKind::from_name("coverage"), None, Some(5));

        // "mouse" and "horse"
        assert_eq!(result.total_games, 2);
    }

    #[test]
    fn bench_empty_selection() {
        let dict = dictionary();
        let result =
            run_bench(&dict, StrategyKind::from_name("coverage"), None, Some(12));

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
    }

    #[test]
    fn bench_metrics_consistency() {
        let dict = dictionary();
        let result = run_bench(&dict, StrategyKind::from_name("coverage"), None, None);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }
}
