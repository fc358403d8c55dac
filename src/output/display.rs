//! Display functions for command results

use super::formatters::distribution_bar;
use crate::commands::BenchResult;
use crate::game::{GameReport, Outcome};
use colored::Colorize;

/// Print the final pattern and outcome of one game
pub fn print_game_result(report: &GameReport) {
    println!("{}", report.pattern);
    match report.outcome {
        Outcome::Won => println!("{}", "GUESSER WINS".green().bold()),
        Outcome::Lost => println!("{}", "GUESSER LOSES".red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Wins:             {}",
        result.wins.to_string().green().bold()
    );
    println!(
        "   Losses:           {}",
        result.losses.to_string().red().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut guess_counts: Vec<usize> = result.distribution.keys().copied().collect();
    guess_counts.sort_unstable();
    for guesses in guess_counts {
        if let Some(&count) = result.distribution.get(&guesses) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = distribution_bar(count, result.total_games, 40);
            println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
