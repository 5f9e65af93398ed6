//! Display functions for command results

use super::formatters::{
    create_progress_bar, format_board, format_columns, format_histogram, next_rank,
    points_to_rank,
};
use crate::commands::{AnalysisResult, BenchmarkResult, GenerateResult, Verdict};
use crate::core::Letter;
use crate::game::{GameResult, GameState, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print a generated puzzle
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    let summary = &result.summary;
    let puzzle = &result.generated.puzzle;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE".bright_cyan().bold(),
        summary.id.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {}",
        format_board(puzzle.letter_set(), puzzle.letter_set().surrounding()).bold()
    );
    println!("\n   Words:        {}", summary.word_count);
    println!("   Pangrams:     {}", summary.pangram_count);
    println!("   Max score:    {}", summary.max_score);
    println!(
        "   By length:    {}",
        format_histogram(puzzle.length_histogram())
    );
    println!(
        "   Found after:  {} attempts in {:.1}ms",
        result.generated.attempts,
        result.generated.elapsed.as_secs_f64() * 1000.0
    );

    if reveal {
        println!("\n📖 {}", "Answers:".bright_cyan().bold());
        println!("{}", indent(&format_columns(&puzzle.sorted_words(), 6, 12)));
        println!(
            "\n   Pangrams: {}",
            puzzle.sorted_pangrams().join(", ").bright_green().bold()
        );
    }
}

/// Print the result of letter set analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER SET ANALYSIS:".bright_cyan().bold(),
        result.letter_set.id().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {}",
        format_board(&result.letter_set, result.letter_set.surrounding()).bold()
    );

    let verdict = match result.verdict {
        Verdict::Accepted => "✅ Acceptable puzzle".green().bold(),
        Verdict::TooFewWords => "❌ Too few words".red().bold(),
        Verdict::TooManyWords => "❌ Too many words".red().bold(),
        Verdict::NoPangram => "❌ No pangram".red().bold(),
    };
    println!("\n   {verdict}");
    println!("   Words:      {}", result.words.len());
    println!("   Pangrams:   {}", result.pangrams.join(", "));
    println!("   Max score:  {}", result.max_score);
    println!("   By length:  {}", format_histogram(&result.histogram));
    println!(
        "   Solved in:  {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );

    if !result.words.is_empty() {
        let words: Vec<&str> = result.words.iter().map(String::as_str).collect();
        println!("\n{}", indent(&format_columns(&words, 6, 12)));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Puzzles:          {}/{}",
        result.samples.len(),
        result.requested
    );
    println!(
        "   Average attempts: {}",
        format!("{:.0}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest attempts:  {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Most attempts:    {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!(
        "   Average latency:  {:.1}ms",
        result.average_latency.as_secs_f64() * 1000.0
    );
    println!(
        "   Worst latency:    {:.1}ms",
        result.max_latency.as_secs_f64() * 1000.0
    );
    println!("   Average words:    {:.1}", result.average_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".bright_red().bold());
        for (reason, count) in &result.failures {
            println!("   {count:4} × {reason}");
        }
    }
}

/// Write the letters and progress of a game in progress
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_status<W: Write>(out: &mut W, state: &GameState, ring: &[Letter]) -> io::Result<()> {
    let puzzle = state.puzzle();
    let bar = create_progress_bar(state.percent(), 100.0, 20);

    writeln!(out)?;
    writeln!(
        out,
        "   {}",
        format_board(puzzle.letter_set(), ring).bright_white().bold()
    )?;
    writeln!(
        out,
        "   {} [{}] {} ({} words found)",
        state.rank().name.bright_yellow().bold(),
        bar.green(),
        format!("{} pts", state.score()).bright_cyan(),
        state.found_words().len()
    )?;
    Ok(())
}

/// Write the reaction to a submitted word
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    let text = outcome.to_string();
    match outcome {
        Outcome::Accepted { pangram: true, .. } => writeln!(
            out,
            "   ✨ {} {}",
            "Pangram!".bright_magenta().bold(),
            text.green().bold()
        ),
        Outcome::Accepted { .. } => writeln!(out, "   {}", text.green().bold()),
        _ => writeln!(out, "   {}", text.red()),
    }
}

/// Write the words found so far
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_found_words<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let mut words: Vec<&str> = state.found_words().iter().map(String::as_str).collect();
    words.sort_unstable();

    writeln!(
        out,
        "\n   You have found {} of {} words:",
        words.len(),
        state.puzzle().valid_words().len()
    )?;
    if !words.is_empty() {
        writeln!(out, "{}", indent(&format_columns(&words, 6, 12)))?;
    }
    Ok(())
}

/// Write how many words remain by length and the points to the next rank
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_hint<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(
        out,
        "\n   Remaining by length: {}",
        format_histogram(state.remaining_histogram())
    )?;

    let pangrams_left = state.puzzle().pangrams().len() - state.pangrams_found();
    writeln!(out, "   Pangrams left:       {pangrams_left}")?;

    if let Some(rank) = next_rank(state.rank()) {
        let needed = points_to_rank(rank, state.score(), state.puzzle().max_score());
        writeln!(out, "   {needed} more points to reach {}", rank.name.bold())?;
    }
    Ok(())
}

/// Write every answer, marking the ones the player found
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_answers<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out, "\n   Answers for {}:", state.puzzle().id())?;
    for word in state.puzzle().sorted_words() {
        let marker = if state.has_found(word) { "✓" } else { " " };
        if state.puzzle().is_pangram(word) {
            writeln!(out, "   {marker} {}", word.bright_green().bold())?;
        } else {
            writeln!(out, "   {marker} {word}")?;
        }
    }
    Ok(())
}

/// Write a summary of finished games
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_game_summary<W: Write>(out: &mut W, results: &[GameResult]) -> io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SESSION SUMMARY".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    for result in results {
        writeln!(
            out,
            "   {}  {:>3}/{:<3} pts  {:>3} words  {}",
            result.puzzle_id,
            result.score,
            result.max_score,
            result.found_words.len(),
            result.rank.bright_yellow()
        )?;
    }
    Ok(())
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
