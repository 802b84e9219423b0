//! Display functions for command results

use super::formatters::{honeycomb_lines, score_bar};
use crate::commands::{
    AnalysisResult, BatchResult, FilterReport, GenerateResult, SuggestionReport, WordsResult,
};
use crate::generator::Puzzle;
use colored::Colorize;
use serde::Serialize;

/// Print any serializable result as pretty JSON
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the honeycomb for a puzzle
pub fn print_honeycomb(center: char, outer: &[char]) {
    let [top, middle, bottom] = honeycomb_lines(center, outer);
    println!("  {}", top.bright_white().bold());
    println!("  {}", middle.bright_yellow().bold());
    println!("  {}", bottom.bright_white().bold());
}

/// Print a generated puzzle with its stats
pub fn print_puzzle(puzzle: &Puzzle, show_words: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        puzzle.letters.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();
    print_honeycomb(puzzle.center_letter, &puzzle.outer_letters());

    let stats = &puzzle.stats;
    println!("\n📊 {}", "Stats:".bright_cyan().bold());
    println!("   Center letter:  {}", puzzle.center_letter.to_string().bright_yellow());
    println!("   Answers:        {}", puzzle.valid_words.len());
    println!("   Letters used:   {}/7", stats.used_letter_count);
    println!("   Total points:   {}", stats.total_possible_score);
    println!(
        "   Heuristic:      [{}] {}",
        score_bar(stats.heuristic_score, 30).green(),
        format!("{:.1}", stats.heuristic_score).bright_yellow()
    );

    if show_words && !puzzle.valid_words.is_empty() {
        println!("\n📖 {}", "Answers:".bright_cyan().bold());
        print_word_columns(&puzzle.valid_words);
    }
}

/// Print the result of the generate command
pub fn print_generate_result(result: &GenerateResult, verbose: bool) {
    print_puzzle(&result.puzzle, verbose);
    if verbose {
        println!();
        if let Some(seed) = result.seed {
            println!("   Seed:           {seed}");
        }
        println!("   Time taken:     {:.3}s", result.duration.as_secs_f64());
    }
}

/// Print words matching a letter set
pub fn print_words_result(result: &WordsResult) {
    println!(
        "\n{} {}",
        result.count.to_string().bright_yellow().bold(),
        if result.count == 1 { "word" } else { "words" }
    );
    print_word_columns(&result.valid_words);
}

/// Print the per-center analysis of a letter set
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER SET ANALYSIS:".bright_cyan().bold(),
        result.letters.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Minimum word length: {}\n", result.min_length);
    println!("   Center  Words  Used  Points  Heuristic");
    for center in &result.centers {
        let line = format!(
            "   {:^6}  {:>5}  {:>4}  {:>6}  {:>9.1}",
            center.center,
            center.word_count,
            center.stats.used_letter_count,
            center.stats.total_possible_score,
            center.stats.heuristic_score
        );
        if center.center == result.best_center {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n🏆 Best center: {}",
        result.best_center.to_string().bright_yellow().bold()
    );
    if !result.best_words.is_empty() {
        print_word_columns(&result.best_words);
    }
}

/// Print the summary of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Quality:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!("   Best score:       {}", format!("{:.1}", result.max_score).green());
    println!("   Worst score:      {}", format!("{:.1}", result.min_score).yellow());
    println!("   Average answers:  {:.1}", result.average_words);
    println!("   Empty puzzles:    {}", result.empty_puzzles);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.total_puzzles > 0 {
        println!("\n📈 {}", "Letters used:".bright_cyan().bold());
        for (used, &count) in result.letter_distribution.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {used}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if let Some(best) = &result.best {
        println!(
            "\n🏆 Best puzzle: {} (center {})",
            best.letters.to_string().bright_yellow().bold(),
            best.center_letter.to_string().bright_yellow()
        );
    }
}

/// Print what the dictionary filter did
pub fn print_filter_report(report: &FilterReport, verbose: bool) {
    println!("\n   Original words:  {}", report.original_count);
    println!("   Removed:         {}", report.removed.len().to_string().red());
    println!("   Remaining:       {}", report.kept.len().to_string().green());

    if verbose && !report.removed.is_empty() {
        println!("\n   Removed words:");
        for word in &report.removed {
            println!("     • {word}");
        }
    }

    if report.what_if {
        println!(
            "\n{}",
            format!("What-if: {} was not modified", report.output.display()).yellow()
        );
    } else {
        println!(
            "\n{}",
            format!("✅ Wrote {}", report.output.display()).green().bold()
        );
    }
}

/// Print what applying dictionary suggestions did
pub fn print_suggestion_report(report: &SuggestionReport) {
    let sections = [
        ("Words to ADD", "+", &report.added),
        ("Words already in dictionary", "=", &report.already_present),
        ("Words to REMOVE", "-", &report.removed),
        ("Words not found in dictionary", "?", &report.not_found),
    ];
    for (title, marker, words) in sections {
        if words.is_empty() {
            continue;
        }
        println!("\n{} ({}):", title.bright_cyan().bold(), words.len());
        for word in words {
            println!("  {marker} {word}");
        }
    }

    if report.what_if {
        println!(
            "\n{}",
            format!(
                "What-if: would result in {} words (currently {})",
                report.final_count, report.original_count
            )
            .yellow()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "✅ Dictionary updated: {} words (was {})",
                report.final_count, report.original_count
            )
            .green()
            .bold()
        );
        println!("{}", "✅ Suggestions file cleared".green());
    }
}

/// Print words in fixed-width columns
pub fn print_word_columns<S: AsRef<str>>(words: &[S]) {
    const COLUMNS: usize = 6;
    let width = words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    for row in words.chunks(COLUMNS) {
        let line: String = row
            .iter()
            .map(|w| format!("{:<width$}", w.as_ref()))
            .collect();
        println!("   {}", line.trim_end());
    }
}
