//! Display functions for games and command results

use super::formatters::{render_board, win_rate_bar};
use crate::commands::{BatchReport, LexiconStats, SuggestResult};
use crate::game::{Board, GameResult, GameState, GameStatus, TurnOutcome};
use colored::Colorize;

/// Print the gallows, the pattern, and the guessed letters
pub fn print_board(board: &Board) {
    println!("{}", render_board(board));
}

/// Print the feedback for one turn, then the board if it changed
pub fn print_turn(player: &str, outcome: &TurnOutcome, state: &GameState) {
    match outcome {
        TurnOutcome::Hit { letter, .. } => {
            println!("{player} guesses: {}", letter.to_string().bright_yellow());
            println!("{}", format!("Good guess! '{letter}' is in the word.").green());
        }
        TurnOutcome::Miss { letter, .. } => {
            println!("{player} guesses: {}", letter.to_string().bright_yellow());
            println!("{}", format!("Sorry, '{letter}' is not in the word.").red());
        }
        TurnOutcome::Invalid(err) => {
            println!("{}", err.to_string().yellow());
            return;
        }
        TurnOutcome::Aborted => {
            println!("Exiting the game.");
            return;
        }
        TurnOutcome::Exhausted => {
            println!("{}", format!("{player} has no letters left to guess.").red());
            return;
        }
        TurnOutcome::GameOver => return,
    }

    if state.status() == GameStatus::InProgress {
        print_board(state.board());
    }
}

/// Print the end-of-game message
pub fn print_game_over(result: &GameResult) {
    println!();
    if result.won {
        println!(
            "{}",
            format!("Congratulations! You guessed the word: {}", result.word)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Game over! The word was: {}", result.word).red().bold()
        );
    }
}

/// Print the result of a batch run
pub fn print_batch_report(report: &BatchReport, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", report.total_games);
    println!(
        "   Wins:             {}",
        format!("{}", report.wins).green().bold()
    );
    println!(
        "   Win rate:         {} {}",
        win_rate_bar(report.win_rate, 30).green(),
        format!("{:.2}%", report.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Avg guesses:      {:.2}", report.average_guesses);
    println!("   Avg misses:       {:.2}", report.average_attempts_used);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", report.games_per_second());

    println!("\n📈 {}", "Win rate by word length:".bright_cyan().bold());
    for (len, &(wins, games)) in &report.wins_by_length {
        let rate = wins as f64 / games as f64;
        println!(
            "   {len:2}: {} {wins:5}/{games:<5} ({:5.1}%)",
            win_rate_bar(rate, 30).green(),
            rate * 100.0
        );
    }
}

/// Print what each strategy suggests for a position
pub fn print_suggestion(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {} ({} blank)   Guessed: {}   Attempts remaining: {}",
        result.board.pattern().to_string().bright_yellow().bold(),
        result.blanks,
        result.board.guessed(),
        result.board.attempts_remaining()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nMatching words: {}", result.candidate_count);
    for (word, weight) in &result.top_candidates {
        println!("   {word:<15} {weight:>12.3}");
    }
    if let Some(word) = &result.best_word {
        println!("Most likely word: {}", word.bright_green());
    }

    println!("\n{}", "Suggestions:".bright_cyan().bold());
    for suggestion in &result.suggestions {
        match (suggestion.letter, suggestion.rank, suggestion.profile) {
            (Some(letter), Some(rank), Some(profile)) => println!(
                "   {:<14} {}  (frequency rank {}, in {:.1}% of {}-letter words)",
                suggestion.kind.name(),
                letter.to_string().bright_yellow(),
                rank + 1,
                profile * 100.0,
                result.board.word_len()
            ),
            _ => println!("   {:<14} {}", suggestion.kind.name(), "-".bright_yellow()),
        }
    }

    if let Some(letter) = result.recommended.letter {
        println!(
            "\n{}",
            format!("➡ Guess '{letter}' ({})", result.recommended.kind)
                .green()
                .bold()
        );
    }
}

/// Print lexicon and ranking statistics
pub fn print_lexicon_stats(stats: &LexiconStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEXICON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Words:            {}", stats.words);
    println!("   Total weight:     {:.1}", stats.total_weight);
    println!(
        "   Letter ranking:   {}",
        stats.ranking.bright_yellow().bold()
    );
    println!("   Length profiles:  {}", stats.profiled_lengths);

    let largest = stats.lengths.iter().map(|&(_, n)| n).max().unwrap_or(1);
    println!("\n📏 {}", "Words by length:".bright_cyan().bold());
    for &(len, count) in &stats.lengths {
        let width = count * 40 / largest;
        println!("   {len:2}: {} {count}", "█".repeat(width).green());
    }

    println!("\n🎯 {}", "Most likely targets:".bright_cyan().bold());
    for (word, weight) in &stats.heaviest {
        println!("   {word:<15} {weight:>12.3}");
    }
}
