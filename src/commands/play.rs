//! Interactive play and watch modes
//!
//! A session lets a person pick who plays (themselves, the bot, or the AI),
//! plays a game, then offers to play again or switch players.

use crate::error::Result;
use crate::game::{
    GameConfig, GameLoop, GameResult, HumanPlayer, InputSource, Player, StrategyPlayer,
};
use crate::output::{print_board, print_game_over, print_turn};
use crate::solver::{Knowledge, StrategyKind, StrategyType};
use rand::Rng;

/// Who plays the next game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    Human,
    /// Frequency, then pattern-weighted in the endgame
    Bot,
    /// Frequency, then distribution in the endgame
    Ai,
}

impl PlayerChoice {
    const PROMPT: &'static str = "Choose player type:\n1. Human\n2. Bot\n3. AI\nEnter 1, 2, or 3: ";

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Human),
            "2" => Some(Self::Bot),
            "3" => Some(Self::Ai),
            _ => None,
        }
    }

    const fn strategy(self) -> Option<StrategyKind> {
        match self {
            Self::Human => None,
            Self::Bot => Some(StrategyKind::Bot),
            Self::Ai => Some(StrategyKind::BotAi),
        }
    }
}

/// What to do after a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    Exit,
    PlayAgain,
    ChangePlayer,
}

impl SessionChoice {
    const PROMPT: &'static str = "Do you want to play again?\nPress 0 to exit, 1 to play again, or 2 to change player type\nEnter 0, 1, or 2: ";

    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Self::Exit),
            "1" => Some(Self::PlayAgain),
            "2" => Some(Self::ChangePlayer),
            _ => None,
        }
    }
}

/// Settings shared by every game of a session
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// Endgame threshold for the bot and AI players
    pub threshold: u8,
}

/// Ask until `parse` accepts the answer; `None` once input ends
fn ask<I, T>(input: &mut I, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>>
where
    I: InputSource + ?Sized,
{
    loop {
        let Some(line) = input.read_line(prompt)? else {
            return Ok(None);
        };
        if let Some(choice) = parse(&line) {
            return Ok(Some(choice));
        }
        println!("Invalid choice, try again.");
    }
}

/// Play one game with any player, printing the board after every turn
///
/// # Errors
/// Propagates input failures from the player.
pub fn play_game<P, R>(
    knowledge: &Knowledge,
    player: &mut P,
    rng: &mut R,
    config: GameConfig,
) -> Result<GameResult>
where
    P: Player + ?Sized,
    R: Rng + ?Sized,
{
    let game = GameLoop::start(knowledge.lexicon(), rng, config);
    print_board(game.board());

    let name = player.name().to_string();
    let result = game.run(player, |outcome, state| print_turn(&name, outcome, state))?;
    print_game_over(&result);
    Ok(result)
}

/// Let a strategy play one game on screen
///
/// # Errors
/// Strategy players never fail; the `Result` mirrors [`play_game`].
pub fn watch_game<R: Rng + ?Sized>(
    knowledge: &Knowledge,
    kind: StrategyKind,
    threshold: u8,
    rng: &mut R,
    config: GameConfig,
) -> Result<GameResult> {
    let mut player = StrategyPlayer::new(StrategyType::build(kind, knowledge, threshold));
    play_game(knowledge, &mut player, rng, config)
}

/// Run games until the person exits or input ends
///
/// Returns every finished game in order.
///
/// # Errors
/// Returns an I/O error if input cannot be read.
pub fn run_session<I, R>(
    knowledge: &Knowledge,
    input: &mut I,
    rng: &mut R,
    config: SessionConfig,
) -> Result<Vec<GameResult>>
where
    I: InputSource,
    R: Rng + ?Sized,
{
    let mut results = Vec::new();
    let Some(mut choice) = ask(input, PlayerChoice::PROMPT, PlayerChoice::parse)? else {
        return Ok(results);
    };

    println!("Welcome to Hangman!");
    loop {
        tracing::debug!(?choice, "starting game");
        let result = match choice.strategy() {
            None => {
                let mut player = HumanPlayer::new("You", &mut *input);
                play_game(knowledge, &mut player, rng, config.game)?
            }
            Some(kind) => watch_game(knowledge, kind, config.threshold, rng, config.game)?,
        };
        results.push(result);

        match ask(input, SessionChoice::PROMPT, SessionChoice::parse)? {
            Some(SessionChoice::PlayAgain) => {}
            Some(SessionChoice::ChangePlayer) => {
                match ask(input, PlayerChoice::PROMPT, PlayerChoice::parse)? {
                    Some(next) => choice = next,
                    None => break,
                }
            }
            Some(SessionChoice::Exit) | None => break,
        }
    }

    println!("Thanks for playing!");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::game::ScriptedInput;
    use crate::lexicon::{LetterRanking, LetterStats, Lexicon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn knowledge() -> Knowledge {
        let lexicon = Lexicon::from_entries(vec![WordEntry::new("cat", 1.0).unwrap()]).unwrap();
        let ranking = LetterRanking::build(&LetterStats::from_words(["cat"]));
        Knowledge::new(lexicon, ranking)
    }

    fn config() -> SessionConfig {
        SessionConfig {
            game: GameConfig::default(),
            threshold: 2,
        }
    }

    #[test]
    fn human_session_plays_until_exit() {
        let knowledge = knowledge();
        let mut input = ScriptedInput::new(["1", "c", "a", "t", "1", "z", "exit", "0"]);
        let mut rng = StdRng::seed_from_u64(1);

        let results = run_session(&knowledge, &mut input, &mut rng, config()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].won);
        assert!(!results[1].won);
        assert_eq!(results[1].attempts_used, 1);
    }

    #[test]
    fn invalid_menu_choices_are_asked_again() {
        let knowledge = knowledge();
        let mut input = ScriptedInput::new(["9", "2", "x", "2", "3", "0"]);
        let mut rng = StdRng::seed_from_u64(1);

        let results = run_session(&knowledge, &mut input, &mut rng, config()).unwrap();

        // Bot game, then a switch to the AI for a second game
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.won));
    }

    #[test]
    fn session_ends_quietly_when_input_ends() {
        let knowledge = knowledge();
        let mut rng = StdRng::seed_from_u64(1);

        let results =
            run_session(&knowledge, &mut ScriptedInput::default(), &mut rng, config()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn watched_bot_wins_single_word_lexicon() {
        let knowledge = knowledge();
        let mut rng = StdRng::seed_from_u64(9);

        let result = watch_game(&knowledge, StrategyKind::Frequency, 2, &mut rng, GameConfig::default())
            .unwrap();
        assert!(result.won);
        assert_eq!(result.attempts_used, 0);
    }
}
