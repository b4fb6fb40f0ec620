//! Game state machine and players

mod engine;
mod player;
mod state;

pub use engine::{EXIT_TOKEN, GameLoop, Move, TurnOutcome};
pub use player::{
    GUESS_PROMPT, HumanPlayer, InputSource, Player, ScriptedInput, StdinInput, StrategyPlayer,
};
pub use state::{Board, GameConfig, GameResult, GameState, GameStatus, MAX_ATTEMPTS};
