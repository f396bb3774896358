//! Game module - battle engine and campaign state management

mod battle;
mod events;
mod rng;
mod state;
mod turn;

pub use battle::Battle;
pub use events::BattleEvent;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use state::{Game, GameState};
pub use turn::{BattleOutcome, Turn};
