//! Spirit's Covenant - turn-based battle core
//!
//! Two combatants, a four-slot skill loadout, cooldowns, timed buffs and
//! debuffs, level-scaled enemies and rarity-weighted skill rewards.
//! Presentation layers drive the engine and read its state and events.

pub mod game;
pub mod combat;
pub mod progression;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use game::{Battle, BattleEvent, BattleOutcome, Game, GameState, Turn};
pub use game::{RandomSource, ScriptedRandom, SeededRandom};
pub use progression::{Loadout, Skill, SkillEffect, SkillKind, SkillRarity};
pub use save::SaveState;
pub use data::{BattleConfig, DataManager};
