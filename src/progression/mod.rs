//! Progression systems

pub mod skills;
pub mod loadout;
pub mod rewards;
pub mod difficulty;
pub mod unlocks;

pub use difficulty::EnemyScaling;
pub use skills::{Skill, SkillEffect, SkillKind, SkillRarity, StunTable, StunTier};
pub use loadout::{Loadout, RewardDecision};
pub use rewards::{RarityTable, RarityWeight, RewardGenerator};
pub use unlocks::{is_boss_level, is_level_unlocked};
