//! Data loading and external game content
//!
//! Battle tuning, rarity weights and the skill catalog, loaded from RON
//! files so they can be rebalanced without a rebuild.

pub mod config;
pub mod loader;
pub mod skills;

pub use config::BattleConfig;
pub use loader::{DataError, DataManager, DEFAULT_DATA_DIR};
pub use skills::{default_skill_catalog, SkillArchetype, SkillCatalog, SkillTier};
