//! Level-based enemy scaling
//!
//! Enemy health and attack grow exponentially with the dungeon level:
//! `base * factor^(level - 1)`.

use serde::{Deserialize, Serialize};

/// Per-level scaling of the enemy's base stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyScaling {
    pub base_health: f32,
    pub base_attack: f32,
    /// Multiplier applied once per level above 1
    pub factor: f32,
}

impl EnemyScaling {
    pub fn new(base_health: f32, base_attack: f32, factor: f32) -> Self {
        Self { base_health, base_attack, factor }
    }

    /// Scaling multiplier (1.0 at level 1)
    pub fn level_factor(&self, level: u32) -> f32 {
        let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
        self.factor.powi(exponent)
    }

    /// Enemy max health at a level
    pub fn health(&self, level: u32) -> f32 {
        self.base_health * self.level_factor(level)
    }

    /// Enemy attack damage at a level, before the player's buff
    pub fn attack(&self, level: u32) -> f32 {
        self.base_attack * self.level_factor(level)
    }
}

impl Default for EnemyScaling {
    fn default() -> Self {
        Self::new(12.0, 2.0, 1.05)
    }
}
