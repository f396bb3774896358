//! Battle tuning loaded from `battle.ron`

use serde::{Deserialize, Serialize};

use crate::progression::{EnemyScaling, SkillKind, SkillRarity};

/// Tunable numbers for battles and the reward screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub player_max_health: f32,
    pub enemy_base_health: f32,
    pub enemy_base_attack: f32,
    /// Per-level multiplier for enemy health and attack
    pub enemy_scaling_factor: f32,
    /// Pause the presentation layer inserts before the enemy acts
    pub enemy_turn_delay_ms: u64,
    /// First level fought against the boss
    pub boss_level: u32,
    /// Rewards offered after a won battle
    pub reward_offer_count: usize,
    /// Skill granted when starting with an empty loadout
    pub starting_skill: (SkillKind, SkillRarity),
}

impl BattleConfig {
    pub fn enemy_scaling(&self) -> EnemyScaling {
        EnemyScaling::new(self.enemy_base_health, self.enemy_base_attack, self.enemy_scaling_factor)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_max_health: 120.0,
            enemy_base_health: 12.0,
            enemy_base_attack: 2.0,
            enemy_scaling_factor: 1.05,
            enemy_turn_delay_ms: 500,
            boss_level: 10,
            reward_offer_count: 3,
            starting_skill: (SkillKind::SpiritPulse, SkillRarity::Common),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: BattleConfig = ron::from_str("(player_max_health: 80.0, boss_level: 5)").unwrap();
        assert_eq!(config.player_max_health, 80.0);
        assert_eq!(config.boss_level, 5);
        assert_eq!(config.enemy_base_attack, 2.0);
        assert_eq!(config.reward_offer_count, 3);
    }

    #[test]
    fn test_scaling_from_config() {
        let scaling = BattleConfig::default().enemy_scaling();
        assert_eq!(scaling, EnemyScaling::default());
    }
}
