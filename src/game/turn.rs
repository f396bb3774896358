//! Turn order for battles
//!
//! The player always acts first; the enemy answers each player action.

use serde::{Deserialize, Serialize};

use crate::combat::Side;

/// Whose action the battle is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Player,
    Enemy,
}

impl Turn {
    /// The turn that follows this one
    pub fn next(self) -> Turn {
        match self {
            Turn::Player => Turn::Enemy,
            Turn::Enemy => Turn::Player,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Turn::Player => Side::Player,
            Turn::Enemy => Side::Enemy,
        }
    }
}

/// Terminal result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerDefeated,
    EnemyDefeated,
}

impl BattleOutcome {
    pub fn loser(self) -> Side {
        match self {
            BattleOutcome::PlayerDefeated => Side::Player,
            BattleOutcome::EnemyDefeated => Side::Enemy,
        }
    }

    pub fn player_won(self) -> bool {
        self == BattleOutcome::EnemyDefeated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        assert_eq!(Turn::default(), Turn::Player);
        assert_eq!(Turn::Player.next(), Turn::Enemy);
        assert_eq!(Turn::Enemy.next(), Turn::Player);
    }

    #[test]
    fn test_outcome_sides() {
        assert_eq!(BattleOutcome::PlayerDefeated.loser(), Side::Player);
        assert!(BattleOutcome::EnemyDefeated.player_won());
    }
}
