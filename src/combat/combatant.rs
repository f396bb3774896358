//! Combatant state
//!
//! Health plus the timed modifiers and stun flag of one side of a battle.

use serde::{Deserialize, Serialize};

use super::status::{StatusKind, TimedModifier};

/// Which side of the battle an actor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Enemy => "Enemy",
        }
    }
}

/// One actor in a battle
///
/// Health always stays within `0..=max_health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    current_health: f32,
    max_health: f32,
    /// Defense up (used on the player)
    pub buff: TimedModifier,
    /// Defense down (used on the enemy)
    pub debuff: TimedModifier,
    stunned: bool,
}

impl Combatant {
    pub fn new(max_health: f32) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            current_health: max_health,
            max_health,
            buff: TimedModifier::default(),
            debuff: TimedModifier::default(),
            stunned: false,
        }
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Remove health, returning the amount actually lost
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current_health);
        self.current_health -= actual;
        actual
    }

    /// Restore health up to max, returning the amount actually gained
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.max_health - self.current_health);
        self.current_health += actual;
        actual
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0.0
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    pub fn stun(&mut self) {
        self.stunned = true;
    }

    /// Clear the stun flag, returning whether it was set
    pub fn consume_stun(&mut self) -> bool {
        std::mem::replace(&mut self.stunned, false)
    }

    /// Count down buff and debuff, returning the kinds that expired
    pub fn tick_modifiers(&mut self) -> Vec<StatusKind> {
        let mut expired = Vec::new();
        if self.debuff.tick() {
            expired.push(StatusKind::Debuff);
        }
        if self.buff.tick() {
            expired.push(StatusKind::Buff);
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamps() {
        let mut c = Combatant::new(12.0);
        assert_eq!(c.take_damage(5.0), 5.0);
        assert_eq!(c.current_health(), 7.0);
        assert_eq!(c.heal(100.0), 5.0);
        assert_eq!(c.current_health(), 12.0);
        assert_eq!(c.take_damage(40.0), 12.0);
        assert_eq!(c.current_health(), 0.0);
        assert!(c.is_defeated());
        assert_eq!(c.take_damage(-3.0), 0.0);
        assert_eq!(c.current_health(), 0.0);
    }

    #[test]
    fn test_stun_is_consumed_once() {
        let mut c = Combatant::new(10.0);
        assert!(!c.consume_stun());
        c.stun();
        assert!(c.is_stunned());
        assert!(c.consume_stun());
        assert!(!c.is_stunned());
    }

    #[test]
    fn test_tick_modifiers_reports_expiry() {
        let mut c = Combatant::new(10.0);
        c.buff.apply(0.1, 1);
        c.debuff.apply(0.2, 2);
        assert_eq!(c.tick_modifiers(), vec![StatusKind::Buff]);
        assert_eq!(c.tick_modifiers(), vec![StatusKind::Debuff]);
        assert!(c.tick_modifiers().is_empty());
    }
}
