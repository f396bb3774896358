//! Timed status effects
//!
//! Buffs and debuffs are a single percent with a turn counter. A new
//! application replaces the old one outright; nothing stacks.

use serde::{Deserialize, Serialize};

/// Which kind of modifier a combatant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    /// Defense up: reduces incoming damage
    Buff,
    /// Defense down: amplifies incoming damage
    Debuff,
}

impl StatusKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Buff => "Defense Up",
            StatusKind::Debuff => "Defense Down",
        }
    }
}

/// A percent modifier that lasts a number of enemy turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedModifier {
    percent: f32,
    turns_remaining: u32,
}

impl TimedModifier {
    /// Replace the current modifier (last applied wins)
    pub fn apply(&mut self, percent: f32, turns: u32) {
        self.percent = percent;
        self.turns_remaining = turns;
    }

    /// Fraction in `[0, 1]` terms (0.2 = 20%)
    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn is_active(&self) -> bool {
        self.percent != 0.0
    }

    /// Count down one turn. A counter at zero clears the percent.
    /// Returns true if the modifier expired on this tick.
    pub fn tick(&mut self) -> bool {
        if self.turns_remaining > 0 {
            self.turns_remaining -= 1;
        }
        if self.turns_remaining == 0 && self.is_active() {
            self.percent = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let mut shell = TimedModifier::default();
        shell.apply(0.2, 2);
        assert!(!shell.tick());
        assert_eq!(shell.percent(), 0.2);
        assert_eq!(shell.turns_remaining(), 1);
        assert!(shell.tick());
        assert_eq!(shell.percent(), 0.0);
        assert!(!shell.tick());
    }

    #[test]
    fn test_overwrites_instead_of_stacking() {
        let mut trap = TimedModifier::default();
        trap.apply(0.3, 3);
        trap.apply(0.1, 1);
        assert_eq!(trap.percent(), 0.1);
        assert_eq!(trap.turns_remaining(), 1);
    }

    #[test]
    fn test_zero_duration_clears_on_first_tick() {
        let mut m = TimedModifier::default();
        m.apply(0.1, 0);
        assert!(m.is_active());
        assert!(m.tick());
        assert!(!m.is_active());
    }
}
