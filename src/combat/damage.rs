//! Damage calculation
//!
//! Combat math for skills and the enemy's counter-attack. Magnitudes are
//! whole percents (20 = 20%); modifiers are fractions (0.2 = 20%).

use crate::game::RandomSource;

/// Convert a whole-percent magnitude into a fraction
pub fn percent(magnitude: f32) -> f32 {
    magnitude / 100.0
}

/// Damage against a target carrying a defense-down debuff
pub fn amplified_damage(raw: f32, debuff: f32) -> f32 {
    raw * (1.0 + debuff)
}

/// Damage against a target carrying a defense-up buff
pub fn mitigated_damage(raw: f32, buff: f32) -> f32 {
    (raw * (1.0 - buff)).max(0.0)
}

/// Health-proportional amount (Lightning Strike damage, Aqua Mend healing)
pub fn percent_of_max(max_health: f32, magnitude: f32) -> f32 {
    max_health * percent(magnitude)
}

/// Roll a percent chance (0-100) against a unit draw
pub fn roll_chance(chance: f32, rng: &mut impl RandomSource) -> bool {
    if chance <= 0.0 {
        return false;
    }
    rng.next_unit() * 100.0 < chance
}
