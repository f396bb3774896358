//! Combat system

pub mod combatant;
pub mod damage;
pub mod status;

pub use combatant::{Combatant, Side};
pub use damage::{amplified_damage, mitigated_damage, percent_of_max, roll_chance};
pub use status::{StatusKind, TimedModifier};
