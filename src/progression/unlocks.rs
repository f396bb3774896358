//! Map level unlocks
//!
//! Levels on the map can be replayed up to the furthest level reached.
//! The last level of the map hosts the boss.

/// Whether a map level can be entered given the current progress
pub fn is_level_unlocked(level: u32, current_level: u32) -> bool {
    level >= 1 && level <= current_level
}

/// Whether the battle at this level is fought against the boss
pub fn is_boss_level(level: u32, boss_level: u32) -> bool {
    level >= boss_level
}
