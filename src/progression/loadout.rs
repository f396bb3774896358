//! Player skill loadout
//!
//! Up to four equipped skills in display order, carried between battles.

use serde::{Deserialize, Serialize};

use super::skills::Skill;

/// Result of offering a new skill to the loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardDecision {
    /// Appended into the given slot
    Added(usize),
    /// Loadout is full; the player has to pick a slot to overwrite
    ReplacementNeeded,
}

/// Player's equipped skills
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadout {
    skills: Vec<Skill>,
}

impl Loadout {
    pub const MAX_SLOTS: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of skills, keeping at most the first four
    pub fn from_skills(mut skills: Vec<Skill>) -> Self {
        if skills.len() > Self::MAX_SLOTS {
            log::warn!("Loadout had {} skills, truncating to {}", skills.len(), Self::MAX_SLOTS);
            skills.truncate(Self::MAX_SLOTS);
        }
        for skill in &mut skills {
            skill.normalize();
        }
        Self { skills }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.skills.len() >= Self::MAX_SLOTS
    }

    pub fn get(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Skill> {
        self.skills.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    /// Offer a reward: appended when there is room, otherwise a replacement is needed
    pub fn confirm_reward(&mut self, reward: Skill) -> RewardDecision {
        if self.is_full() {
            return RewardDecision::ReplacementNeeded;
        }
        log::info!("Learned {}", reward.label());
        self.skills.push(reward);
        RewardDecision::Added(self.skills.len() - 1)
    }

    /// Overwrite a slot, returning the skill that was there
    ///
    /// Out-of-range slots are ignored and the reward is dropped.
    pub fn replace_skill(&mut self, slot: usize, reward: Skill) -> Option<Skill> {
        let existing = self.skills.get_mut(slot)?;
        log::info!("Replaced {} with {} in slot {}", existing.label(), reward.label(), slot);
        Some(std::mem::replace(existing, reward))
    }

    /// Advance every cooldown by one turn
    pub fn tick_cooldowns(&mut self) {
        for skill in &mut self.skills {
            skill.tick_cooldown();
        }
    }

    pub fn into_skills(self) -> Vec<Skill> {
        self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{SkillKind, SkillRarity};

    fn skill(kind: SkillKind) -> Skill {
        Skill::new(kind, SkillRarity::Common, kind.default_effect(), 5.0, 0, 1, "")
    }

    #[test]
    fn test_confirm_appends_until_full() {
        let mut loadout = Loadout::new();
        for (i, kind) in SkillKind::ALL.iter().take(4).enumerate() {
            assert_eq!(loadout.confirm_reward(skill(*kind)), RewardDecision::Added(i));
        }
        assert!(loadout.is_full());
        assert_eq!(loadout.confirm_reward(skill(SkillKind::EarthShell)), RewardDecision::ReplacementNeeded);
        assert_eq!(loadout.len(), 4);
        assert!(loadout.iter().all(|s| s.kind != SkillKind::EarthShell));
    }

    #[test]
    fn test_replace_touches_only_target_slot() {
        let mut loadout = Loadout::from_skills(SkillKind::ALL.iter().take(4).map(|k| skill(*k)).collect());
        let before = loadout.clone();

        let old = loadout.replace_skill(2, skill(SkillKind::EarthShell));
        assert_eq!(old.map(|s| s.kind), Some(SkillKind::AquaMend));
        assert_eq!(loadout.get(2).map(|s| s.kind), Some(SkillKind::EarthShell));
        for slot in [0, 1, 3] {
            assert_eq!(loadout.get(slot), before.get(slot));
        }
    }

    #[test]
    fn test_replace_out_of_range_is_ignored() {
        let mut loadout = Loadout::from_skills(vec![skill(SkillKind::Fireball)]);
        assert!(loadout.replace_skill(3, skill(SkillKind::Entrap)).is_none());
        assert_eq!(loadout.len(), 1);
        assert_eq!(loadout.get(0).map(|s| s.kind), Some(SkillKind::Fireball));
    }

    #[test]
    fn test_from_skills_truncates() {
        let loadout = Loadout::from_skills(SkillKind::ALL.iter().map(|k| skill(*k)).collect());
        assert_eq!(loadout.len(), Loadout::MAX_SLOTS);
    }
}
