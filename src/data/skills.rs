//! Skill catalog for data-driven skill creation
//!
//! Each archetype carries one stat row per rarity. The catalog is loaded
//! from RON when available and falls back to the built-in table.

use serde::{Deserialize, Serialize};

use crate::progression::{Skill, SkillEffect, SkillKind, SkillRarity};

/// Stats of one archetype at one rarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTier {
    pub rarity: SkillRarity,
    pub magnitude: f32,
    pub cooldown: u32,
    pub duration: u32,
    pub description: String,
}

/// A base skill and its rarity-scaled stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillArchetype {
    pub kind: SkillKind,
    pub effect: SkillEffect,
    pub tiers: Vec<SkillTier>,
}

impl SkillArchetype {
    pub fn tier(&self, rarity: SkillRarity) -> Option<&SkillTier> {
        self.tiers.iter().find(|t| t.rarity == rarity)
    }
}

/// Collection of skill archetypes, in reward-pool order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub archetypes: Vec<SkillArchetype>,
}

impl SkillCatalog {
    /// Find an archetype by kind
    pub fn find(&self, kind: SkillKind) -> Option<&SkillArchetype> {
        self.archetypes.iter().find(|a| a.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Build a fresh skill for a (kind, rarity) cell
    ///
    /// A missing archetype or tier yields a zero-effect skill instead of an error.
    pub fn create(&self, kind: SkillKind, rarity: SkillRarity) -> Skill {
        let Some(archetype) = self.find(kind) else {
            log::warn!("No catalog entry for {}, using zero-effect skill", kind.name());
            return Skill::zero_effect(kind, rarity);
        };
        match archetype.tier(rarity) {
            Some(tier) => Skill::new(
                kind,
                rarity,
                archetype.effect.clone(),
                tier.magnitude,
                tier.duration,
                tier.cooldown,
                tier.description.clone(),
            ),
            None => {
                log::warn!("No {} tier for {}, using zero-effect skill", rarity.name(), kind.name());
                let mut skill = Skill::zero_effect(kind, rarity);
                skill.effect = archetype.effect.clone();
                skill
            }
        }
    }

    /// List (kind, rarity) cells missing from the catalog
    pub fn missing_cells(&self) -> Vec<(SkillKind, SkillRarity)> {
        let mut missing = Vec::new();
        for kind in SkillKind::ALL {
            for rarity in SkillRarity::ALL {
                if self.find(kind).and_then(|a| a.tier(rarity)).is_none() {
                    missing.push((kind, rarity));
                }
            }
        }
        missing
    }
}

fn tier(rarity: SkillRarity, magnitude: f32, cooldown: u32, duration: u32, description: &str) -> SkillTier {
    SkillTier {
        rarity,
        magnitude,
        cooldown,
        duration,
        description: description.to_string(),
    }
}

fn archetype(kind: SkillKind, tiers: [SkillTier; 5]) -> SkillArchetype {
    SkillArchetype {
        kind,
        effect: kind.default_effect(),
        tiers: Vec::from(tiers),
    }
}

/// Create the default skill catalog (hardcoded fallback)
pub fn default_skill_catalog() -> SkillCatalog {
    use SkillRarity::*;

    SkillCatalog {
        archetypes: vec![
            archetype(SkillKind::SpiritPulse, [
                tier(Common, 2.0, 0, 0, "Deals 2 damage."),
                tier(Uncommon, 3.0, 0, 0, "Deals 3 damage."),
                tier(Rare, 4.0, 0, 0, "Deals 4 damage."),
                tier(Epic, 5.0, 0, 0, "Deals 5 damage."),
                tier(Legendary, 30.0, 3, 0, "Deals 30 damage."),
            ]),
            archetype(SkillKind::Fireball, [
                tier(Common, 5.0, 0, 0, "Deals 5 damage."),
                tier(Uncommon, 10.0, 0, 0, "Deals 10 damage."),
                tier(Rare, 15.0, 0, 0, "Deals 15 damage."),
                tier(Epic, 20.0, 2, 0, "Deals 20 damage."),
                tier(Legendary, 25.0, 2, 0, "Deals 25 damage."),
            ]),
            archetype(SkillKind::AquaMend, [
                tier(Common, 5.0, 0, 0, "Heals 5%."),
                tier(Uncommon, 10.0, 0, 0, "Heals 10%."),
                tier(Rare, 15.0, 1, 0, "Heals 15%."),
                tier(Epic, 20.0, 2, 0, "Heals 20%."),
                tier(Legendary, 25.0, 2, 0, "Heals 25%."),
            ]),
            archetype(SkillKind::LightningStrike, [
                tier(Common, 5.0, 1, 0, "Deals 5%, 20% stun."),
                tier(Uncommon, 10.0, 1, 0, "Deals 10%, 20% stun."),
                tier(Rare, 15.0, 2, 0, "Deals 15%, 30% stun."),
                tier(Epic, 20.0, 2, 0, "Deals 20%, 30% stun."),
                tier(Legendary, 25.0, 3, 0, "Deals 25%, 50% stun."),
            ]),
            archetype(SkillKind::Entrap, [
                tier(Common, 10.0, 1, 1, "Defense Down 10% for 1 turn."),
                tier(Uncommon, 10.0, 1, 2, "Defense Down 10% for 2 turns."),
                tier(Rare, 20.0, 2, 2, "Defense Down 20% for 2 turns."),
                tier(Epic, 20.0, 2, 3, "Defense Down 20% for 3 turns."),
                tier(Legendary, 30.0, 3, 3, "Defense Down 30% for 3 turns."),
            ]),
            archetype(SkillKind::EarthShell, [
                tier(Common, 10.0, 1, 1, "Defense Up 10% for 1 turn."),
                tier(Uncommon, 10.0, 1, 2, "Defense Up 10% for 2 turns."),
                tier(Rare, 20.0, 2, 2, "Defense Up 20% for 2 turns."),
                tier(Epic, 20.0, 2, 3, "Defense Up 20% for 3 turns."),
                tier(Legendary, 30.0, 3, 3, "Defense Up 30% for 3 turns."),
            ]),
        ],
    }
}
