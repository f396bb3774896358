//! Reward generation
//!
//! Rolls skill rewards after a won battle: rarity from a level-indexed
//! weight table, archetype uniformly from the catalog, stats from the
//! catalog's (archetype, rarity) cell.

use serde::{Deserialize, Serialize};

use crate::data::SkillCatalog;
use crate::game::RandomSource;
use super::skills::{Skill, SkillRarity};

/// Drop weights for one dungeon level, expected to sum to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityWeight {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
}

impl RarityWeight {
    pub const fn new(common: u32, uncommon: u32, rare: u32, epic: u32, legendary: u32) -> Self {
        Self { common, uncommon, rare, epic, legendary }
    }

    pub fn total(&self) -> u32 {
        self.common + self.uncommon + self.rare + self.epic + self.legendary
    }

    /// Classify a 1..=100 roll by cumulative thresholds
    ///
    /// Anything past the epic threshold is legendary, so rows that don't sum
    /// to 100 push the difference into the legendary bucket.
    pub fn classify(&self, roll: u32) -> SkillRarity {
        let mut threshold = self.common;
        if roll <= threshold {
            return SkillRarity::Common;
        }
        threshold += self.uncommon;
        if roll <= threshold {
            return SkillRarity::Uncommon;
        }
        threshold += self.rare;
        if roll <= threshold {
            return SkillRarity::Rare;
        }
        threshold += self.epic;
        if roll <= threshold {
            return SkillRarity::Epic;
        }
        SkillRarity::Legendary
    }
}

/// Drop weights per dungeon level (row 0 = level 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityTable {
    pub rows: Vec<RarityWeight>,
}

impl RarityTable {
    /// Row for a level; levels past the end use the last row
    pub fn row_for_level(&self, level: u32) -> Option<&RarityWeight> {
        if self.rows.is_empty() {
            return None;
        }
        let index = (level.max(1) as usize).min(self.rows.len()) - 1;
        self.rows.get(index)
    }

    /// Roll a rarity for the given dungeon level
    pub fn roll(&self, level: u32, rng: &mut impl RandomSource) -> SkillRarity {
        let roll = rng.range_inclusive(1, 100);
        match self.row_for_level(level) {
            Some(row) => row.classify(roll),
            None => SkillRarity::Legendary,
        }
    }

    /// Levels (1-based) whose weights don't add up to 100
    pub fn unbalanced_levels(&self) -> Vec<u32> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.total() != 100)
            .map(|(i, _)| i as u32 + 1)
            .collect()
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            rows: vec![
                RarityWeight::new(60, 30, 7, 2, 1),
                RarityWeight::new(55, 30, 8, 4, 3),
                RarityWeight::new(50, 28, 10, 7, 5),
                RarityWeight::new(45, 25, 12, 10, 8),
                RarityWeight::new(40, 25, 15, 12, 8),
                RarityWeight::new(35, 25, 18, 15, 7),
                RarityWeight::new(30, 25, 20, 18, 7),
                RarityWeight::new(25, 25, 22, 20, 8),
                RarityWeight::new(20, 25, 25, 20, 10),
                RarityWeight::new(15, 25, 25, 25, 10),
            ],
        }
    }
}

/// Rolls skill rewards from a catalog and a rarity table
#[derive(Debug, Clone)]
pub struct RewardGenerator {
    catalog: SkillCatalog,
    rarity: RarityTable,
}

impl RewardGenerator {
    pub fn new(catalog: SkillCatalog, rarity: RarityTable) -> Self {
        Self { catalog, rarity }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Roll one reward skill for a dungeon level
    ///
    /// Returns `None` only when the catalog has no archetypes at all.
    pub fn generate(&self, level: u32, rng: &mut impl RandomSource) -> Option<Skill> {
        let rarity = self.rarity.roll(level, rng);
        if self.catalog.is_empty() {
            return None;
        }
        let archetype = &self.catalog.archetypes[rng.pick_index(self.catalog.len())];
        let skill = self.catalog.create(archetype.kind, rarity);
        log::debug!("Rolled reward {} at level {}", skill.label(), level);
        Some(skill)
    }

    /// Roll `count` independent rewards
    pub fn offers(&self, level: u32, count: usize, rng: &mut impl RandomSource) -> Vec<Skill> {
        (0..count).filter_map(|_| self.generate(level, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_skill_catalog;
    use crate::game::{ScriptedRandom, SeededRandom};
    use crate::progression::SkillKind;

    fn generator() -> RewardGenerator {
        RewardGenerator::new(default_skill_catalog(), RarityTable::default())
    }

    #[test]
    fn test_default_rows_sum_to_100() {
        let table = RarityTable::default();
        assert_eq!(table.rows.len(), 10);
        assert!(table.unbalanced_levels().is_empty());
    }

    #[test]
    fn test_classify_thresholds() {
        let row = RarityWeight::new(60, 30, 7, 2, 1);
        assert_eq!(row.classify(1), SkillRarity::Common);
        assert_eq!(row.classify(60), SkillRarity::Common);
        assert_eq!(row.classify(61), SkillRarity::Uncommon);
        assert_eq!(row.classify(90), SkillRarity::Uncommon);
        assert_eq!(row.classify(97), SkillRarity::Rare);
        assert_eq!(row.classify(99), SkillRarity::Epic);
        assert_eq!(row.classify(100), SkillRarity::Legendary);
    }

    #[test]
    fn test_short_row_falls_into_legendary() {
        let row = RarityWeight::new(10, 10, 10, 10, 0);
        assert_eq!(row.total(), 40);
        assert_eq!(row.classify(41), SkillRarity::Legendary);
        assert_eq!(row.classify(100), SkillRarity::Legendary);

        let table = RarityTable { rows: vec![row] };
        assert_eq!(table.unbalanced_levels(), vec![1]);
    }

    #[test]
    fn test_level_index_clamps() {
        let table = RarityTable::default();
        assert_eq!(table.row_for_level(0), table.rows.first());
        assert_eq!(table.row_for_level(1), table.rows.first());
        assert_eq!(table.row_for_level(10), table.rows.last());
        assert_eq!(table.row_for_level(25), table.rows.last());
        assert!(RarityTable { rows: vec![] }.row_for_level(3).is_none());
    }

    #[test]
    fn test_roll_one_at_level_one_is_common() {
        let gen = generator();
        let mut rng = ScriptedRandom::new().with_roll(1);
        for index in 0..6 {
            let mut rng = rng.with_index(index);
            let reward = gen.generate(1, &mut rng).unwrap();
            assert_eq!(reward.rarity, SkillRarity::Common);
        }
        assert_eq!(gen.generate(1, &mut rng).unwrap().kind, SkillKind::SpiritPulse);
    }

    #[test]
    fn test_top_roll_at_deep_level_is_legendary() {
        let gen = generator();
        let mut rng = ScriptedRandom::new().with_roll(100).with_index(3);
        let reward = gen.generate(12, &mut rng).unwrap();
        assert_eq!(reward.rarity, SkillRarity::Legendary);
        assert_eq!(reward.kind, SkillKind::LightningStrike);
        assert_eq!(reward.magnitude, 25.0);
        assert_eq!(reward.cooldown_remaining(), 0);
    }

    #[test]
    fn test_offers_count_and_bounds() {
        let gen = generator();
        let mut rng = SeededRandom::new(99);
        let offers = gen.offers(4, 3, &mut rng);
        assert_eq!(offers.len(), 3);
        for offer in &offers {
            assert!(offer.magnitude > 0.0);
            assert!(offer.is_ready());
        }
    }

    #[test]
    fn test_distribution_tracks_weights() {
        let gen = generator();
        let mut rng = SeededRandom::new(1234);
        let commons = (0..2000)
            .filter_map(|_| gen.generate(1, &mut rng))
            .filter(|s| s.rarity == SkillRarity::Common)
            .count();
        // Level 1 is 60% common
        assert!((1000..1400).contains(&commons), "commons = {}", commons);
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let gen = RewardGenerator::new(SkillCatalog::default(), RarityTable::default());
        let mut rng = SeededRandom::new(1);
        assert!(gen.generate(1, &mut rng).is_none());
        assert!(gen.offers(1, 3, &mut rng).is_empty());
    }
}
