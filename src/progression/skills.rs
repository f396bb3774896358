//! Skill system
//!
//! Player skills usable in battle, their rarity tiers and effect tags.

use serde::{Deserialize, Serialize};

/// Skill rarity determines magnitude, cooldown and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl SkillRarity {
    pub const ALL: [SkillRarity; 5] = [
        SkillRarity::Common,
        SkillRarity::Uncommon,
        SkillRarity::Rare,
        SkillRarity::Epic,
        SkillRarity::Legendary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillRarity::Common => "Common",
            SkillRarity::Uncommon => "Uncommon",
            SkillRarity::Rare => "Rare",
            SkillRarity::Epic => "Epic",
            SkillRarity::Legendary => "Legendary",
        }
    }

    /// Button tint used by the reward and skill bars (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            SkillRarity::Common => (128, 128, 128),
            SkillRarity::Uncommon => (0, 153, 0),
            SkillRarity::Rare => (0, 0, 255),
            SkillRarity::Epic => (128, 0, 128),
            SkillRarity::Legendary => (255, 128, 0),
        }
    }
}

/// The six base skill archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    SpiritPulse,
    Fireball,
    AquaMend,
    LightningStrike,
    Entrap,
    EarthShell,
}

impl SkillKind {
    pub const ALL: [SkillKind; 6] = [
        SkillKind::SpiritPulse,
        SkillKind::Fireball,
        SkillKind::AquaMend,
        SkillKind::LightningStrike,
        SkillKind::Entrap,
        SkillKind::EarthShell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillKind::SpiritPulse => "Spirit Pulse",
            SkillKind::Fireball => "Fireball",
            SkillKind::AquaMend => "Aqua Mend",
            SkillKind::LightningStrike => "Lightning Strike",
            SkillKind::Entrap => "Entrap",
            SkillKind::EarthShell => "Earth Shell",
        }
    }

    /// Look up a kind by its display name
    pub fn from_name(name: &str) -> Option<SkillKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Effect this archetype resolves with
    pub fn default_effect(&self) -> SkillEffect {
        match self {
            SkillKind::SpiritPulse | SkillKind::Fireball => SkillEffect::DirectDamage,
            SkillKind::AquaMend => SkillEffect::Heal,
            SkillKind::LightningStrike => SkillEffect::ChanceStun {
                stun_table: StunTable::default(),
            },
            SkillKind::Entrap => SkillEffect::Debuff,
            SkillKind::EarthShell => SkillEffect::Buff,
        }
    }
}

/// What a skill does when used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// Flat damage equal to the magnitude, amplified by the enemy debuff
    DirectDamage,
    /// Restores magnitude% of the player's max health
    Heal,
    /// Lowers enemy defense by magnitude% for `duration` turns
    Debuff,
    /// Raises player defense by magnitude% for `duration` turns
    Buff,
    /// Deals magnitude% of the enemy's max health and may stun
    ChanceStun { stun_table: StunTable },
}

/// One row of a stun table: exact magnitude and the stun chance in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StunTier {
    pub magnitude: f32,
    pub chance: f32,
}

/// Stun chance keyed by the skill's absolute magnitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StunTable {
    pub tiers: Vec<StunTier>,
}

impl StunTable {
    /// Chance in percent (0-100) for the given magnitude; unlisted magnitudes never stun
    pub fn chance_for(&self, magnitude: f32) -> f32 {
        self.tiers
            .iter()
            .find(|t| (t.magnitude - magnitude).abs() < f32::EPSILON)
            .map(|t| t.chance)
            .unwrap_or(0.0)
    }
}

impl Default for StunTable {
    fn default() -> Self {
        let tier = |magnitude, chance| StunTier { magnitude, chance };
        Self {
            tiers: vec![
                tier(5.0, 20.0),
                tier(10.0, 20.0),
                tier(15.0, 30.0),
                tier(20.0, 30.0),
                tier(25.0, 50.0),
            ],
        }
    }
}

/// A rolled skill instance
///
/// Everything except the remaining cooldown is fixed when the skill is
/// created. The remaining cooldown stays within `0..=cooldown_max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub kind: SkillKind,
    pub rarity: SkillRarity,
    pub effect: SkillEffect,
    /// Damage for direct hits, percent for everything else
    pub magnitude: f32,
    /// Turns a buff or debuff lasts (0 for instant skills)
    pub duration: u32,
    pub cooldown_max: u32,
    cooldown_remaining: u32,
    pub description: String,
}

impl Skill {
    pub fn new(
        kind: SkillKind,
        rarity: SkillRarity,
        effect: SkillEffect,
        magnitude: f32,
        duration: u32,
        cooldown_max: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            rarity,
            effect,
            magnitude,
            duration,
            cooldown_max,
            cooldown_remaining: 0,
            description: description.into(),
        }
    }

    /// Skill that does nothing when used (missing catalog data)
    pub fn zero_effect(kind: SkillKind, rarity: SkillRarity) -> Self {
        Self::new(kind, rarity, kind.default_effect(), 0.0, 0, 0, String::new())
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// "Name (Rarity)" label for buttons and logs
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.rarity.name())
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    /// Put the skill on its full cooldown after use
    pub fn trigger_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_max;
    }

    /// Advance the cooldown by one turn
    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }

    /// Clamp a deserialized cooldown back into range
    pub fn normalize(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.min(self.cooldown_max);
    }
}
