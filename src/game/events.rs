//! Battle events
//!
//! Everything the engine does is recorded as an event so the presentation
//! layer can play animations, sounds and log lines without the engine
//! knowing about any of them.

use crate::combat::{Side, StatusKind};
use crate::progression::{Skill, SkillKind, SkillRarity};
use super::turn::Turn;

#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        level: u32,
        enemy_health: f32,
        boss: bool,
    },
    SkillUsed {
        slot: usize,
        kind: SkillKind,
        rarity: SkillRarity,
    },
    DamageDealt {
        target: Side,
        amount: f32,
        remaining: f32,
    },
    Healed {
        target: Side,
        amount: f32,
        current: f32,
    },
    StatusApplied {
        target: Side,
        kind: StatusKind,
        percent: f32,
        turns: u32,
    },
    StatusExpired {
        target: Side,
        kind: StatusKind,
    },
    /// Lightning Strike landed its stun
    Stunned {
        target: Side,
    },
    /// The stunned enemy lost its attack
    AttackSkipped {
        actor: Side,
    },
    TurnStarted(Turn),
    Defeated(Side),
    RewardsOffered(Vec<Skill>),
}

impl BattleEvent {
    /// One-line description for logs and the battle message box
    pub fn message(&self) -> String {
        match self {
            BattleEvent::BattleStarted { level, enemy_health, boss } => {
                let foe = if *boss { "The boss" } else { "An enemy" };
                format!("Level {}: {} appears with {:.1} HP.", level, foe, enemy_health)
            }
            BattleEvent::SkillUsed { kind, rarity, .. } => {
                format!("Player uses {} ({}).", kind.name(), rarity.name())
            }
            BattleEvent::DamageDealt { target, amount, remaining } => {
                format!("{} takes {:.1} damage ({:.1} HP left).", target.name(), amount, remaining)
            }
            BattleEvent::Healed { target, amount, current } => {
                format!("{} recovers {:.1} HP ({:.1} HP).", target.name(), amount, current)
            }
            BattleEvent::StatusApplied { target, kind, percent, turns } => {
                format!(
                    "{} gains {} {:.0}% for {} turn(s).",
                    target.name(),
                    kind.name(),
                    percent * 100.0,
                    turns
                )
            }
            BattleEvent::StatusExpired { target, kind } => {
                format!("{}'s {} wears off.", target.name(), kind.name())
            }
            BattleEvent::Stunned { target } => format!("{} is stunned!", target.name()),
            BattleEvent::AttackSkipped { actor } => {
                format!("{} is stunned and can't attack.", actor.name())
            }
            BattleEvent::TurnStarted(turn) => format!("{}'s turn.", turn.side().name()),
            BattleEvent::Defeated(side) => format!("{} is defeated!", side.name()),
            BattleEvent::RewardsOffered(offers) => {
                let names: Vec<String> = offers.iter().map(|s| s.label()).collect();
                format!("Choose a reward: {}", names.join(", "))
            }
        }
    }
}
