//! Battle engine
//!
//! A two-phase turn loop: [`Battle::use_skill`] resolves the player's
//! action and hands the turn to the enemy, then [`Battle::advance_enemy_turn`]
//! resolves the counter-attack and the end-of-round bookkeeping. Any pause
//! between the two calls belongs to the caller.
//!
//! Actions that don't apply (wrong turn, empty slot, skill on cooldown,
//! battle already decided) are ignored and leave the state untouched.

use crate::combat::{amplified_damage, mitigated_damage, percent_of_max, roll_chance};
use crate::combat::{Combatant, Side, StatusKind};
use crate::combat::damage::percent;
use crate::data::BattleConfig;
use crate::progression::{
    is_boss_level, EnemyScaling, Loadout, RewardGenerator, Skill, SkillEffect,
};
use super::events::BattleEvent;
use super::rng::RandomSource;
use super::turn::{BattleOutcome, Turn};

/// One battle between the player and a level-scaled enemy
#[derive(Debug, Clone)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    loadout: Loadout,
    level: u32,
    scaling: EnemyScaling,
    boss: bool,
    turn: Turn,
    round: u32,
    outcome: Option<BattleOutcome>,
    rewards: RewardGenerator,
    reward_count: usize,
    reward_displayed: bool,
    reward_offers: Vec<Skill>,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Set up a battle at a dungeon level with the carried loadout
    ///
    /// An empty loadout is seeded with the configured starting skill.
    pub fn new(
        config: &BattleConfig,
        rewards: RewardGenerator,
        level: u32,
        loadout: Loadout,
    ) -> Self {
        let level = level.max(1);
        let mut loadout = loadout;
        if loadout.is_empty() {
            let (kind, rarity) = config.starting_skill;
            loadout.confirm_reward(rewards.catalog().create(kind, rarity));
        }

        let scaling = config.enemy_scaling();
        let enemy_health = scaling.health(level);
        let boss = is_boss_level(level, config.boss_level);
        log::info!(
            "Battle at level {} (enemy {:.1} HP, attack {:.2}{})",
            level,
            enemy_health,
            scaling.attack(level),
            if boss { ", boss" } else { "" }
        );

        Self {
            player: Combatant::new(config.player_max_health),
            enemy: Combatant::new(enemy_health),
            loadout,
            level,
            scaling,
            boss,
            turn: Turn::Player,
            round: 1,
            outcome: None,
            rewards,
            reward_count: config.reward_offer_count,
            reward_displayed: false,
            reward_offers: Vec::new(),
            events: vec![
                BattleEvent::BattleStarted { level, enemy_health, boss },
                BattleEvent::TurnStarted(Turn::Player),
            ],
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_boss(&self) -> bool {
        self.boss
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Enemy attack before the player's buff is applied
    pub fn enemy_attack(&self) -> f32 {
        self.scaling.attack(self.level)
    }

    /// Rewards rolled when the enemy fell (empty until then)
    pub fn reward_offers(&self) -> &[Skill] {
        &self.reward_offers
    }

    /// Whether the skill button for `slot` should be enabled
    pub fn can_use(&self, slot: usize) -> bool {
        self.outcome.is_none()
            && self.turn == Turn::Player
            && self.loadout.get(slot).is_some_and(|s| s.is_ready())
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand the loadout back (with its current cooldowns) once the battle is done
    pub fn into_loadout(self) -> Loadout {
        self.loadout
    }

    /// Use the skill in `slot`. Returns false if the action was ignored.
    pub fn use_skill(&mut self, slot: usize, rng: &mut impl RandomSource) -> bool {
        if !self.can_use(slot) {
            return false;
        }
        let Some(skill) = self.loadout.get(slot) else {
            return false;
        };
        let kind = skill.kind;
        let effect = skill.effect.clone();
        let magnitude = skill.magnitude;
        let duration = skill.duration;

        log::debug!("Player uses {} from slot {}", skill.label(), slot);
        self.events.push(BattleEvent::SkillUsed { slot, kind, rarity: skill.rarity });

        match effect {
            SkillEffect::Debuff => {
                self.enemy.debuff.apply(percent(magnitude), duration);
                self.events.push(BattleEvent::StatusApplied {
                    target: Side::Enemy,
                    kind: StatusKind::Debuff,
                    percent: self.enemy.debuff.percent(),
                    turns: duration,
                });
            }
            SkillEffect::Buff => {
                self.player.buff.apply(percent(magnitude), duration);
                self.events.push(BattleEvent::StatusApplied {
                    target: Side::Player,
                    kind: StatusKind::Buff,
                    percent: self.player.buff.percent(),
                    turns: duration,
                });
            }
            SkillEffect::Heal => {
                let amount = self.player.heal(percent_of_max(self.player.max_health(), magnitude));
                self.events.push(BattleEvent::Healed {
                    target: Side::Player,
                    amount,
                    current: self.player.current_health(),
                });
            }
            SkillEffect::ChanceStun { stun_table } => {
                let raw = percent_of_max(self.enemy.max_health(), magnitude);
                self.hit_enemy(raw);
                if roll_chance(stun_table.chance_for(magnitude), rng) {
                    self.enemy.stun();
                    self.events.push(BattleEvent::Stunned { target: Side::Enemy });
                }
            }
            SkillEffect::DirectDamage => self.hit_enemy(magnitude),
        }

        if let Some(skill) = self.loadout.get_mut(slot) {
            skill.trigger_cooldown();
        }

        self.turn = self.turn.next();
        self.events.push(BattleEvent::TurnStarted(self.turn));
        self.tick(rng);
        true
    }

    /// Resolve the enemy's turn. Returns false outside the enemy's turn.
    pub fn advance_enemy_turn(&mut self) -> bool {
        if self.turn != Turn::Enemy {
            return false;
        }

        if !self.enemy.is_defeated() {
            if self.enemy.is_stunned() {
                log::debug!("Enemy is stunned, skipping its attack");
                self.events.push(BattleEvent::AttackSkipped { actor: Side::Enemy });
            } else {
                let damage = mitigated_damage(self.enemy_attack(), self.player.buff.percent());
                let amount = self.player.take_damage(damage);
                log::debug!("Enemy hits for {:.2}", amount);
                self.events.push(BattleEvent::DamageDealt {
                    target: Side::Player,
                    amount,
                    remaining: self.player.current_health(),
                });
            }
        }
        self.enemy.consume_stun();

        for kind in self.enemy.tick_modifiers() {
            self.events.push(BattleEvent::StatusExpired { target: Side::Enemy, kind });
        }
        for kind in self.player.tick_modifiers() {
            self.events.push(BattleEvent::StatusExpired { target: Side::Player, kind });
        }
        self.loadout.tick_cooldowns();

        self.turn = self.turn.next();
        self.round += 1;
        self.events.push(BattleEvent::TurnStarted(self.turn));
        self.update_outcome();
        true
    }

    /// Re-check for a decided battle; rolls the reward offers the first
    /// time the enemy is found defeated. Safe to call every frame.
    pub fn tick(&mut self, rng: &mut impl RandomSource) {
        self.update_outcome();
        if self.outcome == Some(BattleOutcome::EnemyDefeated) && !self.reward_displayed {
            self.reward_displayed = true;
            self.reward_offers = self.rewards.offers(self.level, self.reward_count, rng);
            self.events.push(BattleEvent::RewardsOffered(self.reward_offers.clone()));
        }
    }

    fn hit_enemy(&mut self, raw: f32) {
        let damage = amplified_damage(raw, self.enemy.debuff.percent());
        let amount = self.enemy.take_damage(damage);
        self.events.push(BattleEvent::DamageDealt {
            target: Side::Enemy,
            amount,
            remaining: self.enemy.current_health(),
        });
    }

    fn update_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let outcome = if self.player.is_defeated() {
            BattleOutcome::PlayerDefeated
        } else if self.enemy.is_defeated() {
            BattleOutcome::EnemyDefeated
        } else {
            return;
        };
        log::info!("Battle at level {} over after {} round(s): {:?}", self.level, self.round, outcome);
        self.outcome = Some(outcome);
        self.events.push(BattleEvent::Defeated(outcome.loser()));
    }
}
