//! Game state management
//!
//! The campaign loop around the battle engine: pick a level on the map,
//! fight, take (or skip) a reward, repeat. Progress lives in a
//! [`SaveState`] that is handed to each battle and written back after it.

use crate::data::DataManager;
use crate::progression::{is_level_unlocked, RewardDecision, RewardGenerator, Skill};
use crate::save::SaveState;
use super::battle::Battle;
use super::events::BattleEvent;
use super::rng::{RandomSource, SeededRandom};
use super::turn::{BattleOutcome, Turn};

/// Top-level screens of the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Choosing a level to fight
    Map,
    /// A battle is running
    Battle,
    /// Enemy defeated; choosing one of the offered skills
    Rewards,
    /// Loadout full; choosing which slot the reward replaces
    ReplacingSkill,
    /// Player defeated
    Defeated,
}

/// Campaign state machine
pub struct Game<R: RandomSource = SeededRandom> {
    data: DataManager,
    rewards: RewardGenerator,
    save: SaveState,
    rng: R,
    state: GameState,
    battle: Option<Battle>,
    offers: Vec<Skill>,
    pending_reward: Option<Skill>,
}

impl<R: RandomSource> Game<R> {
    /// Start on the map with the given progress
    pub fn new(data: DataManager, save: SaveState, rng: R) -> Self {
        let rewards = data.reward_generator();
        Self {
            data,
            rewards,
            save,
            rng,
            state: GameState::Map,
            battle: None,
            offers: Vec::new(),
            pending_reward: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn data(&self) -> &DataManager {
        &self.data
    }

    pub fn save(&self) -> &SaveState {
        &self.save
    }

    pub fn current_level(&self) -> u32 {
        self.save.current_level
    }

    /// The running (or just finished) battle
    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// Skills offered on the reward screen
    pub fn offers(&self) -> &[Skill] {
        &self.offers
    }

    /// Reward waiting for a slot on the replacement screen
    pub fn pending_reward(&self) -> Option<&Skill> {
        self.pending_reward.as_ref()
    }

    /// Take the battle events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.battle.as_mut().map(Battle::drain_events).unwrap_or_default()
    }

    /// Wipe progress and return to the map
    pub fn new_game(&mut self) {
        log::info!("Starting a new game");
        self.save.reset();
        self.leave_to_map();
    }

    /// Pick a level on the map. Only levels up to the current one are open.
    pub fn select_level(&mut self, level: u32) -> bool {
        if self.state != GameState::Map || !is_level_unlocked(level, self.save.current_level) {
            return false;
        }
        self.save.current_level = level;
        true
    }

    /// Start a battle at the current level with the saved loadout
    pub fn start_battle(&mut self) -> bool {
        if self.state != GameState::Map {
            return false;
        }
        let loadout = std::mem::take(&mut self.save.unlocked_skills);
        let battle = Battle::new(&self.data.config, self.rewards.clone(), self.save.current_level, loadout);
        // The seeded starting skill counts as unlocked right away
        self.save.unlocked_skills = battle.loadout().clone();
        self.battle = Some(battle);
        self.state = GameState::Battle;
        true
    }

    pub fn use_skill(&mut self, slot: usize) -> bool {
        if self.state != GameState::Battle {
            return false;
        }
        let Some(battle) = self.battle.as_mut() else {
            return false;
        };
        let acted = battle.use_skill(slot, &mut self.rng);
        self.sync_battle();
        acted
    }

    pub fn advance_enemy_turn(&mut self) -> bool {
        if self.state != GameState::Battle {
            return false;
        }
        let Some(battle) = self.battle.as_mut() else {
            return false;
        };
        let acted = battle.advance_enemy_turn();
        self.sync_battle();
        acted
    }

    /// Take offer `choice`. Returns `None` when no such offer is on screen.
    pub fn confirm_reward(&mut self, choice: usize) -> Option<RewardDecision> {
        if self.state != GameState::Rewards {
            return None;
        }
        let reward = self.offers.get(choice)?.clone();
        let decision = self.save.unlocked_skills.confirm_reward(reward.clone());
        match decision {
            RewardDecision::Added(_) => self.finish_level(),
            RewardDecision::ReplacementNeeded => {
                self.pending_reward = Some(reward);
                self.state = GameState::ReplacingSkill;
            }
        }
        Some(decision)
    }

    /// Overwrite `slot` with the pending reward
    pub fn replace_skill(&mut self, slot: usize) -> bool {
        if self.state != GameState::ReplacingSkill || slot >= self.save.unlocked_skills.len() {
            return false;
        }
        let Some(reward) = self.pending_reward.take() else {
            return false;
        };
        self.save.unlocked_skills.replace_skill(slot, reward);
        self.finish_level();
        true
    }

    /// Leave the reward screen without learning anything
    pub fn skip_reward(&mut self) -> bool {
        if !matches!(self.state, GameState::Rewards | GameState::ReplacingSkill) {
            return false;
        }
        log::info!("Reward skipped");
        self.finish_level();
        true
    }

    /// Back to the map after a loss, keeping progress
    pub fn continue_after_defeat(&mut self) -> bool {
        if self.state != GameState::Defeated {
            return false;
        }
        self.leave_to_map();
        true
    }

    /// Persist the loadout and leave the battle screen once the battle is
    /// decided and its last enemy turn has resolved
    fn sync_battle(&mut self) {
        let Some(battle) = self.battle.as_ref() else {
            return;
        };
        self.save.unlocked_skills = battle.loadout().clone();
        if battle.turn() != Turn::Player {
            return;
        }
        match battle.outcome() {
            Some(BattleOutcome::EnemyDefeated) => {
                self.offers = battle.reward_offers().to_vec();
                self.state = GameState::Rewards;
            }
            Some(BattleOutcome::PlayerDefeated) => {
                self.state = GameState::Defeated;
            }
            None => {}
        }
    }

    fn finish_level(&mut self) {
        self.save.advance_level();
        self.leave_to_map();
    }

    fn leave_to_map(&mut self) {
        self.battle = None;
        self.offers.clear();
        self.pending_reward = None;
        self.state = GameState::Map;
    }
}
