//! Spirit's Covenant - autoplay entry point
//!
//! Plays a seeded campaign headlessly with a simple policy and logs every
//! battle event. Useful for balancing data files and for replaying runs.
//!
//! Usage: `spirits-covenant [seed] [battles]`
//!
//! Continues from the saved progress when a save exists. Without a seed the
//! run is seeded from OS entropy.

use std::time::Duration;

use anyhow::{Context, Result};

use spirits_covenant::data::DataManager;
use spirits_covenant::game::{Game, GameState, SeededRandom};
use spirits_covenant::progression::RewardDecision;
use spirits_covenant::save::{save_path, SaveState};

const DEFAULT_BATTLES: u32 = 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Spirit's Covenant v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let rng = match args.next() {
        Some(arg) => {
            let seed = arg.parse::<u64>().with_context(|| format!("invalid seed '{}'", arg))?;
            SeededRandom::new(seed)
        }
        None => SeededRandom::from_entropy(),
    };
    let battles = match args.next() {
        Some(arg) => arg.parse::<u32>().with_context(|| format!("invalid battle count '{}'", arg))?,
        None => DEFAULT_BATTLES,
    };

    let path = save_path();
    let save = SaveState::load_or_new(&path)
        .with_context(|| format!("loading progress from {}", path.display()))?;
    let mut game = Game::new(DataManager::new(), save, rng);
    let delay = Duration::from_millis(game.data().config.enemy_turn_delay_ms);

    for _ in 0..battles {
        if !play_battle(&mut game, delay) {
            log::warn!("Every skill is on cooldown at level {}; stopping", game.current_level());
            break;
        }
        if game.state() == GameState::Defeated {
            log::info!("Defeated at level {}", game.current_level());
            game.continue_after_defeat();
            break;
        }
    }

    game.save().save_to(&path).with_context(|| format!("saving progress to {}", path.display()))?;

    let skills: Vec<String> = game.save().unlocked_skills.iter().map(|s| s.label()).collect();
    log::info!("Reached level {} with [{}]", game.current_level(), skills.join(", "));
    Ok(())
}

/// Fight one battle and settle its reward. Returns false if the player
/// was left without a usable skill.
fn play_battle(game: &mut Game<SeededRandom>, delay: Duration) -> bool {
    game.start_battle();
    log_events(game);

    while game.state() == GameState::Battle {
        let Some(slot) = pick_skill(game) else {
            return false;
        };
        game.use_skill(slot);
        log_events(game);

        std::thread::sleep(delay);
        game.advance_enemy_turn();
        log_events(game);
    }

    if let Some(battle) = game.battle() {
        let won = battle.outcome().is_some_and(|o| o.player_won());
        log::info!(
            "Level {} {} after {} round(s)",
            battle.level(),
            if won { "cleared" } else { "lost" },
            battle.round()
        );
    }

    if game.state() == GameState::Rewards {
        match game.confirm_reward(0) {
            Some(RewardDecision::ReplacementNeeded) => {
                game.replace_skill(0);
            }
            Some(RewardDecision::Added(_)) => {}
            None => {
                game.skip_reward();
            }
        }
    }
    true
}

/// Ready skill with the largest magnitude
fn pick_skill(game: &Game<SeededRandom>) -> Option<usize> {
    let battle = game.battle()?;
    (0..battle.loadout().len())
        .filter(|&slot| battle.can_use(slot))
        .max_by(|&a, &b| {
            let magnitude = |slot| battle.loadout().get(slot).map(|s| s.magnitude).unwrap_or(0.0);
            magnitude(a).total_cmp(&magnitude(b))
        })
}

fn log_events(game: &mut Game<SeededRandom>) {
    for event in game.drain_events() {
        log::info!("{}", event.message());
    }
}
