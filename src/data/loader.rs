//! RON data loader
//!
//! Loads battle tuning, rarity weights and the skill catalog from external
//! RON files, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::progression::{RarityTable, RewardGenerator};
use super::config::BattleConfig;
use super::skills::{default_skill_catalog, SkillCatalog};

/// Default location of the data files
pub const DEFAULT_DATA_DIR: &str = "assets/data";

const BATTLE_FILE: &str = "battle.ron";
const RARITY_FILE: &str = "rarity.ron";
const SKILLS_FILE: &str = "skills.ron";

/// Errors from reading game data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Manages all external game data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Battle tuning
    pub config: BattleConfig,
    /// Reward rarity weights per level
    pub rarity: RarityTable,
    /// Skill archetypes and their rarity tiers
    pub skills: SkillCatalog,
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            config: BattleConfig::default(),
            rarity: RarityTable::default(),
            skills: default_skill_catalog(),
        }
    }
}

impl DataManager {
    /// Load from the default data directory, falling back to defaults
    pub fn new() -> Self {
        Self::load_from_dir(DEFAULT_DATA_DIR)
    }

    /// Load each file from `dir`, using the built-in default for any file
    /// that is missing or fails to parse
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let data = Self {
            config: load_or_else(&dir.join(BATTLE_FILE), BattleConfig::default),
            rarity: load_or_else(&dir.join(RARITY_FILE), RarityTable::default),
            skills: load_or_else(&dir.join(SKILLS_FILE), default_skill_catalog),
        };
        data.report_problems();
        data
    }

    /// Like [`DataManager::load_from_dir`], but a file that exists and
    /// can't be read or parsed is an error. Missing files still use defaults.
    pub fn try_load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let data = Self {
            config: read_if_present(&dir.join(BATTLE_FILE))?.unwrap_or_default(),
            rarity: read_if_present(&dir.join(RARITY_FILE))?.unwrap_or_default(),
            skills: read_if_present(&dir.join(SKILLS_FILE))?.unwrap_or_else(default_skill_catalog),
        };
        data.report_problems();
        Ok(data)
    }

    /// Reward generator over this data's catalog and rarity table
    pub fn reward_generator(&self) -> RewardGenerator {
        RewardGenerator::new(self.skills.clone(), self.rarity.clone())
    }

    /// Log data inconsistencies. They are tolerated at runtime.
    fn report_problems(&self) {
        for level in self.rarity.unbalanced_levels() {
            log::warn!("Rarity weights for level {} don't sum to 100; legendary absorbs the rest", level);
        }
        for (kind, rarity) in self.skills.missing_cells() {
            log::warn!("Skill catalog has no {} tier for {}", rarity.name(), kind.name());
        }
    }
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_if_present<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DataError> {
    if path.exists() {
        read_ron(path).map(Some)
    } else {
        Ok(None)
    }
}

fn load_or_else<T: DeserializeOwned>(path: &Path, fallback: fn() -> T) -> T {
    match read_if_present(path) {
        Ok(Some(value)) => {
            log::info!("Loaded {}", path.display());
            value
        }
        Ok(None) => fallback(),
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spirits-covenant-data-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let data = DataManager::load_from_dir("/nonexistent/spirits-covenant");
        assert_eq!(data.config, BattleConfig::default());
        assert_eq!(data.rarity, RarityTable::default());
        assert_eq!(data.skills.len(), 6);
    }

    #[test]
    fn test_shipped_data_matches_defaults() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR);
        let data = DataManager::try_load_from_dir(dir).unwrap();
        assert_eq!(data.config, BattleConfig::default());
        assert_eq!(data.rarity, RarityTable::default());
        assert_eq!(data.skills, default_skill_catalog());
        assert!(data.skills.missing_cells().is_empty());
    }

    #[test]
    fn test_loads_files_from_dir() {
        let dir = temp_dir("load");
        fs::write(dir.join(BATTLE_FILE), "(player_max_health: 90.0, enemy_scaling_factor: 1.1)").unwrap();
        let rarity = RarityTable { rows: vec![crate::progression::RarityWeight::new(100, 0, 0, 0, 0)] };
        fs::write(dir.join(RARITY_FILE), ron::to_string(&rarity).unwrap()).unwrap();
        let skills = ron::to_string(&default_skill_catalog()).unwrap();
        fs::write(dir.join(SKILLS_FILE), skills).unwrap();

        let data = DataManager::try_load_from_dir(&dir).unwrap();
        assert_eq!(data.config.player_max_health, 90.0);
        assert_eq!(data.config.enemy_scaling_factor, 1.1);
        assert_eq!(data.rarity, rarity);
        assert_eq!(data.skills, default_skill_catalog());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_broken_file_falls_back_or_errors() {
        let dir = temp_dir("broken");
        fs::write(dir.join(RARITY_FILE), "(rows: [oops").unwrap();

        let lenient = DataManager::load_from_dir(&dir);
        assert_eq!(lenient.rarity, RarityTable::default());

        let strict = DataManager::try_load_from_dir(&dir);
        assert!(matches!(strict, Err(DataError::Parse { .. })));

        fs::remove_dir_all(&dir).ok();
    }
}
