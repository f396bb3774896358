//! Campaign save state
//!
//! Progress carried between battles: the furthest dungeon level and the
//! unlocked skill loadout. Passed explicitly into each battle and written
//! back when it ends; optionally stored on disk as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::progression::Loadout;

/// Save file version for compatibility checking
pub const SAVE_VERSION: u32 = 1;

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Cross-battle progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub version: u32,
    /// Dungeon level of the next battle (1-based)
    pub current_level: u32,
    pub unlocked_skills: Loadout,
}

impl SaveState {
    /// Fresh progress: level 1, no skills
    pub fn new_game() -> Self {
        Self {
            version: SAVE_VERSION,
            current_level: 1,
            unlocked_skills: Loadout::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    pub fn advance_level(&mut self) {
        self.current_level = self.current_level.saturating_add(1);
    }

    /// Write as pretty JSON, creating parent directories as needed
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Progress saved to {}", path.display());
        Ok(())
    }

    /// Read and validate a save file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let mut save: SaveState = serde_json::from_str(&data)?;

        if save.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: save.version,
            });
        }

        save.current_level = save.current_level.max(1);
        save.unlocked_skills = Loadout::from_skills(std::mem::take(&mut save.unlocked_skills).into_skills());
        log::info!("Progress loaded from {} (level {})", path.display(), save.current_level);
        Ok(save)
    }

    /// Load an existing save, or start a new game when there is no file yet
    ///
    /// Any other failure is returned so existing progress isn't overwritten.
    pub fn load_or_new(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        match Self::load_from(path) {
            Err(SaveError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No save at {}, starting a new game", path.display());
                Ok(Self::new_game())
            }
            result => result,
        }
    }
}

impl Default for SaveState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Get the save directory path
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "spiritscovenant", "SpiritsCovenant") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Default save file location
pub fn save_path() -> PathBuf {
    save_directory().join("progress.json")
}

/// Delete a save file if it exists
pub fn delete_save(path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
        log::info!("Deleted save {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_skill_catalog;
    use crate::progression::{SkillKind, SkillRarity};

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("spirits-covenant-save-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_new_game_defaults() {
        let save = SaveState::new_game();
        assert_eq!(save.current_level, 1);
        assert!(save.unlocked_skills.is_empty());
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut save = SaveState::new_game();
        save.advance_level();
        save.unlocked_skills.confirm_reward(default_skill_catalog().create(SkillKind::Fireball, SkillRarity::Rare));
        save.reset();
        assert_eq!(save, SaveState::new_game());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("roundtrip.json");
        let catalog = default_skill_catalog();
        let mut save = SaveState::new_game();
        save.current_level = 4;
        save.unlocked_skills.confirm_reward(catalog.create(SkillKind::Entrap, SkillRarity::Epic));
        if let Some(skill) = save.unlocked_skills.get_mut(0) {
            skill.trigger_cooldown();
        }

        save.save_to(&path).unwrap();
        let loaded = SaveState::load_from(&path).unwrap();
        assert_eq!(loaded, save);
        assert_eq!(loaded.unlocked_skills.get(0).unwrap().cooldown_remaining(), 2);

        delete_save(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_version_mismatch() {
        let path = temp_file("old.json");
        let mut save = SaveState::new_game();
        save.version = 0;
        save.save_to(&path).unwrap();
        let result = SaveState::load_from(&path);
        assert!(matches!(result, Err(SaveError::VersionMismatch { expected: 1, found: 0 })));
        delete_save(&path).unwrap();
    }

    #[test]
    fn test_load_or_new_keeps_existing_progress() {
        let path = temp_file("existing.json");
        let mut save = SaveState::new_game();
        save.current_level = 7;
        save.save_to(&path).unwrap();

        let loaded = SaveState::load_or_new(&path).unwrap();
        assert_eq!(loaded.current_level, 7);
        delete_save(&path).unwrap();
    }

    #[test]
    fn test_load_or_new_without_file_starts_fresh() {
        let loaded = SaveState::load_or_new(temp_file("never-written.json")).unwrap();
        assert_eq!(loaded, SaveState::new_game());
    }

    #[test]
    fn test_load_or_new_rejects_corrupt_file() {
        let path = temp_file("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"current_level\": ").unwrap();
        assert!(matches!(SaveState::load_or_new(&path), Err(SaveError::Parse(_))));
        delete_save(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SaveState::load_from(temp_file("does-not-exist.json"));
        assert!(matches!(result, Err(SaveError::Io(_))));
    }
}
