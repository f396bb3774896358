//! Save/load system
//!
//! Holds campaign progress between battles and stores it on disk.

pub mod save_game;

pub use save_game::{delete_save, save_directory, save_path, SaveError, SaveState, SAVE_VERSION};
