use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Game settings, read from a TOML file next to the data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub rooms_file: PathBuf,
    pub items_file: PathBuf,
    /// Canonical key of the room the player starts in.
    pub start_room: String,
    /// Carrying exactly this many items wins the game.
    pub win_inventory_size: usize,
    /// Extra items dropped into the world after the data files are loaded.
    pub start_item: Vec<StartItem>, // [[start_item]] blocks
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub openable: bool,
    /// Defaults to the start room.
    #[serde(default)]
    pub room: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Zork".to_string(),
            rooms_file: PathBuf::from("Rooms.dat"),
            items_file: PathBuf::from("items.dat"),
            start_room: "ATTIC".to_string(),
            win_inventory_size: 14,
            start_item: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads the config and makes relative data paths relative to the config's directory.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&contents)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    pub fn rebase(&mut self, base: &Path) {
        if self.rooms_file.is_relative() {
            self.rooms_file = base.join(&self.rooms_file);
        }
        if self.items_file.is_relative() {
            self.items_file = base.join(&self.items_file);
        }
    }
}
