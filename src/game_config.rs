// Copyright (C) 2020-2023 Andy Kurnia.

use super::error;

fn default_hand_size() -> usize {
    7
}

fn default_minimum_word_length() -> usize {
    2
}

fn default_board_file_path() -> String {
    "board.txt".into()
}

fn default_tile_bag_file_path() -> String {
    "bag.txt".into()
}

fn default_dictionary_file_path() -> String {
    "dictionary.txt".into()
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_hand_size")]
    hand_size: usize,
    #[serde(default = "default_minimum_word_length")]
    minimum_word_length: usize,
    #[serde(default = "default_board_file_path")]
    board_file_path: String,
    #[serde(default = "default_tile_bag_file_path")]
    tile_bag_file_path: String,
    #[serde(default = "default_dictionary_file_path")]
    dictionary_file_path: String,
    // 0 draws a fresh seed.
    #[serde(default)]
    seed: u64,
    #[serde(default)]
    verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: default_hand_size(),
            minimum_word_length: default_minimum_word_length(),
            board_file_path: default_board_file_path(),
            tile_bag_file_path: default_tile_bag_file_path(),
            dictionary_file_path: default_dictionary_file_path(),
            seed: 0,
            verbose: false,
        }
    }
}

impl GameConfig {
    #[inline(always)]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[inline(always)]
    pub fn minimum_word_length(&self) -> usize {
        self.minimum_word_length
    }

    #[inline(always)]
    pub fn board_file_path(&self) -> &str {
        &self.board_file_path
    }

    #[inline(always)]
    pub fn tile_bag_file_path(&self) -> &str {
        &self.tile_bag_file_path
    }

    #[inline(always)]
    pub fn dictionary_file_path(&self) -> &str {
        &self.dictionary_file_path
    }

    #[inline(always)]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline(always)]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    // playing the whole hand at once earns a bonus.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> u32 {
        if num_played >= self.hand_size { 50 } else { 0 }
    }

    pub fn from_json(s: &str) -> error::Returns<Self> {
        let config = serde_json::from_str::<Self>(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn read(path: &str) -> error::Returns<Self> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_json(s.as_str()),
            Err(err) => {
                return_error!(format!("cannot open config {:?}: {}", path, err));
            }
        }
    }

    fn validate(&self) -> error::Returns<()> {
        if self.hand_size == 0 {
            return_error!("hand_size must be positive".into());
        }
        if self.minimum_word_length == 0 {
            return_error!("minimum_word_length must be positive".into());
        }
        Ok(())
    }
}

pub fn make_default_game_config() -> GameConfig {
    GameConfig::default()
}
