// Copyright (C) 2020-2024 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod anchor;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod command;
pub mod display;
pub mod game_config;
pub mod game_state;
pub mod hand;
pub mod kibitzer;
pub mod kwg;
pub mod matrix;
pub mod move_picker;
pub mod movegen;
pub mod play_scorer;
pub mod rlhelper;
