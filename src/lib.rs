// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod dawg;
pub mod display;
pub mod engine;
pub mod fash;
pub mod game_config;
pub mod game_state;
pub mod lexicon;
pub mod matrix;
pub mod move_picker;
pub mod movegen;
pub mod score;
pub mod wire;
