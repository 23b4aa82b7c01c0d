// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                50 & -((num_played >= x.rack_size) as i16)
            }
        }
    }
}

pub fn make_standard_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
    })
}

pub fn make_custom_game_config<'a>(board_layout: board_layout::BoardLayout) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout,
        rack_size: 7,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_applies_at_rack_size() {
        let game_config = make_standard_game_config();
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.num_played_bonus(8), 50);
    }
}
