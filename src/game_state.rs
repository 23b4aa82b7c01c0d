// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, error, game_config, movegen};
use rand::prelude::*;

fn use_tiles<II: IntoIterator<Item = u8>>(
    rack: &mut Vec<u8>,
    tiles_iter: II,
) -> error::Returns<()> {
    for tile in tiles_iter {
        let pos = rack.iter().rposition(|&t| t == tile).ok_or("bad tile")?;
        rack.swap_remove(pos);
    }
    Ok(())
}

pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board_cells: Box<[u8]>,
    pub bag: bag::Bag,
    pub turn: u8,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig<'_>) -> Self {
        let dim = game_config.board_layout().dim();
        let rack_size = game_config.rack_size() as usize;
        Self {
            game_config,
            players: (0..2)
                .map(|_| GamePlayer {
                    score: 0,
                    rack: Vec::with_capacity(rack_size),
                })
                .collect(),
            board_cells: vec![0u8; (dim.rows as usize) * (dim.cols as usize)].into_boxed_slice(),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
        }
    }

    // shuffle and deal both racks.
    pub fn start(&mut self, rng: &mut dyn RngCore) {
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    #[inline(always)]
    pub fn opponent_index(&self) -> usize {
        1 - self.turn as usize
    }

    pub fn play(&mut self, play: &movegen::Play) -> error::Returns<()> {
        let dim = self.game_config.board_layout().dim();
        let placed = play.placed_tiles(&self.board_cells, dim);
        play.apply(&mut self.board_cells, dim);
        let current_player = &mut self.players[self.turn as usize];
        current_player.score += play.score;
        use_tiles(&mut current_player.rack, placed.iter().copied())?;
        self.bag.replenish(
            &mut current_player.rack,
            self.game_config.rack_size() as usize,
        );
        Ok(())
    }

    pub fn next_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_standard_game_config;
    use crate::movegen;

    fn t(ch: u8) -> u8 {
        ch - b'A' + 1
    }

    #[test]
    fn playing_places_tiles_and_draws_back() {
        let game_config = make_standard_game_config();
        let mut game_state = GameState::new(&game_config);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        game_state.start(&mut rng);
        assert_eq!(game_state.players[0].rack.len(), 7);
        // hand the player the exact tiles the play needs
        game_state.players[0].rack = vec![t(b'O'), t(b'D'), t(b'D'), t(b'I'), t(b'T'), t(b'Y'), 0];
        let play = movegen::Play {
            pos: 111,
            down: false,
            word: vec![t(b'O'), t(b'D'), t(b'D'), t(b'I'), t(b'T'), t(b'Y')].into_boxed_slice(),
            cross_words: Vec::new().into_boxed_slice(),
            score: 30,
        };
        game_state.play(&play).unwrap();
        assert_eq!(game_state.players[0].score, 30);
        assert_eq!(game_state.board_cells[111], t(b'O'));
        assert_eq!(game_state.board_cells[116], t(b'Y'));
        assert_eq!(game_state.players[0].rack.len(), 7);
        game_state.next_turn();
        assert_eq!(game_state.turn, 1);
        game_state.next_turn();
        assert_eq!(game_state.turn, 0);
    }
}
