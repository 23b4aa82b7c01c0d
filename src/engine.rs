// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dawg, error, game_config, lexicon, move_picker, movegen};
use rand::prelude::*;

// built once per vocabulary, read-only afterwards, safe to share across
// threads. per-session working state lives in Solver.
pub struct Engine<'a> {
    game_config: game_config::GameConfig<'a>,
    dawg: dawg::Dawg,
    lexicon: lexicon::SetLexicon,
    compression: dawg::CompressionStats,
}

impl<'a> Engine<'a> {
    pub fn new<S: AsRef<str>, I: IntoIterator<Item = S>>(
        game_config: game_config::GameConfig<'a>,
        words: I,
    ) -> error::Returns<Engine<'a>> {
        let alphabet = game_config.alphabet();
        let mut machine_words = Vec::new();
        'words: for word in words {
            let word = word.as_ref();
            let mut machine_word = Vec::with_capacity(word.len());
            for ch in word.chars() {
                match alphabet.tile_from_rack_symbol(ch.to_ascii_uppercase()) {
                    Some(tile) if tile != 0 => machine_word.push(tile),
                    _ => continue 'words,
                }
            }
            // one-letter entries can never be placed
            if machine_word.len() >= 2 {
                machine_words.push(machine_word.into_boxed_slice());
            }
        }
        if machine_words.is_empty() {
            return_error!("word list has no usable words".to_string());
        }
        machine_words.sort();
        machine_words.dedup();
        let lexicon = lexicon::SetLexicon::from_machine_words(&machine_words);
        let mut graph = dawg::Dawg::from_machine_words(&machine_words);
        let compression = graph.compress_with_stats();
        Ok(Engine {
            game_config,
            dawg: graph,
            lexicon,
            compression,
        })
    }

    #[inline(always)]
    pub fn game_config(&self) -> &game_config::GameConfig<'a> {
        &self.game_config
    }

    #[inline(always)]
    pub fn dawg(&self) -> &dawg::Dawg {
        &self.dawg
    }

    #[inline(always)]
    pub fn lexicon(&self) -> &lexicon::SetLexicon {
        &self.lexicon
    }

    #[inline(always)]
    pub fn compression_stats(&self) -> &dawg::CompressionStats {
        &self.compression
    }

    pub fn snapshot<'b>(&'b self, board_cells: &'b [u8]) -> movegen::BoardSnapshot<'b> {
        movegen::BoardSnapshot {
            board_cells,
            game_config: &self.game_config,
            dawg: &self.dawg,
            lexicon: &self.lexicon,
        }
    }

    pub fn parse_board(&self, board: &str) -> error::Returns<Box<[u8]>> {
        let alphabet = self.game_config.alphabet();
        let mut board_cells = Vec::new();
        for (i, symbol) in board.chars().enumerate() {
            match alphabet.cell_from_symbol(symbol) {
                Some(cell) => board_cells.push(cell),
                None => {
                    return_error!(format!("board cell {} has invalid symbol {:?}", i, symbol));
                }
            }
        }
        let len = board_cells.len();
        let side = len.isqrt();
        if side * side != len {
            return_error!(format!("board length {} is not a perfect square", len));
        }
        let dim = self.game_config.board_layout().dim();
        if side != dim.cols as usize {
            return_error!(format!(
                "board side {} does not match configured side {}",
                side, dim.cols
            ));
        }
        Ok(board_cells.into_boxed_slice())
    }

    pub fn parse_rack(&self, rack: &str) -> error::Returns<Vec<u8>> {
        let alphabet = self.game_config.alphabet();
        let mut tiles = Vec::with_capacity(rack.len());
        for symbol in rack.chars() {
            match alphabet.tile_from_rack_symbol(symbol) {
                Some(tile) => tiles.push(tile),
                None => {
                    return_error!(format!("rack has invalid symbol {:?}", symbol));
                }
            }
        }
        Ok(tiles)
    }

    // full distribution minus board minus rack. once the bag is empty this
    // is exactly the opponent's rack.
    pub fn unseen_tiles(&self, board_cells: &[u8], rack: &[u8]) -> Vec<u8> {
        let alphabet = self.game_config.alphabet();
        let mut tally = (0..alphabet.len())
            .map(|tile| alphabet.freq(tile))
            .collect::<Box<_>>();
        for &cell in board_cells {
            if cell == 0 {
                continue;
            }
            let tile = if cell & 0x80 != 0 { 0 } else { cell };
            tally[tile as usize] = tally[tile as usize].saturating_sub(1);
        }
        for &tile in rack {
            tally[tile as usize] = tally[tile as usize].saturating_sub(1);
        }
        let mut unseen = Vec::new();
        for tile in 0..alphabet.len() {
            for _ in 0..tally[tile as usize] {
                unseen.push(tile);
            }
        }
        unseen
    }

    pub fn word_string(&self, word: &[u8]) -> String {
        let alphabet = self.game_config.alphabet();
        word.iter()
            .map(|&tile| alphabet.from_board(tile).unwrap_or("#"))
            .collect()
    }
}

pub struct Solver<'a> {
    engine: &'a Engine<'a>,
    move_generator: movegen::MoveGenerator,
    move_picker: move_picker::MovePicker,
}

impl<'a> Solver<'a> {
    pub fn new(engine: &'a Engine<'a>, skill: u8) -> Self {
        Self {
            move_generator: movegen::MoveGenerator::new(engine.game_config()),
            move_picker: move_picker::MovePicker::new(skill),
            engine,
        }
    }

    pub fn with_rng(engine: &'a Engine<'a>, skill: u8, rng: Box<dyn RngCore>) -> Self {
        Self {
            move_generator: movegen::MoveGenerator::new(engine.game_config()),
            move_picker: move_picker::MovePicker::with_rng(skill, rng),
            engine,
        }
    }

    #[inline(always)]
    pub fn engine(&self) -> &'a Engine<'a> {
        self.engine
    }

    pub fn find_move(
        &mut self,
        board: &str,
        rack: &str,
        opponent_rack: Option<&str>,
        skill_override: Option<u8>,
    ) -> error::Returns<Option<move_picker::ChosenPlay>> {
        let board_cells = self.engine.parse_board(board)?;
        let rack = self.engine.parse_rack(rack)?;
        let opponent_rack = match opponent_rack {
            Some(letters) => Some(self.engine.parse_rack(letters)?),
            None => None,
        };
        Ok(self.pick_from_cells(&board_cells, &rack, opponent_rack.as_deref(), skill_override))
    }

    pub fn find_all_moves(&mut self, board: &str, rack: &str) -> error::Returns<Vec<movegen::Play>> {
        let board_cells = self.engine.parse_board(board)?;
        let rack = self.engine.parse_rack(rack)?;
        let board_snapshot = self.engine.snapshot(&board_cells);
        self.move_generator.gen_moves(&board_snapshot, &rack);
        Ok(self.move_generator.plays.clone())
    }

    // same query over already-validated cells, for callers holding a board.
    pub fn pick_from_cells(
        &mut self,
        board_cells: &[u8],
        rack: &[u8],
        opponent_rack: Option<&[u8]>,
        skill_override: Option<u8>,
    ) -> Option<move_picker::ChosenPlay> {
        let board_snapshot = self.engine.snapshot(board_cells);
        self.move_picker.pick_a_move(
            &mut self.move_generator,
            &board_snapshot,
            rack,
            opponent_rack,
            skill_override,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_standard_game_config;

    const WORDS: &[&str] = &["ODDITY", "SANITARY"];

    #[test]
    fn empty_word_list_is_an_error() {
        assert!(Engine::new(make_standard_game_config(), Vec::<String>::new()).is_err());
        // nothing usable survives filtering either
        assert!(Engine::new(make_standard_game_config(), ["A", "B2B", ""]).is_err());
    }

    #[test]
    fn non_square_board_is_an_error() {
        let engine = Engine::new(make_standard_game_config(), WORDS).unwrap();
        assert!(engine.parse_board(&" ".repeat(224)).is_err());
        assert!(engine.parse_board(&" ".repeat(225)).is_ok());
    }

    #[test]
    fn mismatched_side_is_an_error() {
        let engine = Engine::new(make_standard_game_config(), WORDS).unwrap();
        // square, but not the configured 15x15
        assert!(engine.parse_board(&" ".repeat(100)).is_err());
    }

    #[test]
    fn invalid_symbols_are_errors() {
        let engine = Engine::new(make_standard_game_config(), WORDS).unwrap();
        let mut board = " ".repeat(224);
        board.push('!');
        assert!(engine.parse_board(&board).is_err());
        assert!(engine.parse_rack("AB!").is_err());
        assert_eq!(engine.parse_rack("AB?").unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn compression_shrinks_the_graph() {
        let engine = Engine::new(make_standard_game_config(), WORDS).unwrap();
        let stats = engine.compression_stats();
        assert!(stats.nodes_after <= stats.nodes_before);
        assert_eq!(engine.dawg().node_count(), stats.nodes_after);
    }

    #[test]
    fn unseen_tiles_complement_board_and_rack() {
        let engine = Engine::new(make_standard_game_config(), WORDS).unwrap();
        let board_cells = vec![0u8; 225];
        let rack = engine.parse_rack("AA?").unwrap();
        let unseen = engine.unseen_tiles(&board_cells, &rack);
        assert_eq!(unseen.len(), 97);
        assert_eq!(unseen.iter().filter(|&&t| t == 1).count(), 7);
        assert_eq!(unseen.iter().filter(|&&t| t == 0).count(), 1);
    }
}
