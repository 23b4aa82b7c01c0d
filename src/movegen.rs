// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dawg, fash, game_config, lexicon, matrix, score};

// an empty cell a new word must cover, with the axis to extend along.
pub struct AttachPoint {
    pub at: i16,
    pub down: bool,
}

// every empty cell orthogonally adjacent to a tile anchors both axes.
// rows never wrap. an empty board anchors the star cell.
pub fn find_attach_points(
    board_cells: &[u8],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
) -> Vec<AttachPoint> {
    let mut found = Vec::new();
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            let at = dim.at_row_col(row, col);
            if board_cells[at] != 0 {
                continue;
            }
            let neighbored = (row > 0 && board_cells[dim.at_row_col(row - 1, col)] != 0)
                || (row + 1 < dim.rows && board_cells[dim.at_row_col(row + 1, col)] != 0)
                || (col > 0 && board_cells[dim.at_row_col(row, col - 1)] != 0)
                || (col + 1 < dim.cols && board_cells[dim.at_row_col(row, col + 1)] != 0);
            if neighbored {
                found.push(AttachPoint {
                    at: at as i16,
                    down: false,
                });
                found.push(AttachPoint {
                    at: at as i16,
                    down: true,
                });
            }
        }
    }
    if found.is_empty() {
        let at = dim.at_row_col(star_row, star_col) as i16;
        found.push(AttachPoint { at, down: false });
        found.push(AttachPoint { at, down: true });
    }
    found
}

pub struct BoardSnapshot<'a> {
    pub board_cells: &'a [u8],
    pub game_config: &'a game_config::GameConfig<'a>,
    pub dawg: &'a dawg::Dawg,
    pub lexicon: &'a dyn lexicon::Lexicon,
}

// word holds the full letters of the primary word, playthrough cells
// included, played blanks flagged 0x80.
#[derive(Clone, Debug)]
pub struct Play {
    pub pos: i16,
    pub down: bool,
    pub word: Box<[u8]>,
    pub cross_words: Box<[dawg::CrossWord]>,
    pub score: i16,
}

impl Play {
    #[inline(always)]
    fn step(&self, dim: matrix::Dim) -> i16 {
        if self.down { dim.cols as i16 } else { 1 }
    }

    pub fn num_placed(&self, board_cells: &[u8], dim: matrix::Dim) -> i8 {
        let step = self.step(dim);
        let mut num_placed = 0;
        for (i, _) in (0i16..).zip(self.word.iter()) {
            if board_cells[(self.pos + i * step) as usize] == 0 {
                num_placed += 1;
            }
        }
        num_placed
    }

    // rack tiles this play consumes; a played blank consumes the blank.
    pub fn placed_tiles(&self, board_cells: &[u8], dim: matrix::Dim) -> Vec<u8> {
        let step = self.step(dim);
        let mut placed = Vec::new();
        for (i, &tile) in (0i16..).zip(self.word.iter()) {
            if board_cells[(self.pos + i * step) as usize] == 0 {
                placed.push(if tile & 0x80 != 0 { 0 } else { tile });
            }
        }
        placed
    }

    pub fn apply(&self, board_cells: &mut [u8], dim: matrix::Dim) {
        let step = self.step(dim);
        for (i, &tile) in (0i16..).zip(self.word.iter()) {
            let at = (self.pos + i * step) as usize;
            if board_cells[at] == 0 {
                board_cells[at] = tile;
            }
        }
    }
}

// membership check for the perpendicular word one placed tile would form.
// lane is the main word's lane, idx the place along it.
fn cross_check(
    board_snapshot: &BoardSnapshot<'_>,
    down: bool,
    lane: i8,
    idx: i8,
    placed: u8,
) -> dawg::CrossCheck {
    let dim = board_snapshot.game_config.board_layout().dim();
    let cross_strider = if down { dim.across(idx) } else { dim.down(idx) };
    let mut lo = lane;
    while lo > 0 && board_snapshot.board_cells[cross_strider.at(lo - 1)] != 0 {
        lo -= 1;
    }
    let mut hi = lane;
    while hi + 1 < cross_strider.len() && board_snapshot.board_cells[cross_strider.at(hi + 1)] != 0
    {
        hi += 1;
    }
    if lo == hi {
        return dawg::CrossCheck::Open;
    }
    let mut word = Vec::with_capacity((hi - lo + 1) as usize);
    for j in lo..=hi {
        word.push(if j == lane {
            placed
        } else {
            board_snapshot.board_cells[cross_strider.at(j)]
        });
    }
    let unblanked = word.iter().map(|&tile| tile & 0x7f).collect::<Vec<_>>();
    if board_snapshot.lexicon.contains(&unblanked) {
        dawg::CrossCheck::Forms(dawg::CrossWord {
            pos: cross_strider.at(lo) as i16,
            word: word.into_boxed_slice(),
        })
    } else {
        dawg::CrossCheck::Illegal
    }
}

pub struct MoveGenerator {
    pub plays: Vec<Play>,
    rack_tally: Box<[u8]>,
    line_buffer: Box<[u8]>,
    seen: fash::MyHashSet<(i16, bool, Box<[u8]>)>,
}

impl MoveGenerator {
    pub fn new(game_config: &game_config::GameConfig<'_>) -> Self {
        let dim = game_config.board_layout().dim();
        Self {
            plays: Vec::new(),
            rack_tally: vec![0u8; game_config.alphabet().len() as usize].into_boxed_slice(),
            line_buffer: vec![0u8; dim.rows.max(dim.cols) as usize].into_boxed_slice(),
            seen: Default::default(),
        }
    }

    // enumeration order is fixed: row-major anchors, across before down,
    // ascending start offsets. ties downstream break on first encounter.
    pub fn gen_moves(&mut self, board_snapshot: &BoardSnapshot<'_>, rack: &[u8]) {
        let Self {
            plays,
            rack_tally,
            line_buffer,
            seen,
        } = self;
        plays.clear();
        seen.clear();
        rack_tally.iter_mut().for_each(|m| *m = 0);
        for &tile in rack {
            rack_tally[tile as usize] += 1;
        }
        let layout = board_snapshot.game_config.board_layout();
        let dim = layout.dim();
        for point in find_attach_points(
            board_snapshot.board_cells,
            dim,
            layout.star_row(),
            layout.star_col(),
        ) {
            let row = (point.at / dim.cols as i16) as i8;
            let col = (point.at % dim.cols as i16) as i8;
            let (strider, anchor_idx, lane) = if point.down {
                (dim.down(col), row, col)
            } else {
                (dim.across(row), col, row)
            };
            let len = strider.len();
            for i in 0..len {
                line_buffer[i as usize] = board_snapshot.board_cells[strider.at(i)];
            }
            let line = &line_buffer[..len as usize];
            for start in 0..=anchor_idx {
                // a tile right before the start would have to be part of the word
                if start > 0 && line[(start - 1) as usize] != 0 {
                    continue;
                }
                let min_len = (anchor_idx - start).max(2);
                let max_len = len - start;
                board_snapshot.dawg.find_words(
                    line,
                    rack_tally,
                    start,
                    anchor_idx,
                    min_len,
                    max_len,
                    |idx, placed| cross_check(board_snapshot, point.down, lane, idx, placed),
                    |word_start, word, cross_words| {
                        let pos = strider.at(word_start) as i16;
                        if seen.insert((pos, point.down, word.into())) {
                            let play_score = score::score_play(
                                board_snapshot.board_cells,
                                board_snapshot.game_config,
                                pos,
                                point.down,
                                word,
                                cross_words,
                            );
                            plays.push(Play {
                                pos,
                                down: point.down,
                                word: word.into(),
                                cross_words: cross_words.into(),
                                score: play_score,
                            });
                        }
                    },
                );
            }
        }
    }
}
