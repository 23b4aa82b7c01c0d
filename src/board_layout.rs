// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_star(&self, row: i8, col: i8) -> bool {
        row == self.star_row && col == self.star_col
    }
}

#[rustfmt::skip]
static STANDARD_PREMIUMS: [Premium; 225] = [
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout {
        premiums: STANDARD_PREMIUMS.to_vec().into_boxed_slice(),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    }
}

// codes: "TW", "DW", "TL", "DL", blank/"  " for plain, "*" or the star glyph
// for the center double-word square. the grid must be square, side 5 to 50.
pub fn make_custom_board_layout(codes: &[&str]) -> error::Returns<BoardLayout> {
    let len = codes.len();
    let side = len.isqrt();
    if side * side != len {
        return_error!(format!(
            "premium layout of {} cells does not form a square grid",
            len
        ));
    }
    if !(5..=50).contains(&side) {
        return_error!(format!("premium grid side {} not between 5 and 50", side));
    }
    let mut premiums = Vec::with_capacity(len);
    let mut star = None;
    for (i, &code) in codes.iter().enumerate() {
        premiums.push(match code.trim() {
            "TW" => TWS,
            "DW" => DWS,
            "TL" => TLS,
            "DL" => DLS,
            "" => FVS,
            "*" | "★" => {
                if star.is_none() {
                    star = Some(i);
                }
                DWS
            }
            _ => {
                return_error!(format!("unknown premium code {:?} at cell {}", code, i));
            }
        });
    }
    let star_at = star.unwrap_or(len / 2);
    Ok(BoardLayout {
        premiums: premiums.into_boxed_slice(),
        dim: matrix::Dim {
            rows: side as i8,
            cols: side as i8,
        },
        star_row: (star_at / side) as i8,
        star_col: (star_at % side) as i8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_shape() {
        let layout = make_standard_board_layout();
        assert_eq!(layout.premiums().len(), 225);
        assert_eq!(layout.star_row(), 7);
        assert_eq!(layout.star_col(), 7);
        let star = layout.premium_at(7, 7);
        assert_eq!(star.word_multiplier, 2);
        assert_eq!(star.letter_multiplier, 1);
        let corner = layout.premium_at(0, 0);
        assert_eq!(corner.word_multiplier, 3);
    }

    #[test]
    fn custom_layout_rejects_non_square() {
        assert!(make_custom_board_layout(&[""; 24]).is_err());
    }

    #[test]
    fn custom_layout_rejects_out_of_range_side() {
        assert!(make_custom_board_layout(&[""; 16]).is_err());
        assert!(make_custom_board_layout(&[""; 51 * 51]).is_err());
        assert!(make_custom_board_layout(&[""; 25]).is_ok());
    }

    #[test]
    fn custom_layout_rejects_unknown_code() {
        let mut codes = [""; 25];
        codes[3] = "XX";
        assert!(make_custom_board_layout(&codes).is_err());
    }

    #[test]
    fn custom_layout_star_defaults_to_center() {
        let layout = make_custom_board_layout(&[""; 25]).unwrap();
        assert_eq!(layout.star_row(), 2);
        assert_eq!(layout.star_col(), 2);
        let mut codes = [""; 25];
        codes[6] = "*";
        let layout = make_custom_board_layout(&codes).unwrap();
        assert_eq!(layout.star_row(), 1);
        assert_eq!(layout.star_col(), 1);
        assert_eq!(layout.premium_at(1, 1).word_multiplier, 2);
    }
}
