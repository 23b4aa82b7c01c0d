// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, move_picker, movegen};

// board: side^2 cell symbols, row-major. rack: letters plus '?' blanks.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct MoveRequest {
    pub board: String,
    pub rack: String,
    #[serde(default)]
    pub opponent_rack: Option<String>,
    #[serde(default)]
    pub skill: Option<u8>,
    #[serde(default)]
    pub all_moves: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct JsonCrossWord {
    pub pos: i16,
    pub word: String,
}

// pos is 0-based row-major. word letters include playthrough tiles, with
// played blanks lowercase.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct JsonPlay {
    pub pos: i16,
    pub down: bool,
    pub word: String,
    pub score: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i16>,
    pub cross_words: Vec<JsonCrossWord>,
}

fn word_string(alphabet: &alphabet::Alphabet<'_>, word: &[u8]) -> String {
    word.iter()
        .map(|&tile| alphabet.from_board(tile).unwrap_or("#"))
        .collect()
}

impl JsonPlay {
    pub fn from_play(
        alphabet: &alphabet::Alphabet<'_>,
        play: &movegen::Play,
        delta: Option<i16>,
    ) -> Self {
        Self {
            pos: play.pos,
            down: play.down,
            word: word_string(alphabet, &play.word),
            score: play.score,
            delta,
            cross_words: play
                .cross_words
                .iter()
                .map(|cross_word| JsonCrossWord {
                    pos: cross_word.pos,
                    word: word_string(alphabet, &cross_word.word),
                })
                .collect(),
        }
    }

    pub fn from_chosen(alphabet: &alphabet::Alphabet<'_>, chosen: &move_picker::ChosenPlay) -> Self {
        Self::from_play(alphabet, &chosen.play, chosen.delta)
    }
}

// exactly one of play/plays is present; a null play means no legal move.
#[derive(serde::Serialize, Debug)]
pub struct MoveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<Option<JsonPlay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays: Option<Vec<JsonPlay>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::make_english_alphabet;

    #[test]
    fn play_serializes_with_blank_lowercase() {
        let alphabet = make_english_alphabet();
        let play = movegen::Play {
            pos: 111,
            down: false,
            word: vec![15, 4, 4, 9, 20, 25 | 0x80].into_boxed_slice(),
            cross_words: Vec::new().into_boxed_slice(),
            score: 22,
        };
        let json_play = JsonPlay::from_play(&alphabet, &play, None);
        assert_eq!(json_play.word, "ODDITy");
        let text = serde_json::to_string(&json_play).unwrap();
        assert!(!text.contains("delta"));
        let back: JsonPlay = serde_json::from_str(&text).unwrap();
        assert_eq!(back.word, "ODDITy");
    }

    #[test]
    fn request_defaults() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"board":"   ","rack":"AB"}"#).unwrap();
        assert!(request.opponent_rack.is_none());
        assert!(request.skill.is_none());
        assert!(!request.all_moves);
    }
}
