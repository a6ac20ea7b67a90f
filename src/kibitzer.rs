// Copyright (C) 2020-2022 Andy Kurnia.

use super::{alphabet, board, board_layout, error, hand, kwg, matrix, move_picker, movegen};

// note: rows and columns are 0-based in this representation only.
// typed commands count from 1.

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum JsonPlay {
    #[serde(rename = "exchange")]
    Exchange { tiles: String },
    #[serde(rename = "place")]
    Place {
        direction: matrix::Direction,
        row: i8,
        col: i8,
        tiles: String,
        score: u32,
        words: Vec<String>,
    },
    #[serde(rename = "pass")]
    Pass,
}

// "?x" for a blank played as x, as in a typed command.
fn tiles_to_string(tiles: &[alphabet::Tile]) -> String {
    let mut s = String::with_capacity(tiles.len() * 2);
    for tile in tiles {
        match tile.assigned() {
            Some(c) => {
                s.push(alphabet::BLANK as char);
                s.push(c as char);
            }
            None => s.push(tile.letter() as char),
        }
    }
    s
}

impl JsonPlay {
    // score and words are what the play earns on this board.
    pub fn from_play(board: &board::Board, play: &movegen::Play) -> Self {
        match play {
            movegen::Play::Exchange { tiles } => Self::Exchange {
                tiles: tiles_to_string(tiles),
            },
            movegen::Play::Place {
                direction,
                position,
                tiles,
            } => {
                let result = board.test_place(play);
                Self::Place {
                    direction: *direction,
                    row: position.row,
                    col: position.col,
                    tiles: tiles_to_string(tiles),
                    score: result.points,
                    words: result.words,
                }
            }
            movegen::Play::Pass => Self::Pass,
        }
    }
}

// board: one string per row. '.' is empty, lowercase is a blank.
// start: [row, col] of the start square.
// layout: one string of premium codes per row; plain squares if absent.
// hand: letters held, '?' for a blank.
// dictionary: word list, one per line.
// bag: tile distribution file; the english distribution if absent.
#[derive(serde::Deserialize, Debug)]
pub struct Question {
    pub board: Vec<String>,
    pub start: [i8; 2],
    #[serde(default)]
    pub layout: Option<Vec<String>>,
    pub hand: String,
    pub dictionary: String,
    #[serde(default)]
    pub bag: Option<String>,
}

impl Question {
    pub fn board_layout(&self) -> error::Returns<board_layout::BoardLayout> {
        let num_rows = self.board.len();
        let num_cols = self.board.first().map_or(0, |row| row.chars().count());
        if num_rows > i8::MAX as usize || num_cols > i8::MAX as usize {
            return_error!(format!("board: {}x{} is too large", num_rows, num_cols));
        }
        let dim = matrix::Dim {
            rows: num_rows as i8,
            cols: num_cols as i8,
        };
        let start = matrix::Position::new(self.start[0], self.start[1]);
        let layout_rows = match &self.layout {
            Some(layout_rows) => layout_rows,
            None => {
                return board_layout::BoardLayout::plain(dim.rows, dim.cols, start.row, start.col);
            }
        };
        if layout_rows.len() != num_rows {
            return_error!(format!(
                "layout: need {} rows, found {} rows",
                num_rows,
                layout_rows.len()
            ));
        }
        for (row_num, row) in layout_rows.iter().enumerate() {
            if row.chars().count() != num_cols {
                return_error!(format!(
                    "layout row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    num_cols,
                    row.chars().count()
                ));
            }
        }
        let premiums = layout_rows
            .iter()
            .flat_map(|row| row.chars())
            .map(board_layout::Premium::from_code)
            .collect::<Box<_>>();
        board_layout::BoardLayout::new(dim, start, premiums)
    }

    pub fn alphabet(&self) -> error::Returns<alphabet::Alphabet> {
        match &self.bag {
            Some(path) => alphabet::Alphabet::read(path),
            None => Ok(alphabet::make_english_alphabet()),
        }
    }
}

fn use_up(
    available_tally: &mut std::collections::BTreeMap<u8, u8>,
    alphabet: &alphabet::Alphabet,
    letter: u8,
    whose: &str,
) -> error::Returns<()> {
    match available_tally.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            Ok(())
        }
        _ => {
            return_error!(format!(
                "{}: too many tile {:?} (bag contains only {})",
                whose,
                letter as char,
                alphabet.freq(letter)
            ));
        }
    }
}

pub struct Kibitzer {
    // tiles neither on the board nor in the hand.
    pub available_tally: std::collections::BTreeMap<u8, u8>,
    pub board: board::Board,
    pub hand: hand::Hand,
}

impl Kibitzer {
    // the board and hand together may not use more tiles than the bag holds.
    pub fn prepare(alphabet: &alphabet::Alphabet, question: &Question) -> error::Returns<Self> {
        let board = board::Board::from_rows(question.board_layout()?, alphabet, &question.board)?;

        let mut available_tally = std::collections::BTreeMap::new();
        for tile in alphabet.all_tiles() {
            *available_tally.entry(tile.letter()).or_insert(0u8) += 1;
        }
        for pos in board.dim().positions() {
            if let Some(tile) = board.tile_at(pos) {
                use_up(&mut available_tally, alphabet, tile.letter(), "board")?;
            }
        }

        let mut hand = hand::Hand::new();
        for c in question.hand.bytes() {
            let tile = match alphabet.tile(c) {
                Some(tile) => tile,
                None => {
                    return_error!(format!("hand has invalid tile {:?}", c as char));
                }
            };
            use_up(&mut available_tally, alphabet, tile.letter(), "hand")?;
            hand.add(tile);
        }

        Ok(Self {
            available_tally,
            board,
            hand,
        })
    }

    pub fn best_play(&self, kwg: &kwg::Kwg) -> JsonPlay {
        let play = move_picker::get_move(&self.board, kwg, &self.hand);
        JsonPlay::from_play(&self.board, &play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(board: &[&str], hand: &str) -> Question {
        Question {
            board: board.iter().map(|row| row.to_string()).collect(),
            start: [2, 2],
            layout: None,
            hand: hand.into(),
            dictionary: "unused".into(),
            bag: None,
        }
    }

    #[test]
    fn question_parses_from_json() {
        let question = serde_json::from_str::<Question>(
            r#"{
              "board": [ ".....", ".....", "..C..", "..A..", "..T.." ],
              "start": [ 2, 2 ],
              "layout": [ "T...T", ".2.d.", ".....", ".d.2.", "T...T" ],
              "hand": "SE?",
              "dictionary": "words.txt"
            }"#,
        )
        .unwrap();
        assert_eq!(question.bag, None);
        let layout = question.board_layout().unwrap();
        assert_eq!(layout.start(), matrix::Position::new(2, 2));
        assert_eq!(
            layout.premium_at(matrix::Position::new(0, 0)).word_multiplier,
            3
        );
        assert_eq!(
            layout.premium_at(matrix::Position::new(1, 1)).tile_multiplier,
            2
        );
        let kibitzer = Kibitzer::prepare(&question.alphabet().unwrap(), &question).unwrap();
        assert_eq!(kibitzer.board.num_tiles(), 3);
        assert_eq!(kibitzer.hand.count(), 3);
        assert_eq!(kibitzer.available_tally[&b'C'], 1);
        assert_eq!(kibitzer.available_tally[&alphabet::BLANK], 1);
    }

    #[test]
    fn layout_must_match_board() {
        let mut question = make_question(&[".....", ".....", ".....", ".....", "....."], "A");
        question.layout = Some(vec!["....".into(); 5]);
        assert!(question.board_layout().is_err());
        question.layout = Some(vec![".....".into(); 4]);
        assert!(question.board_layout().is_err());
        question.layout = None;
        question.start = [5, 0];
        assert!(question.board_layout().is_err());
    }

    #[test]
    fn tiles_must_exist_in_the_bag() {
        let alphabet = alphabet::make_english_alphabet();
        let empty = [".....", ".....", ".....", ".....", "....."];
        assert!(Kibitzer::prepare(&alphabet, &make_question(&empty, "QQ")).is_err());
        assert!(Kibitzer::prepare(&alphabet, &make_question(&empty, "A1")).is_err());
        let with_blank = [".....", ".....", "..x..", ".....", "....."];
        assert!(Kibitzer::prepare(&alphabet, &make_question(&with_blank, "??")).is_err());
        assert!(Kibitzer::prepare(&alphabet, &make_question(&with_blank, "?")).is_ok());
        let with_q = [".....", ".....", "..Q..", ".....", "....."];
        assert!(Kibitzer::prepare(&alphabet, &make_question(&with_q, "Q")).is_err());
    }

    #[test]
    fn answers_with_the_best_play() {
        let alphabet = alphabet::make_english_alphabet();
        let empty = [".....", ".....", ".....", ".....", "....."];
        let kibitzer = Kibitzer::prepare(&alphabet, &make_question(&empty, "TAC")).unwrap();
        let kwg = kwg::Kwg::from_words(["CAT"]).unwrap();
        let answer = kibitzer.best_play(&kwg);
        assert_eq!(
            answer,
            JsonPlay::Place {
                direction: matrix::Direction::Across,
                row: 2,
                col: 2,
                tiles: "CAT".into(),
                score: 5,
                words: vec!["CAT".into()],
            }
        );
        assert_eq!(
            serde_json::to_string(&answer).unwrap(),
            r#"{"action":"place","direction":"across","row":2,"col":2,"tiles":"CAT","score":5,"words":["CAT"]}"#
        );

        let kibitzer = Kibitzer::prepare(&alphabet, &make_question(&empty, "XYZ")).unwrap();
        let answer = kibitzer.best_play(&kwg);
        assert_eq!(answer, JsonPlay::Pass);
        assert_eq!(
            serde_json::to_string(&answer).unwrap(),
            r#"{"action":"pass"}"#
        );
    }

    #[test]
    fn blanks_are_written_as_typed() {
        let tiles = [
            alphabet::Tile::new(b'C', 3),
            alphabet::Tile::blank_as(b'A'),
            alphabet::Tile::new(b'T', 1),
        ];
        assert_eq!(tiles_to_string(&tiles), "C?AT");
        let board = board::Board::new(board_layout::BoardLayout::plain(3, 3, 1, 1).unwrap());
        let exchange = movegen::Play::Exchange {
            tiles: vec![alphabet::Tile::new(alphabet::BLANK, 0)],
        };
        assert_eq!(
            serde_json::to_string(&JsonPlay::from_play(&board, &exchange)).unwrap(),
            r#"{"action":"exchange","tiles":"?"}"#
        );
    }
}
