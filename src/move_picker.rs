// Copyright (C) 2020-2024 Andy Kurnia.

use super::{board, hand, kwg, matrix, movegen};

// A candidate survives if it places at least two tiles, validates, and every
// word it forms is in the dictionary. The first highest scorer wins, and only
// if it scores at least a point.
// On an empty board the winner is moved to start across from the start square.
pub fn get_best_move(
    board: &board::Board,
    kwg: &kwg::Kwg,
    candidates: &[movegen::Play],
) -> movegen::Play {
    let mut best: Option<(&movegen::Play, u32)> = None;
    for play in candidates {
        if play.num_tiles() < 2 {
            continue;
        }
        let result = board.test_place(play);
        if !result.is_valid() || !result.words.iter().all(|word| kwg.is_word(word)) {
            continue;
        }
        if result.points > best.map_or(0, |(_, points)| points) {
            best = Some((play, result.points));
        }
    }
    match best {
        Some((movegen::Play::Place { tiles, .. }, _)) if board.is_empty() => {
            movegen::Play::Place {
                direction: matrix::Direction::Across,
                position: board.start(),
                tiles: tiles.clone(),
            }
        }
        Some((play, _)) => play.clone(),
        None => movegen::Play::Pass,
    }
}

// Deterministic for a given board, dictionary and hand. The hand is only read.
pub fn get_move(board: &board::Board, kwg: &kwg::Kwg, hand: &hand::Hand) -> movegen::Play {
    get_best_move(board, kwg, &movegen::gen_place_moves(board, kwg, hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, board_layout};
    use alphabet::Tile;
    use matrix::Position;
    use movegen::Play;

    fn make_board(rows: &[&str], start_row: i8, start_col: i8) -> board::Board {
        let layout = board_layout::BoardLayout::plain(
            rows.len() as i8,
            rows[0].len() as i8,
            start_row,
            start_col,
        )
        .unwrap();
        board::Board::from_rows(layout, &alphabet::make_english_alphabet(), rows).unwrap()
    }

    fn place(direction: matrix::Direction, row: i8, col: i8, s: &str) -> Play {
        let alphabet = alphabet::make_english_alphabet();
        Play::Place {
            direction,
            position: Position::new(row, col),
            tiles: s.bytes().map(|c| alphabet.tile(c).unwrap()).collect(),
        }
    }

    #[test]
    fn rejects_plays_forming_unknown_words() {
        let board = make_board(&["......", "..X...", "......"], 1, 2);
        let kwg = kwg::Kwg::from_words(["CAT", "TAX"]).unwrap();
        // CAT down next to the X also spells XA across.
        let cat = place(matrix::Direction::Down, 0, 3, "CAT");
        let result = board.test_place(&cat);
        assert!(result.is_valid());
        assert_eq!(result.words, vec!["CAT", "XA"]);
        let tax = place(matrix::Direction::Across, 1, 0, "TA");
        assert!(board.test_place(&tax).points < result.points);
        assert_eq!(get_best_move(&board, &kwg, &[cat, tax.clone()]), tax);
    }

    #[test]
    fn first_highest_scorer_wins_ties() {
        let board = make_board(&[".....", ".CAT.", "....."], 1, 1);
        let kwg = kwg::Kwg::from_words(["CAT", "AT", "AA", "TT"]).unwrap();
        let above = place(matrix::Direction::Across, 0, 2, "AT");
        let below = place(matrix::Direction::Across, 2, 2, "AT");
        let above_result = board.test_place(&above);
        let below_result = board.test_place(&below);
        assert!(above_result.is_valid());
        assert_eq!(above_result.points, below_result.points);
        assert_eq!(get_best_move(&board, &kwg, &[above.clone(), below.clone()]), above);
        assert_eq!(get_best_move(&board, &kwg, &[below.clone(), above]), below);
    }

    #[test]
    fn single_tiles_and_nothing_become_pass() {
        let board = make_board(&[".....", ".CAT.", "....."], 1, 1);
        let kwg = kwg::Kwg::from_words(["CAT", "CATS"]).unwrap();
        let cats = place(matrix::Direction::Across, 1, 4, "S");
        assert!(board.test_place(&cats).is_valid());
        assert_eq!(get_best_move(&board, &kwg, &[cats]), Play::Pass);
        assert_eq!(get_best_move(&board, &kwg, &[]), Play::Pass);
    }

    #[test]
    fn scoreless_plays_become_pass() {
        let board = make_board(&[".....", ".....", "....."], 1, 1);
        let kwg = kwg::Kwg::from_words(["AT"]).unwrap();
        let blanks = Play::Place {
            direction: matrix::Direction::Across,
            position: Position::new(1, 1),
            tiles: vec![Tile::blank_as(b'A'), Tile::blank_as(b'T')],
        };
        let result = board.test_place(&blanks);
        assert!(result.is_valid());
        assert_eq!(result.points, 0);
        assert_eq!(get_best_move(&board, &kwg, &[blanks]), Play::Pass);
    }

    #[test]
    fn opening_move_is_anchored_at_start_across() {
        let board = make_board(&[".....", ".....", "....."], 1, 2);
        let kwg = kwg::Kwg::from_words(["AT"]).unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand::Hand::from_tiles(
            [b'A', b'T'].into_iter().map(|c| alphabet.tile(c).unwrap()),
        );
        assert_eq!(
            get_move(&board, &kwg, &hand),
            Play::Place {
                direction: matrix::Direction::Across,
                position: Position::new(1, 2),
                tiles: vec![Tile::new(b'A', 1), Tile::new(b'T', 1)],
            }
        );
    }
}
