// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use super::{board, board_layout, hand, matrix};

#[inline(always)]
pub fn empty_label(
    board_layout: &board_layout::BoardLayout,
    pos: matrix::Position,
) -> &'static str {
    if pos == board_layout.start() {
        return "*";
    }
    let premium = board_layout.premium_at(pos);
    match premium.word_multiplier {
        3 => "=",
        2 => "-",
        _ => match premium.tile_multiplier {
            3 => "\"",
            2 => "\'",
            _ => ".",
        },
    }
}

fn write_column_numbers(s: &mut String, cols: i8) {
    s.push_str("   ");
    for c in 0..cols {
        s.push_str(&format!("{:3}", c + 1));
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: i8) {
    s.push_str("   +");
    for _ in 0..cols {
        s.push_str("---");
    }
    s.push_str("-+\n");
}

// Rows and columns are numbered from 1, as typed in commands.
// Blanks show as lowercase letters.
pub fn board_to_string(board: &board::Board) -> String {
    let dim = board.dim();
    let mut s = String::new();
    write_column_numbers(&mut s, dim.cols);
    write_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        s.push_str(&format!("{:2} |", r + 1));
        for c in 0..dim.cols {
            let pos = matrix::Position::new(r, c);
            match board.tile_at(pos) {
                Some(tile) => {
                    s.push_str(&format!("{:>3}", tile.to_string()));
                }
                None => {
                    s.push_str(&format!("{:>3}", empty_label(board.layout(), pos)));
                }
            }
        }
        s.push_str(&format!(" | {}\n", r + 1));
    }
    write_border(&mut s, dim.cols);
    write_column_numbers(&mut s, dim.cols);
    s
}

pub fn print_board(board: &board::Board) {
    print!("{}", board_to_string(board));
}

// "C3 A1 T1 ?0", letter then points.
pub fn hand_to_string(hand: &hand::Hand) -> String {
    let mut s = String::new();
    for tile in hand.tiles() {
        if !s.is_empty() {
            s.push(' ');
        }
        s.push_str(&format!("{}{}", tile, tile.points()));
    }
    s
}

pub fn print_hand(name: &str, hand: &hand::Hand) {
    println!("{}'s hand: {}", name, hand_to_string(hand));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn labels_premiums_and_tiles() {
        let layout = board_layout::make_standard_board_layout();
        assert_eq!(empty_label(&layout, matrix::Position::new(7, 7)), "*");
        assert_eq!(empty_label(&layout, matrix::Position::new(0, 0)), "=");
        assert_eq!(empty_label(&layout, matrix::Position::new(1, 1)), "-");
        assert_eq!(empty_label(&layout, matrix::Position::new(0, 3)), "'");
        assert_eq!(empty_label(&layout, matrix::Position::new(1, 5)), "\"");
        assert_eq!(empty_label(&layout, matrix::Position::new(0, 1)), ".");

        let layout = board_layout::BoardLayout::plain(2, 3, 0, 0).unwrap();
        let board = board::Board::from_rows(
            layout,
            &alphabet::make_english_alphabet(),
            &["Ca.", "..."],
        )
        .unwrap();
        let text = board_to_string(&board);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     1  2  3");
        assert_eq!(lines[2], " 1 |  C  a  . | 1");
        assert_eq!(lines[3], " 2 |  .  .  . | 2");
    }

    #[test]
    fn hand_lists_letters_with_points() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand::Hand::from_tiles(
            [b'Q', b'A', alphabet::BLANK].map(|c| alphabet.tile(c).unwrap()),
        );
        assert_eq!(hand_to_string(&hand), "?0 A1 Q10");
    }
}
