// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board_layout, error, matrix};

// The playing surface: fixed premiums plus the tiles committed so far.
// Squares only ever go from empty to filled.
#[derive(Clone)]
pub struct Board {
    layout: board_layout::BoardLayout,
    squares: Box<[Option<alphabet::Tile>]>,
    num_tiles: usize,
}

impl Board {
    pub fn new(layout: board_layout::BoardLayout) -> Self {
        let len = layout.dim().len();
        Self {
            layout,
            squares: vec![None; len].into_boxed_slice(),
            num_tiles: 0,
        }
    }

    pub fn read(path: &str) -> error::Returns<Self> {
        Ok(Self::new(board_layout::BoardLayout::read(path)?))
    }

    // rows of '.' (empty), uppercase letters, or lowercase letters for blanks.
    pub fn from_rows<S: AsRef<str>>(
        layout: board_layout::BoardLayout,
        alphabet: &alphabet::Alphabet,
        rows: &[S],
    ) -> error::Returns<Self> {
        let mut board = Self::new(layout);
        let dim = board.dim();
        if rows.len() != dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                dim.rows,
                rows.len()
            ));
        }
        for (row, line) in (0..).zip(rows.iter()) {
            let line = line.as_ref().as_bytes();
            if line.len() != dim.cols as usize {
                return_error!(format!(
                    "board: row {} needs {} columns, found {}",
                    row + 1,
                    dim.cols,
                    line.len()
                ));
            }
            for (col, &c) in (0..).zip(line.iter()) {
                let tile = match c {
                    b'.' | b' ' => continue,
                    b'a'..=b'z' => alphabet::Tile::blank_as(c),
                    _ => match alphabet.tile(c) {
                        Some(tile) if c.is_ascii_uppercase() => tile,
                        _ => {
                            return_error!(format!(
                                "board: invalid tile {:?} at {}",
                                c as char,
                                matrix::Position::new(row, col)
                            ));
                        }
                    },
                };
                board.set_tile(matrix::Position::new(row, col), tile);
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn layout(&self) -> &board_layout::BoardLayout {
        &self.layout
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.layout.dim()
    }

    #[inline(always)]
    pub fn start(&self) -> matrix::Position {
        self.layout.start()
    }

    #[inline(always)]
    pub fn premium_at(&self, pos: matrix::Position) -> board_layout::Premium {
        self.layout.premium_at(pos)
    }

    #[inline(always)]
    pub fn is_in_bounds(&self, pos: matrix::Position) -> bool {
        self.dim().contains(pos)
    }

    #[inline(always)]
    pub fn tile_at(&self, pos: matrix::Position) -> Option<alphabet::Tile> {
        if self.is_in_bounds(pos) {
            self.squares[self.dim().at(pos)]
        } else {
            None
        }
    }

    // in bounds and occupied.
    #[inline(always)]
    pub fn has_tile(&self, pos: matrix::Position) -> bool {
        self.tile_at(pos).is_some()
    }

    // Assumes pos is occupied; an empty square reads as 0.
    #[inline(always)]
    pub fn letter_at(&self, pos: matrix::Position) -> u8 {
        self.tile_at(pos).map_or(0, |tile| tile.face())
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_tiles == 0
    }

    // first square of the run of tiles ending just before pos.
    pub fn run_start(
        &self,
        pos: matrix::Position,
        direction: matrix::Direction,
    ) -> matrix::Position {
        let mut start = pos;
        while self.has_tile(start.translate(direction, -1)) {
            start = start.translate(direction, -1);
        }
        start
    }

    // letters of the run of tiles ending just before pos, in reading order.
    pub fn run_before(&self, pos: matrix::Position, direction: matrix::Direction) -> Vec<u8> {
        let mut letters = Vec::new();
        let mut p = self.run_start(pos, direction);
        while p != pos {
            letters.push(self.letter_at(p));
            p = p.translate(direction, 1);
        }
        letters
    }

    pub(crate) fn set_tile(&mut self, pos: matrix::Position, tile: alphabet::Tile) {
        let idx = self.dim().at(pos);
        debug_assert!(self.squares[idx].is_none());
        if self.squares[idx].is_none() {
            self.num_tiles += 1;
        }
        self.squares[idx] = Some(tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_reads_letters_and_blanks() {
        let layout = board_layout::BoardLayout::plain(3, 4, 2, 2).unwrap();
        let alphabet = alphabet::make_english_alphabet();
        let board = Board::from_rows(layout, &alphabet, &["....", ".CaT", "...."]).unwrap();
        assert_eq!(board.num_tiles(), 3);
        assert_eq!(board.letter_at(matrix::Position::new(1, 2)), b'A');
        assert_eq!(board.tile_at(matrix::Position::new(1, 2)).unwrap().points(), 0);
        assert_eq!(board.tile_at(matrix::Position::new(1, 1)).unwrap().points(), 3);
        assert!(!board.has_tile(matrix::Position::new(1, 0)));
        assert!(!board.has_tile(matrix::Position::new(1, 4)));
        assert_eq!(
            board.run_before(matrix::Position::new(1, 4), matrix::Direction::Across),
            b"CAT"
        );
        assert_eq!(
            board.run_start(matrix::Position::new(1, 4), matrix::Direction::Across),
            matrix::Position::new(1, 1)
        );
        assert!(
            board
                .run_before(matrix::Position::new(2, 1), matrix::Direction::Across)
                .is_empty()
        );
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        let alphabet = alphabet::make_english_alphabet();
        let layout = board_layout::BoardLayout::plain(2, 2, 1, 1).unwrap();
        assert!(Board::from_rows(layout.clone(), &alphabet, &[".."]).is_err());
        assert!(Board::from_rows(layout.clone(), &alphabet, &["..", "..."]).is_err());
        assert!(Board::from_rows(layout, &alphabet, &["..", ".1"]).is_err());
    }
}
