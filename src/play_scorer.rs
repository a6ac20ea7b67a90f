// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board, error, matrix, movegen};

// Outcome of checking one placement. words[0] is the word along the play,
// followed by the perpendicular words formed at each newly placed tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceResult {
    pub error: Option<error::PlaceError>,
    pub words: Vec<String>,
    pub points: u32,
}

impl PlaceResult {
    fn invalid(err: error::PlaceError) -> Self {
        Self {
            error: Some(err),
            words: Vec::new(),
            points: 0,
        }
    }

    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

struct WordScore {
    word: String,
    points: u32,
}

fn spell(letters: &[u8]) -> String {
    letters.iter().map(|&c| c as char).collect()
}

impl board::Board {
    // The perpendicular word through a new tile at pos, if it touches anything.
    // Only pos itself is new, so only its premium applies.
    fn cross_word(
        &self,
        pos: matrix::Position,
        direction: matrix::Direction,
        tile: alphabet::Tile,
    ) -> Option<WordScore> {
        let before = pos.translate(direction, -1);
        let after = pos.translate(direction, 1);
        if !self.has_tile(before) && !self.has_tile(after) {
            return None;
        }
        let premium = self.premium_at(pos);
        let mut letters = Vec::new();
        let mut points = 0u32;
        let mut p = self.run_start(pos, direction);
        while p != pos {
            letters.push(self.letter_at(p));
            points += self.tile_at(p).map_or(0, |t| t.points() as u32);
            p = p.translate(direction, 1);
        }
        letters.push(tile.face());
        points += tile.points() as u32 * premium.tile_multiplier as u32;
        p = after;
        while let Some(t) = self.tile_at(p) {
            letters.push(t.face());
            points += t.points() as u32;
            p = p.translate(direction, 1);
        }
        Some(WordScore {
            word: spell(&letters),
            points: points * premium.word_multiplier as u32,
        })
    }

    // Checks and scores a play without touching the board.
    pub fn test_place(&self, play: &movegen::Play) -> PlaceResult {
        let (mut direction, position, tiles) = match play {
            movegen::Play::Place {
                direction,
                position,
                tiles,
            } => (*direction, *position, &tiles[..]),
            _ => return PlaceResult::invalid(error::PlaceError::NotAPlacement),
        };
        if !self.is_in_bounds(position) {
            return PlaceResult::invalid(error::PlaceError::OutOfBounds);
        }
        if self.has_tile(position) {
            return PlaceResult::invalid(error::PlaceError::Overlap);
        }
        if tiles.is_empty() {
            return PlaceResult::invalid(error::PlaceError::NotValidPlacement);
        }

        if tiles.len() == 1
            && !self.has_tile(position.translate(direction, -1))
            && !self.has_tile(position.translate(direction, 1))
        {
            // a lone tile can only lengthen the word running across it.
            let perpendicular = direction.perpendicular();
            if self.has_tile(position.translate(perpendicular, -1))
                || self.has_tile(position.translate(perpendicular, 1))
            {
                direction = perpendicular;
            } else {
                return PlaceResult::invalid(error::PlaceError::NotValidPlacement);
            }
        }

        let first_move = self.is_empty();
        let perpendicular = direction.perpendicular();
        let mut touches = false;
        let mut covers_start = false;
        let mut letters = Vec::new();
        let mut main_points = 0u32;
        let mut word_multiplier = 1u32;
        let mut cross_words = Vec::new();
        let mut cross_points = 0u32;

        let mut p = self.run_start(position, direction);
        while p != position {
            touches = true;
            letters.push(self.letter_at(p));
            main_points += self.tile_at(p).map_or(0, |t| t.points() as u32);
            p = p.translate(direction, 1);
        }

        let mut remaining = tiles.iter();
        let mut next_tile = remaining.next();
        while let Some(&tile) = next_tile {
            if !self.is_in_bounds(p) {
                return PlaceResult::invalid(error::PlaceError::OutOfBounds);
            }
            match self.tile_at(p) {
                Some(existing) => {
                    touches = true;
                    letters.push(existing.face());
                    main_points += existing.points() as u32;
                }
                None => {
                    let premium = self.premium_at(p);
                    covers_start |= p == self.start();
                    letters.push(tile.face());
                    main_points += tile.points() as u32 * premium.tile_multiplier as u32;
                    word_multiplier *= premium.word_multiplier as u32;
                    if let Some(cross) = self.cross_word(p, perpendicular, tile) {
                        touches = true;
                        cross_points += cross.points;
                        cross_words.push(cross.word);
                    }
                    next_tile = remaining.next();
                }
            }
            p = p.translate(direction, 1);
        }
        while let Some(existing) = self.tile_at(p) {
            touches = true;
            letters.push(existing.face());
            main_points += existing.points() as u32;
            p = p.translate(direction, 1);
        }

        if !first_move && !touches {
            return PlaceResult::invalid(error::PlaceError::NotValidPlacement);
        }
        if first_move && !covers_start {
            return PlaceResult::invalid(error::PlaceError::FirstMoveMustBeAtStart);
        }

        let mut words = Vec::with_capacity(1 + cross_words.len());
        words.push(spell(&letters));
        words.extend(cross_words);
        PlaceResult {
            error: None,
            words,
            points: main_points * word_multiplier + cross_points,
        }
    }

    // Same checks as test_place. Only a valid play is written to the board.
    pub fn place(&mut self, play: &movegen::Play) -> PlaceResult {
        let result = self.test_place(play);
        if let (
            true,
            movegen::Play::Place {
                direction,
                position,
                tiles,
            },
        ) = (result.is_valid(), play)
        {
            let mut p = *position;
            for &tile in tiles {
                while self.has_tile(p) {
                    p = p.translate(*direction, 1);
                }
                self.set_tile(p, tile);
                p = p.translate(*direction, 1);
            }
        }
        result
    }
}
