// Copyright (C) 2020-2024 Andy Kurnia.

use super::{board, matrix};

// An empty square a play may be built through, for one direction.
// limit is how many tiles may go before it without reaching another anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub position: matrix::Position,
    pub direction: matrix::Direction,
    pub limit: usize,
}

impl board::Board {
    pub fn is_anchor_spot(&self, pos: matrix::Position) -> bool {
        if !self.is_in_bounds(pos) || self.has_tile(pos) {
            return false;
        }
        if pos.neighbors().iter().any(|&p| self.has_tile(p)) {
            return true;
        }
        // only the very first play may start from nowhere.
        pos == self.start() && !self.has_tile(self.start())
    }

    fn anchor_limit(&self, pos: matrix::Position, direction: matrix::Direction) -> usize {
        let mut limit = 0;
        let mut p = pos.translate(direction, -1);
        while self.is_in_bounds(p) && !self.has_tile(p) && !self.is_anchor_spot(p) {
            limit += 1;
            p = p.translate(direction, -1);
        }
        limit
    }

    // Row-major, a down anchor then an across anchor for each anchor square.
    pub fn get_anchors(&self) -> Vec<Anchor> {
        let mut anchors = Vec::new();
        for position in self.dim().positions() {
            if self.is_anchor_spot(position) {
                for direction in [matrix::Direction::Down, matrix::Direction::Across] {
                    anchors.push(Anchor {
                        position,
                        direction,
                        limit: self.anchor_limit(position, direction),
                    });
                }
            }
        }
        anchors
    }
}
