// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    #[inline(always)]
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Across => "-",
            Direction::Down => "|",
        })
    }
}

// Signed so that one step off any edge is still representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn translate(self, direction: Direction, distance: i8) -> Self {
        match direction {
            Direction::Down => Self::new(self.row + distance, self.col),
            Direction::Across => Self::new(self.row, self.col + distance),
        }
    }

    // the coordinate that changes when moving along direction.
    #[inline(always)]
    pub fn along(self, direction: Direction) -> i8 {
        match direction {
            Direction::Down => self.row,
            Direction::Across => self.col,
        }
    }

    #[inline(always)]
    pub fn neighbors(self) -> [Position; 4] {
        [
            self.translate(Direction::Across, -1),
            self.translate(Direction::Across, 1),
            self.translate(Direction::Down, -1),
            self.translate(Direction::Down, 1),
        ]
    }
}

impl std::fmt::Display for Position {
    // 1-indexed, as typed by players.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row as i16 + 1, self.col as i16 + 1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, pos: Position) -> usize {
        self.at_row_col(pos.row, pos.col)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_along_one_axis() {
        let p = Position::new(7, 7);
        assert_eq!(p.translate(Direction::Across, 2), Position::new(7, 9));
        assert_eq!(p.translate(Direction::Down, -3), Position::new(4, 7));
        assert_eq!(p.along(Direction::Down), 7);
    }

    #[test]
    fn contains_rejects_negative_and_past_edge() {
        let dim = Dim { rows: 3, cols: 4 };
        assert!(dim.contains(Position::new(2, 3)));
        assert!(!dim.contains(Position::new(-1, 0)));
        assert!(!dim.contains(Position::new(0, 4)));
        assert_eq!(dim.at(Position::new(1, 2)), 6);
        assert_eq!(dim.positions().count(), 12);
    }
}
