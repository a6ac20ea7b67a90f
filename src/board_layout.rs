// Copyright (C) 2020-2024 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

impl Premium {
    // '.' plain, '2'/'3' letter, 'd' double word, anything else triple word.
    #[inline(always)]
    pub fn from_code(c: char) -> Premium {
        match c {
            '.' => FVS,
            '2' => DLS,
            '3' => TLS,
            'd' => DWS,
            _ => TWS,
        }
    }
}

#[derive(Clone)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    start: matrix::Position,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn start(&self) -> matrix::Position {
        self.start
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, pos: matrix::Position) -> Premium {
        self.premiums[self.dim.at(pos)]
    }

    pub fn new(
        dim: matrix::Dim,
        start: matrix::Position,
        premiums: Box<[Premium]>,
    ) -> error::Returns<Self> {
        if dim.rows <= 0 || dim.cols <= 0 {
            return_error!(format!("invalid board size {}x{}", dim.rows, dim.cols));
        }
        if !dim.contains(start) {
            return_error!(format!("start square {} is off the board", start));
        }
        if premiums.len() != dim.len() {
            return_error!(format!(
                "need {} squares, found {}",
                dim.len(),
                premiums.len()
            ));
        }
        Ok(Self {
            premiums,
            dim,
            start,
        })
    }

    pub fn plain(rows: i8, cols: i8, start_row: i8, start_col: i8) -> error::Returns<Self> {
        let dim = matrix::Dim { rows, cols };
        Self::new(
            dim,
            matrix::Position::new(start_row, start_col),
            vec![FVS; dim.len()].into_boxed_slice(),
        )
    }

    // header "rows cols start_row start_col" (start is 1-indexed),
    // followed by one code per square; whitespace between codes is ignored.
    pub fn from_text(text: &str) -> error::Returns<Self> {
        let mut tokens = text.split_whitespace();
        let mut header = [0i8; 4];
        for (i, name) in ["rows", "columns", "start row", "start column"]
            .iter()
            .enumerate()
        {
            let token = match tokens.next() {
                Some(token) => token,
                None => {
                    return_error!(format!("board file is missing {}", name));
                }
            };
            header[i] = match token.parse::<i8>() {
                Ok(v) => v,
                Err(_) => {
                    return_error!(format!("invalid {} {:?}", name, token));
                }
            };
        }
        let dim = matrix::Dim {
            rows: header[0],
            cols: header[1],
        };
        if header[2] < 1 || header[3] < 1 {
            return_error!(format!(
                "start square {} {} is off the board (rows and columns count from 1)",
                header[2], header[3]
            ));
        }
        let premiums = tokens
            .flat_map(|token| token.chars())
            .map(Premium::from_code)
            .collect::<Box<_>>();
        Self::new(
            dim,
            matrix::Position::new(header[2] - 1, header[3] - 1),
            premiums,
        )
    }

    pub fn read(path: &str) -> error::Returns<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(err) => {
                return_error!(format!("cannot open board file {:?}: {}", path, err));
            }
        }
    }
}

static STANDARD_BOARD_TEXT: &str = "15 15 8 8
t..2...t...2..t
.d...3...3...d.
..d...2.2...d..
2..d...2...d..2
....d.....d....
.3...3...3...3.
..2...2.2...2..
t..2...d...2..t
..2...2.2...2..
.3...3...3...3.
....d.....d....
2..d...2...d..2
..d...2.2...d..
.d...3...3...d.
t..2...t...2..t
";

pub fn make_standard_board_layout() -> BoardLayout {
    match BoardLayout::from_text(STANDARD_BOARD_TEXT) {
        Ok(board_layout) => board_layout,
        Err(err) => panic!("standard board layout is malformed: {}", err),
    }
}
