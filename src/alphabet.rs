// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

pub const BLANK: u8 = b'?';

// A tile as held or placed. A blank keeps letter '?' and zero points,
// and carries the letter it stands for once it is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: u8,
    points: u8,
    assigned: Option<u8>,
}

impl Tile {
    #[inline(always)]
    pub fn new(letter: u8, points: u8) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            points,
            assigned: None,
        }
    }

    #[inline(always)]
    pub fn blank_as(letter: u8) -> Self {
        Self {
            letter: BLANK,
            points: 0,
            assigned: Some(letter.to_ascii_uppercase()),
        }
    }

    #[inline(always)]
    pub fn letter(&self) -> u8 {
        self.letter
    }

    #[inline(always)]
    pub fn points(&self) -> u8 {
        self.points
    }

    #[inline(always)]
    pub fn assigned(&self) -> Option<u8> {
        self.assigned
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }

    // the letter this tile spells on the board.
    #[inline(always)]
    pub fn face(&self) -> u8 {
        self.assigned.unwrap_or(self.letter)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.assigned {
            Some(c) => write!(f, "{}", c.to_ascii_lowercase() as char),
            None => write!(f, "{}", self.letter as char),
        }
    }
}

pub struct TileKind {
    letter: u8,
    score: u8,
    freq: u8,
}

// The tile distribution of a game: which letters exist, their values and counts.
pub struct Alphabet {
    kinds: Box<[TileKind]>,
}

impl Alphabet {
    pub fn new(mut kinds: Vec<(u8, u8, u8)>) -> error::Returns<Self> {
        kinds.sort_unstable_by_key(|&(letter, _, _)| letter);
        for w in kinds.windows(2) {
            if w[0].0 == w[1].0 {
                return_error!(format!("letter {:?} listed twice", w[0].0 as char));
            }
        }
        Ok(Self {
            kinds: kinds
                .into_iter()
                .map(|(letter, score, freq)| TileKind {
                    letter,
                    score,
                    freq,
                })
                .collect(),
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline(always)]
    fn find(&self, letter: u8) -> Option<&TileKind> {
        let letter = letter.to_ascii_uppercase();
        self.kinds
            .binary_search_by_key(&letter, |kind| kind.letter)
            .ok()
            .map(|i| &self.kinds[i])
    }

    #[inline(always)]
    pub fn score(&self, letter: u8) -> Option<u8> {
        self.find(letter).map(|kind| kind.score)
    }

    #[inline(always)]
    pub fn freq(&self, letter: u8) -> u8 {
        self.find(letter).map_or(0, |kind| kind.freq)
    }

    #[inline(always)]
    pub fn tile(&self, letter: u8) -> Option<Tile> {
        self.find(letter).map(|kind| Tile::new(kind.letter, kind.score))
    }

    // every tile in the distribution, in letter order.
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.kinds.iter().flat_map(|kind| {
            std::iter::repeat_n(Tile::new(kind.letter, kind.score), kind.freq as usize)
        })
    }

    pub fn num_tiles(&self) -> usize {
        self.kinds.iter().map(|kind| kind.freq as usize).sum()
    }

    // records of "letter points count", separated by spaces.
    pub fn from_reader<R: std::io::Read>(reader: R) -> error::Returns<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut kinds = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let fields = record.iter().filter(|s| !s.is_empty()).collect::<Vec<_>>();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 3 || fields[0].len() != 1 {
                return_error!(format!("invalid tile record {:?}", fields));
            }
            let letter = fields[0].as_bytes()[0].to_ascii_uppercase();
            if letter != BLANK && !letter.is_ascii_uppercase() {
                return_error!(format!("invalid tile letter {:?}", fields[0]));
            }
            let score = fields[1].parse::<u8>()?;
            let freq = fields[2].parse::<u8>()?;
            kinds.push((letter, if letter == BLANK { 0 } else { score }, freq));
        }
        Self::new(kinds)
    }

    pub fn read(path: &str) -> error::Returns<Self> {
        match std::fs::File::open(path) {
            Ok(f) => Self::from_reader(f),
            Err(err) => {
                return_error!(format!("cannot open tile bag file {:?}: {}", path, err));
            }
        }
    }
}

static ENGLISH_TILES: &str = "? 0 2
A 1 9
B 3 2
C 3 2
D 2 4
E 1 12
F 4 2
G 2 3
H 4 2
I 1 9
J 8 1
K 5 1
L 1 4
M 3 2
N 1 6
O 1 8
P 3 2
Q 10 1
R 1 6
S 1 4
T 1 6
U 1 4
V 4 2
W 4 2
X 8 1
Y 4 2
Z 10 1
";

pub fn make_english_alphabet() -> Alphabet {
    match Alphabet::from_reader(ENGLISH_TILES.as_bytes()) {
        Ok(alphabet) => alphabet,
        Err(err) => panic!("english tile distribution is malformed: {}", err),
    }
}
