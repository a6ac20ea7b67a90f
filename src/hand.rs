// Copyright (C) 2020-2024 Andy Kurnia.

use super::alphabet;

// A multiset of tiles keyed by letter, blanks under '?'.
// Iteration order is by letter, so anything derived from it is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    entries: std::collections::BTreeMap<u8, (alphabet::Tile, u8)>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles<II: IntoIterator<Item = alphabet::Tile>>(tiles: II) -> Self {
        let mut hand = Self::new();
        for tile in tiles {
            hand.add(tile);
        }
        hand
    }

    // a tile held under this letter, if any.
    #[inline(always)]
    pub fn lookup(&self, letter: u8) -> Option<alphabet::Tile> {
        self.entries
            .get(&letter.to_ascii_uppercase())
            .map(|&(tile, _)| tile)
    }

    #[inline(always)]
    pub fn count_of(&self, letter: u8) -> usize {
        self.entries
            .get(&letter.to_ascii_uppercase())
            .map_or(0, |&(_, count)| count as usize)
    }

    pub fn count(&self) -> usize {
        self.entries.values().map(|&(_, count)| count as usize).sum()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Blanks go back in unassigned.
    pub fn add(&mut self, tile: alphabet::Tile) {
        let tile = if tile.is_blank() {
            alphabet::Tile::new(alphabet::BLANK, 0)
        } else {
            tile
        };
        self.entries.entry(tile.letter()).or_insert((tile, 0)).1 += 1;
    }

    // false (and nothing changes) if no such tile is held.
    pub fn remove(&mut self, tile: alphabet::Tile) -> bool {
        match self.entries.get_mut(&tile.letter()) {
            Some(entry) => {
                entry.1 -= 1;
                if entry.1 == 0 {
                    self.entries.remove(&tile.letter());
                }
                true
            }
            None => false,
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = alphabet::Tile> + '_ {
        self.entries
            .values()
            .flat_map(|&(tile, count)| std::iter::repeat_n(tile, count as usize))
    }

    pub fn total_points(&self) -> u32 {
        self.tiles().map(|tile| tile.points() as u32).sum()
    }

    // blank-as-letter tiles count against the blanks held.
    pub fn contains_all(&self, tiles: &[alphabet::Tile]) -> bool {
        let mut needed = std::collections::BTreeMap::<u8, usize>::new();
        for tile in tiles {
            *needed.entry(tile.letter()).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(&letter, &count)| self.count_of(letter) >= count)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
