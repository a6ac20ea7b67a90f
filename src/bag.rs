// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use super::{alphabet, hand};
use rand::prelude::*;

pub struct Bag(pub Vec<alphabet::Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles());
        bag.extend(alphabet.all_tiles());
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    pub fn pop(&mut self) -> Option<alphabet::Tile> {
        self.0.pop()
    }

    // up to num_tiles tiles, fewer when the bag runs out.
    pub fn remove_random_tiles(
        &mut self,
        rng: &mut dyn RngCore,
        num_tiles: usize,
    ) -> Vec<alphabet::Tile> {
        let mut drawn = Vec::with_capacity(num_tiles.min(self.0.len()));
        for _ in 0..num_tiles {
            if self.0.is_empty() {
                break;
            }
            let i = rng.random_range(0..self.0.len());
            drawn.push(self.0.swap_remove(i));
        }
        drawn
    }

    pub fn replenish(&mut self, rng: &mut dyn RngCore, hand: &mut hand::Hand, hand_size: usize) {
        let num_missing = hand_size.saturating_sub(hand.count());
        for tile in self.remove_random_tiles(rng, num_missing) {
            hand.add(tile);
        }
    }

    // put back the tiles in random order. keep the rest of the bag in the same order.
    pub fn put_back(&mut self, mut rng: &mut dyn RngCore, tiles: &[alphabet::Tile]) {
        let mut num_new_tiles = tiles.len();
        match num_new_tiles {
            0 => {
                return;
            }
            1 => {
                self.0
                    .insert(rng.random_range(0..self.0.len() + 1), normalized(tiles[0]));
                return;
            }
            _ => {}
        }
        let mut new_tiles = tiles.iter().copied().map(normalized).collect::<Vec<_>>();
        new_tiles.shuffle(&mut rng);
        let old_tiles = std::mem::take(&mut self.0);
        let mut num_old_tiles = old_tiles.len();
        self.0.reserve(num_old_tiles + num_new_tiles);
        let mut old_iter = old_tiles.into_iter();
        let mut new_iter = new_tiles.into_iter();
        while num_old_tiles + num_new_tiles > 0 {
            let take_old = num_new_tiles == 0
                || (num_old_tiles > 0
                    && rng.random_range(0..num_old_tiles + num_new_tiles) < num_old_tiles);
            let next = if take_old {
                num_old_tiles -= 1;
                old_iter.next()
            } else {
                num_new_tiles -= 1;
                new_iter.next()
            };
            self.0.extend(next);
        }
    }
}

// blanks return to the bag unassigned.
#[inline(always)]
fn normalized(tile: alphabet::Tile) -> alphabet::Tile {
    if tile.is_blank() {
        alphabet::Tile::new(alphabet::BLANK, 0)
    } else {
        tile
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rng() -> rand_chacha::ChaCha20Rng {
        rand_chacha::ChaCha20Rng::seed_from_u64(7)
    }

    #[test]
    fn draws_stop_when_empty() {
        let alphabet = alphabet::Alphabet::new(vec![(b'A', 1, 2), (b'B', 3, 1)]).unwrap();
        let mut bag = Bag::new(&alphabet);
        let mut rng = make_rng();
        assert_eq!(bag.len(), 3);
        let drawn = bag.remove_random_tiles(&mut rng, 5);
        assert_eq!(drawn.len(), 3);
        assert!(bag.is_empty());
    }

    #[test]
    fn replenish_fills_up_to_hand_size() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        let mut rng = make_rng();
        bag.shuffle(&mut rng);
        let mut hand = hand::Hand::new();
        bag.replenish(&mut rng, &mut hand, 7);
        assert_eq!(hand.count(), 7);
        assert_eq!(bag.len(), 93);
        bag.replenish(&mut rng, &mut hand, 7);
        assert_eq!(bag.len(), 93);
    }

    #[test]
    fn put_back_keeps_every_tile() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        let mut rng = make_rng();
        let drawn = bag.remove_random_tiles(&mut rng, 7);
        bag.put_back(&mut rng, &drawn);
        assert_eq!(bag.len(), 100);
        let mut tiles = bag.0.iter().map(|t| t.letter()).collect::<Vec<_>>();
        tiles.sort_unstable();
        let mut expected = alphabet.all_tiles().map(|t| t.letter()).collect::<Vec<_>>();
        expected.sort_unstable();
        assert_eq!(tiles, expected);
        bag.put_back(&mut rng, &[alphabet::Tile::blank_as(b'Q')]);
        assert_eq!(bag.len(), 101);
        assert!(bag.0.iter().all(|t| t.assigned().is_none()));
    }
}
