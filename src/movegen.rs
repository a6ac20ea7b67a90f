// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, anchor, board, hand, kwg, matrix};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Play {
    Exchange {
        tiles: Vec<alphabet::Tile>,
    },
    // position is the first empty square covered; tiles are in reading order
    // and skip over squares that are already occupied.
    Place {
        direction: matrix::Direction,
        position: matrix::Position,
        tiles: Vec<alphabet::Tile>,
    },
    Pass,
}

impl Play {
    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        match self {
            Play::Exchange { tiles } | Play::Place { tiles, .. } => tiles.len(),
            Play::Pass => 0,
        }
    }
}

// Written back in the form the command parser accepts.
impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_tiles(
            f: &mut std::fmt::Formatter<'_>,
            tiles: &[alphabet::Tile],
        ) -> std::fmt::Result {
            for tile in tiles {
                match tile.assigned() {
                    Some(c) => write!(f, "{}{}", alphabet::BLANK as char, c as char)?,
                    None => write!(f, "{}", tile.letter() as char)?,
                }
            }
            Ok(())
        }
        match self {
            Play::Exchange { tiles } => {
                write!(f, "EXCHANGE ")?;
                write_tiles(f, tiles)
            }
            Play::Place {
                direction,
                position,
                tiles,
            } => {
                write!(f, "PLACE {} {} ", direction, position)?;
                write_tiles(f, tiles)
            }
            Play::Pass => write!(f, "PASS"),
        }
    }
}

struct Env<'a> {
    board: &'a board::Board,
    kwg: &'a kwg::Kwg,
    anchor: anchor::Anchor,
    hand: hand::Hand,
    position: matrix::Position,
    tiles: Vec<alphabet::Tile>,
    plays: Vec<Play>,
}

// One tile taken from the hand and appended to the play in progress.
// Dropping it puts everything back.
struct Step<'e, 'a> {
    env: &'e mut Env<'a>,
    taken: alphabet::Tile,
    shifted_back: bool,
}

impl<'a> std::ops::Deref for Step<'_, 'a> {
    type Target = Env<'a>;

    #[inline(always)]
    fn deref(&self) -> &Env<'a> {
        self.env
    }
}

impl<'a> std::ops::DerefMut for Step<'_, 'a> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Env<'a> {
        self.env
    }
}

impl Drop for Step<'_, '_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.env.tiles.pop();
        self.env.hand.add(self.taken);
        if self.shifted_back {
            self.env.position = self.env.position.translate(self.env.anchor.direction, 1);
        }
    }
}

// Uses the exact tile if held, else a blank standing in for it.
// None when neither is available.
fn take_from_hand<'e, 'a>(
    env: &'e mut Env<'a>,
    letter: u8,
    shift_back: bool,
) -> Option<Step<'e, 'a>> {
    let (taken, placed) = match env.hand.lookup(letter) {
        Some(tile) => (tile, tile),
        None => {
            let blank = env.hand.lookup(alphabet::BLANK)?;
            (blank, alphabet::Tile::blank_as(letter))
        }
    };
    env.hand.remove(taken);
    env.tiles.push(placed);
    if shift_back {
        env.position = env.position.translate(env.anchor.direction, -1);
    }
    Some(Step {
        env,
        taken,
        shifted_back: shift_back,
    })
}

fn record(env: &mut Env<'_>) {
    let play = Play::Place {
        direction: env.anchor.direction,
        position: env.position,
        tiles: env.tiles.clone(),
    };
    env.plays.push(play);
}

// square is the next square to fill; p spells everything from the start of
// the word up to (not including) square.
fn extend_right(env: &mut Env<'_>, square: matrix::Position, p: i32) {
    let kwg = env.kwg;
    let direction = env.anchor.direction;
    if kwg.accepts(p) && square.along(direction) > env.anchor.position.along(direction) {
        record(env);
    }
    if !env.board.is_in_bounds(square) || !kwg.has_children(p) {
        return;
    }
    let next_square = square.translate(direction, 1);
    if let Some(tile) = env.board.tile_at(square) {
        let q = kwg.seek(p, tile.face());
        if q > 0 {
            extend_right(env, next_square, q);
        }
        return;
    }
    for (letter, q) in kwg.children(p) {
        if let Some(mut step) = take_from_hand(env, letter, false) {
            extend_right(&mut *step, next_square, q);
        }
    }
}

// Builds prefixes of up to limit tiles on the empty squares before the
// anchor, extending each (including the empty one) through the anchor.
fn left_part(env: &mut Env<'_>, p: i32, limit: usize) {
    let kwg = env.kwg;
    let anchor_position = env.anchor.position;
    extend_right(env, anchor_position, p);
    if limit == 0
        || !env
            .board
            .is_in_bounds(env.position.translate(env.anchor.direction, -1))
    {
        return;
    }
    for (letter, q) in kwg.children(p) {
        if let Some(mut step) = take_from_hand(env, letter, true) {
            left_part(&mut *step, q, limit - 1);
        }
    }
}

fn gen_anchor_moves(
    board: &board::Board,
    kwg: &kwg::Kwg,
    hand: &hand::Hand,
    anchor: anchor::Anchor,
) -> Vec<Play> {
    let mut env = Env {
        board,
        kwg,
        anchor,
        hand: hand.clone(),
        position: anchor.position,
        tiles: Vec::new(),
        plays: Vec::new(),
    };
    // on the opening move the whole hand may go before the start square.
    let limit = if anchor.position == board.start() && !board.has_tile(board.start()) {
        hand.count().saturating_sub(1)
    } else {
        anchor.limit
    };
    if limit > 0 {
        left_part(&mut env, kwg.root(), limit);
    } else if let Some(p) =
        kwg.find_prefix_bytes(&board.run_before(anchor.position, anchor.direction))
    {
        extend_right(&mut env, anchor.position, p);
    }
    debug_assert!(env.tiles.is_empty());
    debug_assert!(env.hand == *hand);
    env.plays
}

// Every placement the trie allows from every anchor, in anchor order then
// search order. Candidates are not yet checked against perpendicular words.
pub fn gen_place_moves(board: &board::Board, kwg: &kwg::Kwg, hand: &hand::Hand) -> Vec<Play> {
    let mut plays = Vec::new();
    for anchor in board.get_anchors() {
        plays.extend(gen_anchor_moves(board, kwg, hand, anchor));
    }
    plays
}
