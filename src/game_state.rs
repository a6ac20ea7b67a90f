// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use super::{alphabet, bag, board, error, game_config, hand, movegen};
use rand::prelude::*;

fn use_tiles(hand: &mut hand::Hand, tiles: &[alphabet::Tile]) -> error::Returns<()> {
    if !hand.contains_all(tiles) {
        return_error!("tiles are not in hand".into());
    }
    for &tile in tiles {
        hand.remove(tile);
    }
    Ok(())
}

#[derive(Clone)]
pub struct GamePlayer {
    pub name: String,
    pub is_human: bool,
    pub score: u32,
    pub hand: hand::Hand,
}

impl GamePlayer {
    // points never go below zero.
    pub fn subtract_points(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub players: Box<[GamePlayer]>,
    pub turn: u8,
    num_human_passes: usize,
    game_over: bool,
}

impl<'a> GameState<'a> {
    // players are (name, is_human); nobody holds tiles until deal.
    pub fn new(
        game_config: &'a game_config::GameConfig,
        board: board::Board,
        alphabet: &alphabet::Alphabet,
        players: &[(String, bool)],
    ) -> Self {
        Self {
            game_config,
            board,
            bag: bag::Bag::new(alphabet),
            players: players
                .iter()
                .map(|(name, is_human)| GamePlayer {
                    name: name.clone(),
                    is_human: *is_human,
                    score: 0,
                    hand: hand::Hand::new(),
                })
                .collect(),
            turn: 0,
            num_human_passes: 0,
            game_over: false,
        }
    }

    pub fn deal(&mut self, rng: &mut dyn RngCore) {
        self.bag.shuffle(rng);
        let hand_size = self.game_config.hand_size();
        for player in self.players.iter_mut() {
            self.bag.replenish(rng, &mut player.hand, hand_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    #[inline(always)]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn num_humans(&self) -> usize {
        self.players.iter().filter(|player| player.is_human).count()
    }

    // Applies the current player's play and returns the points it earned.
    // On error nothing has changed and the same player may try again.
    pub fn play(&mut self, rng: &mut dyn RngCore, play: &movegen::Play) -> error::Returns<u32> {
        let num_humans = self.num_humans();
        let hand_size = self.game_config.hand_size();
        let minimum_word_length = self.game_config.minimum_word_length();
        let current_player = &mut self.players[self.turn as usize];
        match play {
            movegen::Play::Pass => {
                if current_player.is_human {
                    self.num_human_passes += 1;
                }
                if self.num_human_passes >= num_humans {
                    self.game_over = true;
                }
                Ok(0)
            }
            movegen::Play::Exchange { tiles } => {
                if tiles.len() > hand_size {
                    return_error!("Too many letters to swap".into());
                }
                use_tiles(&mut current_player.hand, tiles)?;
                if current_player.is_human {
                    self.num_human_passes = 0;
                }
                self.bag.put_back(rng, tiles);
                for tile in self.bag.remove_random_tiles(rng, tiles.len()) {
                    current_player.hand.add(tile);
                }
                Ok(0)
            }
            movegen::Play::Place { tiles, .. } => {
                if tiles.len() < minimum_word_length {
                    return_error!("Word too short".into());
                }
                if !current_player.hand.contains_all(tiles) {
                    return_error!("tiles are not in hand".into());
                }
                let result = self.board.place(play);
                if let Some(err) = result.error {
                    return Err(err.into());
                }
                use_tiles(&mut current_player.hand, tiles)?;
                if current_player.is_human {
                    self.num_human_passes = 0;
                }
                let points = result.points + self.game_config.num_played_bonus(tiles.len());
                current_player.score += points;
                if current_player.hand.is_empty() && self.bag.is_empty() {
                    self.game_over = true;
                } else {
                    self.bag.replenish(rng, &mut current_player.hand, hand_size);
                }
                Ok(points)
            }
        }
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        self.turn -= num_players & -((self.turn >= num_players) as i8) as u8;
    }

    // Everyone loses what is left in their hand. If somebody went out,
    // they collect all of it.
    pub fn final_subtraction(&mut self) {
        let mut total = 0;
        let mut went_out = None;
        for (i, player) in self.players.iter_mut().enumerate() {
            let leftover = player.hand.total_points();
            if player.hand.is_empty() {
                went_out = Some(i);
            } else {
                total += leftover;
                player.subtract_points(leftover);
            }
        }
        if let Some(i) = went_out {
            self.players[i].score += total;
        }
    }

    // every player sharing the top score, in seating order.
    pub fn winners(&self) -> Vec<usize> {
        let top = self.players.iter().map(|player| player.score).max().unwrap_or(0);
        (0..self.players.len())
            .filter(|&i| self.players[i].score == top)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_layout, matrix};

    fn make_game<'a>(config: &'a game_config::GameConfig, humans: &[bool]) -> GameState<'a> {
        let layout = board_layout::BoardLayout::plain(5, 5, 2, 2).unwrap();
        let players = humans
            .iter()
            .enumerate()
            .map(|(i, &is_human)| (format!("p{}", i + 1), is_human))
            .collect::<Vec<_>>();
        GameState::new(
            config,
            board::Board::new(layout),
            &alphabet::make_english_alphabet(),
            &players,
        )
    }

    fn give(game: &mut GameState<'_>, s: &str) {
        let alphabet = alphabet::make_english_alphabet();
        let tiles = s.bytes().map(|c| alphabet.tile(c).unwrap()).collect::<Vec<_>>();
        for &tile in &tiles {
            let i = game.bag.0.iter().position(|&t| t == tile).unwrap();
            game.bag.0.remove(i);
        }
        game.players[game.turn as usize].hand = hand::Hand::from_tiles(tiles);
    }

    #[test]
    fn turns_wrap_around() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true, false, true]);
        game.next_turn();
        game.next_turn();
        assert_eq!(game.turn, 2);
        game.next_turn();
        assert_eq!(game.turn, 0);
    }

    #[test]
    fn deal_fills_every_hand() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true, false]);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        game.deal(&mut rng);
        assert!(game.players.iter().all(|player| player.hand.count() == 7));
        assert_eq!(game.bag.len(), 86);
    }

    #[test]
    fn placing_scores_and_refills() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true]);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        give(&mut game, "CATXYZQ");
        let hand = game.players[0].hand.clone();
        let short = movegen::Play::Place {
            direction: matrix::Direction::Across,
            position: matrix::Position::new(2, 2),
            tiles: vec![hand.lookup(b'C').unwrap()],
        };
        assert!(game.play(&mut rng, &short).is_err());
        let cat = movegen::Play::Place {
            direction: matrix::Direction::Across,
            position: matrix::Position::new(2, 1),
            tiles: vec![
                hand.lookup(b'C').unwrap(),
                hand.lookup(b'A').unwrap(),
                hand.lookup(b'T').unwrap(),
            ],
        };
        assert_eq!(game.play(&mut rng, &cat).unwrap(), 5);
        assert_eq!(game.players[0].score, 5);
        assert_eq!(game.players[0].hand.count(), 7);
        assert_eq!(game.board.num_tiles(), 3);
        // already taken
        assert!(game.play(&mut rng, &cat).is_err());
        assert_eq!(game.players[0].score, 5);
    }

    #[test]
    fn exchange_keeps_hand_size() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true]);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        give(&mut game, "VV");
        let v = game.players[0].hand.lookup(b'V').unwrap();
        let before = game.bag.len();
        let exchange = movegen::Play::Exchange { tiles: vec![v, v] };
        assert_eq!(game.play(&mut rng, &exchange).unwrap(), 0);
        assert_eq!(game.players[0].hand.count(), 2);
        assert_eq!(game.bag.len(), before);
        let too_many = movegen::Play::Exchange { tiles: vec![v, v, v] };
        assert!(game.play(&mut rng, &too_many).is_err());
    }

    #[test]
    fn game_ends_when_every_human_passes() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true, false, true]);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        game.play(&mut rng, &movegen::Play::Pass).unwrap();
        game.next_turn();
        game.play(&mut rng, &movegen::Play::Pass).unwrap();
        game.next_turn();
        assert!(!game.is_game_over());
        game.play(&mut rng, &movegen::Play::Pass).unwrap();
        assert!(game.is_game_over());
    }

    #[test]
    fn final_subtraction_rewards_going_out() {
        let config = game_config::make_default_game_config();
        let mut game = make_game(&config, &[true, true, true]);
        let alphabet = alphabet::make_english_alphabet();
        game.players[0].score = 20;
        game.players[1].score = 2;
        game.players[1].hand = hand::Hand::from_tiles([alphabet.tile(b'Q').unwrap()]);
        game.players[2].score = 9;
        game.players[2].hand = hand::Hand::from_tiles([alphabet.tile(b'A').unwrap()]);
        game.final_subtraction();
        assert_eq!(game.players[0].score, 31);
        assert_eq!(game.players[1].score, 0);
        assert_eq!(game.players[2].score, 8);
        assert_eq!(game.winners(), vec![0]);
    }
}
