// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board, error, hand, kwg, matrix, movegen};

// Letters typed by a player, checked against their hand.
// In a placement "?x" is a blank played as x; in an exchange "?" is a blank.
fn parse_tiles(
    letters: &str,
    hand: &hand::Hand,
    is_place: bool,
) -> error::Returns<Vec<alphabet::Tile>> {
    let mut tiles = Vec::with_capacity(letters.len());
    let mut bytes = letters.bytes().map(|c| c.to_ascii_uppercase());
    while let Some(c) = bytes.next() {
        let tile = if c == alphabet::BLANK && is_place {
            match bytes.next() {
                Some(letter) if letter.is_ascii_uppercase() => alphabet::Tile::blank_as(letter),
                _ => {
                    return_error!(format!("blank in {:?} needs a letter after it", letters));
                }
            }
        } else {
            match hand.lookup(c) {
                Some(tile) => tile,
                None => {
                    return_error!(format!(
                        "Invalid Move, letter {:?} not found in your hand",
                        c as char
                    ));
                }
            }
        };
        tiles.push(tile);
    }
    if tiles.is_empty() {
        return_error!("Invalid Command, no letters given".into());
    }
    if !hand.contains_all(&tiles) {
        return_error!("Invalid Move, tile not found in your hand".into());
    }
    Ok(tiles)
}

fn parse_coordinate(s: &str, what: &str) -> error::Returns<i8> {
    match s.parse::<i8>() {
        Ok(v) if v >= 1 => Ok(v - 1),
        _ => {
            return_error!(format!("Invalid Command, bad {} {:?}", what, s));
        }
    }
}

// PLACE <-|> <row> <col> <letters>, EXCHANGE <letters>, PASS.
// Keywords are case-insensitive; row and col are 1-indexed.
pub fn parse_move(words: &[String], hand: &hand::Hand) -> error::Returns<movegen::Play> {
    let keyword = match words.first() {
        Some(word) => word.to_ascii_uppercase(),
        None => {
            return_error!("Invalid Command".into());
        }
    };
    match (keyword.as_str(), words.len()) {
        ("PLACE", 5) => {
            let direction = match words[1].as_str() {
                "-" => matrix::Direction::Across,
                "|" => matrix::Direction::Down,
                other => {
                    return_error!(format!("Invalid Command, bad direction {:?}", other));
                }
            };
            let row = parse_coordinate(&words[2], "row")?;
            let col = parse_coordinate(&words[3], "column")?;
            Ok(movegen::Play::Place {
                direction,
                position: matrix::Position::new(row, col),
                tiles: parse_tiles(&words[4], hand, true)?,
            })
        }
        ("EXCHANGE", 2) => Ok(movegen::Play::Exchange {
            tiles: parse_tiles(&words[1], hand, false)?,
        }),
        ("PASS", 1) => Ok(movegen::Play::Pass),
        _ => {
            return_error!(format!("Invalid Command {:?}", words.join(" ")));
        }
    }
}

pub fn parse_line(line: &str, hand: &hand::Hand) -> error::Returns<movegen::Play> {
    let words = shell_words::split(line)?;
    parse_move(&words, hand)
}

// What a human may not do that the rules engine alone would allow.
pub fn check_human_move(
    board: &board::Board,
    kwg: &kwg::Kwg,
    hand_size: usize,
    play: &movegen::Play,
) -> error::Returns<()> {
    match play {
        movegen::Play::Place { tiles, .. } => {
            if tiles.len() > hand_size {
                return_error!("Too many letters placed".into());
            }
            let result = board.test_place(play);
            if let Some(err) = result.error {
                return Err(err.into());
            }
            if let Some(word) = result.words.iter().find(|word| !kwg.is_word(word)) {
                return_error!(format!("1 or more words formed are not valid: {}", word));
            }
        }
        movegen::Play::Exchange { tiles } => {
            if tiles.len() > hand_size {
                return_error!("Too many letters to swap".into());
            }
        }
        movegen::Play::Pass => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_layout;
    use alphabet::Tile;

    fn make_hand(s: &str) -> hand::Hand {
        let alphabet = alphabet::make_english_alphabet();
        hand::Hand::from_tiles(s.bytes().map(|c| alphabet.tile(c).unwrap()))
    }

    #[test]
    fn parses_placements() {
        let hand = make_hand("CAT?");
        assert_eq!(
            parse_line("place | 8 7 c?aT", &hand).unwrap(),
            movegen::Play::Place {
                direction: matrix::Direction::Down,
                position: matrix::Position::new(7, 6),
                tiles: vec![Tile::new(b'C', 3), Tile::blank_as(b'A'), Tile::new(b'T', 1)],
            }
        );
        assert!(parse_line("PLACE - 8 8 CATS", &hand).is_err());
        assert!(parse_line("PLACE - 8 8 CAAT", &make_hand("CAT")).is_err());
        assert!(parse_line("PLACE / 8 8 CAT", &hand).is_err());
        assert!(parse_line("PLACE - 0 8 CAT", &hand).is_err());
        assert!(parse_line("PLACE - x 8 CAT", &hand).is_err());
        assert!(parse_line("PLACE - 8 8 CA?", &hand).is_err());
        assert!(parse_line("PLACE - 8 8", &hand).is_err());
    }

    #[test]
    fn parses_exchange_and_pass() {
        let hand = make_hand("QU?");
        assert_eq!(
            parse_line("exchange q?", &hand).unwrap(),
            movegen::Play::Exchange {
                tiles: vec![Tile::new(b'Q', 10), Tile::new(alphabet::BLANK, 0)],
            }
        );
        assert_eq!(parse_line("PASS", &hand).unwrap(), movegen::Play::Pass);
        assert!(parse_line("PASS now", &hand).is_err());
        assert!(parse_line("", &hand).is_err());
        assert!(parse_line("JUMP", &hand).is_err());
        assert!(parse_line("PLACE \"unclosed", &hand).is_err());
    }

    #[test]
    fn humans_must_form_dictionary_words() {
        let layout = board_layout::BoardLayout::plain(5, 5, 2, 2).unwrap();
        let board = board::Board::new(layout);
        let kwg = kwg::Kwg::from_words(["CAT"]).unwrap();
        let hand = make_hand("CATS");
        let cat = parse_line("PLACE - 3 2 CAT", &hand).unwrap();
        assert!(check_human_move(&board, &kwg, 7, &cat).is_ok());
        let tac = parse_line("PLACE - 3 2 TAC", &hand).unwrap();
        assert!(check_human_move(&board, &kwg, 7, &tac).is_err());
        let off_start = parse_line("PLACE - 1 1 CAT", &hand).unwrap();
        assert!(check_human_move(&board, &kwg, 7, &off_start).is_err());
        assert!(check_human_move(&board, &kwg, 2, &cat).is_err());
    }
}
