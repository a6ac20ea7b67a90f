// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use rand::prelude::*;
use wordgrid::{
    alphabet, board, command, display, error, game_config, game_state, kwg, move_picker, movegen,
    rlhelper,
};

const MAX_PLAYERS: u8 = 8;

// None when input has ended.
fn ask(rl: &mut rlhelper::MyEditor, prompt: &str) -> error::Returns<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            rl.add_history_entry(line.as_str())?;
            Ok(Some(line.trim().to_string()))
        }
        Err(rustyline::error::ReadlineError::Interrupted)
        | Err(rustyline::error::ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn ask_players(rl: &mut rlhelper::MyEditor) -> error::Returns<Option<Vec<(String, bool)>>> {
    let num_players = loop {
        let Some(line) = ask(rl, "How many players? ")? else {
            return Ok(None);
        };
        match line.parse::<u8>() {
            Ok(n) if (1..=MAX_PLAYERS).contains(&n) => break n,
            _ => println!("Please enter a number from 1 to {}", MAX_PLAYERS),
        }
    };
    let mut players = Vec::with_capacity(num_players as usize);
    for i in 1..=num_players {
        let Some(name) = ask(rl, &format!("Player {}, what is your name? ", i))? else {
            return Ok(None);
        };
        let name = if name.is_empty() {
            format!("Player {}", i)
        } else {
            name
        };
        let is_human = loop {
            let Some(answer) = ask(rl, &format!("Is {} a computer? (y or n): ", name))? else {
                return Ok(None);
            };
            match answer.as_str() {
                "y" | "Y" => break false,
                "n" | "N" => break true,
                _ => println!("Please answer y or n"),
            }
        };
        players.push((name, is_human));
    }
    Ok(Some(players))
}

fn print_help() {
    println!("PLACE <-|> <row> <col> <letters>   rows and columns count from 1");
    println!("                                   ?x plays a blank as x");
    println!("EXCHANGE <letters>                 ? is a blank");
    println!("PASS");
    println!("source <file>                      run commands from a file");
    println!("quit");
}

type CmdStack = Vec<(String, Option<(String, usize)>)>;

// None when the player quits or input ends.
fn human_turn(
    rl: &mut rlhelper::MyEditor,
    cmd_stack: &mut CmdStack,
    game: &game_state::GameState<'_>,
    kwg: &kwg::Kwg,
) -> error::Returns<Option<movegen::Play>> {
    let player = game.current_player();
    let hand_size = game.game_config.hand_size();
    loop {
        let line = match cmd_stack.pop() {
            Some((line, source)) => {
                if let Some((filename, line_num)) = source {
                    println!("{}:{}> {}", filename, line_num, line);
                }
                line
            }
            None => match ask(rl, &format!("{}> ", player.name))? {
                Some(line) => line,
                None => return Ok(None),
            },
        };
        let strings = match shell_words::split(&line) {
            Ok(strings) => strings,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        match strings.first().map(String::as_str) {
            None => continue,
            Some("help") => {
                print_help();
                continue;
            }
            Some("quit") => return Ok(None),
            Some("source") => {
                match strings.get(1) {
                    Some(filename) => match std::fs::read_to_string(filename) {
                        Ok(whole_file) => {
                            let v = cmd_stack.len();
                            for (line_num, line) in whole_file.lines().enumerate() {
                                let source = Some((filename.clone(), line_num + 1));
                                cmd_stack.push((line.to_string(), source));
                            }
                            cmd_stack[v..].reverse();
                        }
                        Err(err) => {
                            println!("cannot open file: {}", err);
                        }
                    },
                    None => {
                        println!("need a filename");
                    }
                }
                continue;
            }
            Some(_) => {}
        }
        match command::parse_move(&strings, &player.hand) {
            Ok(play) => match command::check_human_move(&game.board, kwg, hand_size, &play) {
                Ok(()) => return Ok(Some(play)),
                Err(err) => println!("{}", err),
            },
            Err(err) => println!("{}", err),
        }
    }
}

fn computer_turn(game: &game_state::GameState<'_>, kwg: &kwg::Kwg) -> movegen::Play {
    let player = game.current_player();
    let candidates = movegen::gen_place_moves(&game.board, kwg, &player.hand);
    if game.game_config.verbose() {
        eprintln!("{}: {} candidate plays", player.name, candidates.len());
    }
    move_picker::get_best_move(&game.board, kwg, &candidates)
}

fn print_scores(game: &game_state::GameState<'_>) {
    for player in game.players.iter() {
        println!("{}: {}", player.name, player.score);
    }
}

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let game_config = match args.get(1) {
        Some(path) => game_config::GameConfig::read(path)?,
        None => game_config::make_default_game_config(),
    };
    let seed = match game_config.seed() {
        0 => rand::random(),
        seed => seed,
    };
    if game_config.verbose() {
        eprintln!("seed: {}", seed);
    }
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);

    let board = board::Board::read(game_config.board_file_path())?;
    let alphabet = alphabet::Alphabet::read(game_config.tile_bag_file_path())?;
    let kwg = kwg::Kwg::read(game_config.dictionary_file_path())?;
    if game_config.verbose() {
        eprintln!("{} words", kwg.count_words());
    }

    let mut rl = rlhelper::new_rl_editor()?;
    let Some(players) = ask_players(&mut rl)? else {
        return Ok(());
    };
    let mut game = game_state::GameState::new(&game_config, board, &alphabet, &players);
    game.deal(&mut rng);

    let mut cmd_stack = CmdStack::new();
    loop {
        display::print_board(&game.board);
        print_scores(&game);
        let player = game.current_player();
        let name = player.name.clone();
        let is_human = player.is_human;
        let play = if is_human {
            display::print_hand(&name, &player.hand);
            match human_turn(&mut rl, &mut cmd_stack, &game, &kwg)? {
                Some(play) => play,
                None => {
                    println!("Game abandoned");
                    return Ok(());
                }
            }
        } else {
            computer_turn(&game, &kwg)
        };
        match game.play(&mut rng, &play) {
            Ok(points) => {
                println!("{} played {} for {} points", name, play, points);
            }
            Err(err) => {
                println!("{}", err);
                if is_human {
                    continue;
                }
                game.play(&mut rng, &movegen::Play::Pass)?;
                println!("{} played {} for 0 points", name, movegen::Play::Pass);
            }
        }
        if game.is_game_over() {
            break;
        }
        game.next_turn();
    }

    game.final_subtraction();
    display::print_board(&game.board);
    println!("Final scores:");
    print_scores(&game);
    let winners = game.winners();
    for &i in &winners {
        println!("{} wins", game.players[i].name);
    }
    Ok(())
}
