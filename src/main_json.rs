// Copyright (C) 2020-2021 Andy Kurnia. All rights reserved.

use std::io::Read;
use wordgrid::{error, kibitzer, kwg};

// usage: json [question.json]
// without a file the question is read from stdin.
// example question:
//   {
//     "board": [ ".....", ".....", "..C..", "..A..", "..T.." ],
//     "start": [ 2, 2 ],
//     "hand": "SE?",
//     "dictionary": "dictionary.txt"
//   }
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let data = match args.get(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;

    let alphabet = question.alphabet()?;
    let kwg = kwg::Kwg::read(&question.dictionary)?;
    let kibitzer = kibitzer::Kibitzer::prepare(&alphabet, &question)?;

    let answer = kibitzer.best_play(&kwg);
    println!("{}", serde_json::to_string(&answer)?);
    Ok(())
}
