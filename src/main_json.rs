// Copyright (C) 2020-2026 Andy Kurnia.

// line-oriented move service: one MoveRequest json per stdin line, one
// MoveResponse json per stdout line. usage: json <wordlist>

use crosswise::{engine, error, game_config, return_error, wire};
use std::io::BufRead;

fn read_word_list(path: &str) -> error::Returns<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

fn handle(
    solver: &mut engine::Solver<'_>,
    request: &wire::MoveRequest,
) -> error::Returns<wire::MoveResponse> {
    let alphabet = solver.engine().game_config().alphabet();
    if request.all_moves {
        let plays = solver.find_all_moves(&request.board, &request.rack)?;
        return Ok(wire::MoveResponse {
            play: None,
            plays: Some(
                plays
                    .iter()
                    .map(|play| wire::JsonPlay::from_play(alphabet, play, None))
                    .collect(),
            ),
        });
    }
    let chosen = solver.find_move(
        &request.board,
        &request.rack,
        request.opponent_rack.as_deref(),
        request.skill,
    )?;
    Ok(wire::MoveResponse {
        play: Some(chosen.map(|chosen| wire::JsonPlay::from_chosen(alphabet, &chosen))),
        plays: None,
    })
}

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        return_error!("usage: json <wordlist>".to_string());
    }
    let words = read_word_list(&args[1])?;
    let engine = engine::Engine::new(game_config::make_standard_game_config(), &words)?;
    let mut solver = engine::Solver::new(&engine, 5);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<wire::MoveRequest>(&line) {
            Ok(request) => match handle(&mut solver, &request) {
                Ok(response) => serde_json::to_string(&response)?,
                Err(err) => serde_json::json!({ "error": err.to_string() }).to_string(),
            },
            Err(err) => serde_json::json!({ "error": err.to_string() }).to_string(),
        };
        println!("{}", reply);
    }
    Ok(())
}
