// Copyright (C) 2020-2026 Andy Kurnia.

// batch self-play: auto <wordlist> [num_games] [skill1] [skill2]
// worker threads share one read-only engine; results land in games.csv.

use crosswise::{engine, error, game_config, game_state, return_error, score};
use rand::prelude::*;

struct GameRow {
    game: usize,
    scores: [i16; 2],
    turns: usize,
}

fn read_word_list(path: &str) -> error::Returns<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

fn play_one_game(
    engine: &engine::Engine<'_>,
    skills: [u8; 2],
    game: usize,
) -> error::Returns<GameRow> {
    let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
    let mut game_state = game_state::GameState::new(engine.game_config());
    game_state.start(&mut rng);
    let mut solvers = [
        engine::Solver::new(engine, skills[0]),
        engine::Solver::new(engine, skills[1]),
    ];
    let alphabet = engine.game_config().alphabet();
    let mut turns = 0;
    let mut consecutive_passes = 0;
    loop {
        let turn = game_state.turn as usize;
        let opponent = game_state.opponent_index();
        // once the bag is out the opponent's rack is fully determined
        let opponent_rack = if game_state.bag.0.is_empty() {
            Some(game_state.players[opponent].rack.clone())
        } else {
            None
        };
        let chosen = solvers[turn].pick_from_cells(
            &game_state.board_cells,
            &game_state.players[turn].rack,
            opponent_rack.as_deref(),
            None,
        );
        turns += 1;
        match chosen {
            None => {
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    break;
                }
            }
            Some(chosen) => {
                consecutive_passes = 0;
                game_state.play(&chosen.play)?;
                if game_state.players[turn].rack.is_empty() {
                    let leftover =
                        score::score_remaining(alphabet, &game_state.players[opponent].rack);
                    game_state.players[turn].score += leftover;
                    game_state.players[opponent].score -= leftover;
                    break;
                }
            }
        }
        game_state.next_turn();
    }
    Ok(GameRow {
        game,
        scores: [game_state.players[0].score, game_state.players[1].score],
        turns,
    })
}

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        return_error!("usage: auto <wordlist> [num_games] [skill1] [skill2]".to_string());
    }
    let num_games = match args.get(2) {
        Some(s) => s.parse::<usize>()?,
        None => 4,
    };
    let skills = [
        match args.get(3) {
            Some(s) => s.parse::<u8>()?,
            None => 6,
        },
        match args.get(4) {
            Some(s) => s.parse::<u8>()?,
            None => 6,
        },
    ];

    let words = read_word_list(&args[1])?;
    let engine = engine::Engine::new(game_config::make_standard_game_config(), &words)?;
    let stats = engine.compression_stats();
    println!(
        "lexicon: {} words, automaton {} -> {} nodes ({:.1}% reduction)",
        engine.lexicon().len(),
        stats.nodes_before,
        stats.nodes_after,
        stats.reduction() * 100.0
    );

    let num_threads = num_cpus::get().min(num_games).max(1);
    // error boxes are not Send, ship them across as strings
    let (tx, rx) = std::sync::mpsc::channel::<Result<GameRow, String>>();
    std::thread::scope(|scope| -> error::Returns<()> {
        for thread_index in 0..num_threads {
            let engine = &engine;
            let tx = tx.clone();
            scope.spawn(move || {
                let mut game = thread_index;
                while game < num_games {
                    let outcome =
                        play_one_game(engine, skills, game).map_err(|err| err.to_string());
                    if tx.send(outcome).is_err() {
                        return;
                    }
                    game += num_threads;
                }
            });
        }
        drop(tx);

        let mut csv_writer = csv::Writer::from_path("games.csv")?;
        csv_writer.write_record(["game", "skill1", "skill2", "score1", "score2", "turns"])?;
        let mut wins = [0usize; 2];
        let mut ties = 0usize;
        for row in rx {
            let row = row.map_err(error::new)?;
            println!(
                "game {:3}: {:4} - {:4} in {} turns",
                row.game + 1,
                row.scores[0],
                row.scores[1],
                row.turns
            );
            csv_writer.write_record([
                (row.game + 1).to_string(),
                skills[0].to_string(),
                skills[1].to_string(),
                row.scores[0].to_string(),
                row.scores[1].to_string(),
                row.turns.to_string(),
            ])?;
            match row.scores[0].cmp(&row.scores[1]) {
                std::cmp::Ordering::Greater => wins[0] += 1,
                std::cmp::Ordering::Less => wins[1] += 1,
                std::cmp::Ordering::Equal => ties += 1,
            }
        }
        csv_writer.flush()?;
        println!(
            "player 1 (skill {}) won {}, player 2 (skill {}) won {}, {} tied",
            skills[0], wins[0], skills[1], wins[1], ties
        );
        Ok(())
    })?;

    Ok(())
}
