// Copyright (C) 2020-2026 Andy Kurnia.

// interactive console: watch AI games turn by turn and inspect candidate
// moves on the current board. usage: shell <wordlist>

use crosswise::{display, engine, error, game_config, game_state, return_error, score, wire};
use rand::prelude::*;

#[derive(
    rustyline_derive::Completer,
    rustyline_derive::Helper,
    rustyline_derive::Highlighter,
    rustyline_derive::Hinter,
    rustyline_derive::Validator,
)]
struct ShellHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Highlighter)]
    highlighter: rustyline::highlight::MatchingBracketHighlighter,
    #[rustyline(Validator)]
    validator: rustyline::validate::MatchingBracketValidator,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

fn read_word_list(path: &str) -> error::Returns<Vec<String>> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

struct Table<'a> {
    engine: &'a engine::Engine<'a>,
    game_state: game_state::GameState<'a>,
    solvers: [engine::Solver<'a>; 2],
    consecutive_passes: u8,
    game_over: bool,
}

impl<'a> Table<'a> {
    fn new(engine: &'a engine::Engine<'a>, skills: [u8; 2], rng: &mut dyn RngCore) -> Self {
        let mut game_state = game_state::GameState::new(engine.game_config());
        game_state.start(rng);
        Self {
            engine,
            game_state,
            solvers: [
                engine::Solver::new(engine, skills[0]),
                engine::Solver::new(engine, skills[1]),
            ],
            consecutive_passes: 0,
            game_over: false,
        }
    }

    fn show(&self) {
        let game_config = self.engine.game_config();
        let alphabet = game_config.alphabet();
        display::print_board(alphabet, game_config.board_layout(), &self.game_state.board_cells);
        println!("bag: {} tiles", self.game_state.bag.0.len());
        for (i, player) in (1..).zip(self.game_state.players.iter()) {
            println!(
                "player {}: {:4}  rack {}",
                i,
                player.score,
                alphabet.fmt_rack(&player.rack)
            );
        }
        if self.game_over {
            println!("game over");
        } else {
            println!("turn: player {}", self.game_state.turn + 1);
        }
    }

    fn step(&mut self) -> error::Returns<()> {
        if self.game_over {
            println!("game over, start another with: new");
            return Ok(());
        }
        let alphabet = self.engine.game_config().alphabet();
        let turn = self.game_state.turn as usize;
        let opponent = self.game_state.opponent_index();
        let opponent_rack = if self.game_state.bag.0.is_empty() {
            Some(self.game_state.players[opponent].rack.clone())
        } else {
            None
        };
        let chosen = self.solvers[turn].pick_from_cells(
            &self.game_state.board_cells,
            &self.game_state.players[turn].rack,
            opponent_rack.as_deref(),
            None,
        );
        match chosen {
            None => {
                println!("player {} passes", turn + 1);
                self.consecutive_passes += 1;
                if self.consecutive_passes >= 2 {
                    self.game_over = true;
                    println!("both players passed");
                    return Ok(());
                }
            }
            Some(chosen) => {
                self.consecutive_passes = 0;
                let json_play = wire::JsonPlay::from_chosen(alphabet, &chosen);
                match json_play.delta {
                    Some(delta) => println!(
                        "player {} plays {} at {} {} for {} (delta {})",
                        turn + 1,
                        json_play.word,
                        json_play.pos,
                        if json_play.down { "down" } else { "across" },
                        json_play.score,
                        delta
                    ),
                    None => println!(
                        "player {} plays {} at {} {} for {}",
                        turn + 1,
                        json_play.word,
                        json_play.pos,
                        if json_play.down { "down" } else { "across" },
                        json_play.score
                    ),
                }
                self.game_state.play(&chosen.play)?;
                if self.game_state.players[turn].rack.is_empty() {
                    let leftover = score::score_remaining(
                        alphabet,
                        &self.game_state.players[opponent].rack,
                    );
                    self.game_state.players[turn].score += leftover;
                    self.game_state.players[opponent].score -= leftover;
                    self.game_over = true;
                    println!(
                        "player {} goes out, collects {} from leftovers",
                        turn + 1,
                        leftover
                    );
                    return Ok(());
                }
            }
        }
        self.game_state.next_turn();
        Ok(())
    }

    fn board_string(&self) -> String {
        let alphabet = self.engine.game_config().alphabet();
        self.game_state
            .board_cells
            .iter()
            .map(|&cell| {
                if cell == 0 {
                    " "
                } else {
                    alphabet.from_board(cell).unwrap_or("#")
                }
            })
            .collect()
    }
}

fn parse_skill(arg: Option<&String>, default: u8) -> u8 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        return_error!("usage: shell <wordlist>".to_string());
    }
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
    println!("commands: new [s1 s2] | show | step | run | best RACK | all RACK [n] | exit");

    let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
    let mut table = Table::new(&engine, [5, 5], &mut rng);
    let mut scratch = engine::Solver::new(&engine, 5);

    let mut rl =
        rustyline::Editor::<ShellHelper, rustyline::history::DefaultHistory>::new()?;
    rl.set_helper(Some(ShellHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        validator: rustyline::validate::MatchingBracketValidator::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    loop {
        let line = match rl.readline("crosswise> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(line.as_str());
        let strings = match shell_words::split(&line) {
            Ok(strings) => strings,
            Err(err) => {
                println!("cannot parse: {:?}", err);
                continue;
            }
        };
        if strings.is_empty() {
            continue;
        }
        match strings[0].as_str() {
            "help" => {
                println!("new [s1 s2] | show | step | run | best RACK | all RACK [n] | exit");
            }
            "exit" | "quit" => break,
            "new" => {
                let skills = [
                    parse_skill(strings.get(1), 5),
                    parse_skill(strings.get(2), 5),
                ];
                table = Table::new(&engine, skills, &mut rng);
                table.show();
            }
            "show" => table.show(),
            "step" => {
                table.step()?;
                table.show();
            }
            "run" => {
                while !table.game_over {
                    table.step()?;
                }
                table.show();
            }
            "best" | "all" => {
                let Some(rack) = strings.get(1) else {
                    println!("need a rack, e.g. {} AEINRST", strings[0]);
                    continue;
                };
                let board = table.board_string();
                match scratch.find_all_moves(&board, rack) {
                    Err(err) => println!("{}", err),
                    Ok(mut plays) => {
                        if plays.is_empty() {
                            println!("no legal placement");
                            continue;
                        }
                        plays.sort_by(|a, b| b.score.cmp(&a.score));
                        let count = if strings[0] == "best" {
                            1
                        } else {
                            strings
                                .get(2)
                                .and_then(|s| s.parse().ok())
                                .unwrap_or(10usize)
                        };
                        let alphabet = engine.game_config().alphabet();
                        for play in plays.iter().take(count) {
                            let json_play = wire::JsonPlay::from_play(alphabet, play, None);
                            println!(
                                "{:3} {} at {} {}",
                                json_play.score,
                                json_play.word,
                                json_play.pos,
                                if json_play.down { "down" } else { "across" }
                            );
                        }
                    }
                }
            }
            _ => {
                println!("unknown command, try: help");
            }
        }
    }
    Ok(())
}
