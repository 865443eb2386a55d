//! Engine-vs-engine self-play harness.
//!
//! Plays two configured engines against each other from the starting
//! position, then prints the final diagram and the game's PGN. Used as test
//! tooling for eyeballing engine behavior, not as a product surface.

use gambit_chess::engines::engine_minimax::MinimaxEngine;
use gambit_chess::engines::engine_random::RandomEngine;
use gambit_chess::engines::engine_trait::Engine;
use gambit_chess::game_state::chess_types::Color;
use gambit_chess::game_state::game::Game;
use gambit_chess::move_generation::game_status::GameStatus;
use gambit_chess::search::difficulty::Difficulty;
use gambit_chess::utils::pgn::write_pgn;
use gambit_chess::utils::render_board::render_board;

const MAX_PLIES: usize = 160;

fn main() {
    let mut light: Box<dyn Engine> = Box::new(MinimaxEngine::new(Difficulty::Casual));
    let mut dark: Box<dyn Engine> = Box::new(RandomEngine::new());

    let mut game = Game::new();
    let mut result = "*";

    for _ in 0..MAX_PLIES {
        match game.status() {
            GameStatus::Checkmate => {
                result = match game.side_to_move() {
                    Color::Light => "0-1",
                    Color::Dark => "1-0",
                };
                break;
            }
            GameStatus::Stalemate => {
                result = "1/2-1/2";
                break;
            }
            _ => {}
        }
        if game.is_insufficient_material() {
            result = "1/2-1/2";
            break;
        }

        let side = game.side_to_move();
        let engine: &mut Box<dyn Engine> = match side {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };

        let output = match engine.choose_move(game.board(), side) {
            Ok(output) => output,
            Err(message) => {
                eprintln!("engine failure: {message}");
                break;
            }
        };
        for line in &output.info_lines {
            eprintln!("{line}");
        }

        let Some(mv) = output.best_move else {
            break;
        };
        if !game.try_apply_move(&mv) {
            eprintln!("engine produced an illegal move; stopping");
            break;
        }
    }

    println!("{}", render_board(game.board()));

    let initial = gambit_chess::game_state::board::Board::new_game();
    match write_pgn(&initial, &game.move_history(), result) {
        Ok(pgn) => println!("{pgn}"),
        Err(message) => eprintln!("failed to render PGN: {message}"),
    }
}
