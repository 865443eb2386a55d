//! Difficulty-configured search engine.
//!
//! Wraps the minimax search behind the `Engine` trait: the difficulty tier
//! fixes the ply depth, an optional move-time budget bounds wall-clock, and
//! an owned RNG breaks ties so repeated play is not fully deterministic.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::difficulty::Difficulty;
use crate::search::minimax::{find_best_move, SearchConfig};

pub struct MinimaxEngine {
    difficulty: Difficulty,
    movetime: Option<Duration>,
    scorer: PieceSquareScorer,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            movetime: None,
            scorer: PieceSquareScorer,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible matches.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(difficulty)
        }
    }

    pub fn with_movetime(mut self, movetime: Duration) -> Self {
        self.movetime = Some(movetime);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Gambit Minimax"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String> {
        let config = SearchConfig {
            depth: self.difficulty.search_depth(),
            movetime: self.movetime,
        };

        let outcome = find_best_move(board, side, &self.scorer, config, &mut self.rng);

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info string minimax_engine depth {} nodes {} score {}",
            config.depth, outcome.nodes, outcome.best_score
        ));
        if outcome.aborted {
            out.info_lines
                .push("info string minimax_engine aborted on move-time budget".to_owned());
        }

        Ok(out)
    }
}
