//! Engine abstraction layer.
//!
//! Defines the common output payload so different move sources — random,
//! local search, or a validated external delegate — can be selected at
//! runtime behind a single trait interface.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_description::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` means the side has no legal move (mate or stalemate).
    pub best_move: Option<ChessMove>,
    /// Diagnostic `info string` lines; the caller decides where they go.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String>;
}
