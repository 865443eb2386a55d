//! Canonical game wrapper.
//!
//! `Game` owns the one real board of a match plus the undo stack. It is the
//! surface the UI and the network relay talk to: validated move application
//! that degrades to a boolean no-op on illegal input, undo, read-only legal
//! move queries, status classification, and FEN export. Exploratory search
//! never goes through here — it clones the board instead.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::game_status::{
    game_status, is_insufficient_material, GameStatus,
};
use crate::move_generation::legal_move_apply::{try_apply_move, unmake_move};
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves_from};
use crate::moves::move_description::ChessMove;
use crate::utils::long_algebraic::parse_coordinate_move;

#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new_game(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        Ok(Self {
            board: Board::from_fen(fen)?,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn move_history(&self) -> Vec<ChessMove> {
        self.history.iter().map(|record| record.mv).collect()
    }

    /// Validate and execute a move for the side to move. Returns false and
    /// leaves the game untouched when the move is illegal; callers treat
    /// this as a no-op, not a failure.
    pub fn try_apply_move(&mut self, mv: &ChessMove) -> bool {
        match try_apply_move(&mut self.board, mv) {
            Some(record) => {
                self.history.push(record);
                true
            }
            None => false,
        }
    }

    /// Wire entry point: coordinate text such as "e2e4" or "e7e8q".
    pub fn apply_coordinate_move(&mut self, text: &str) -> bool {
        let Ok((from, to, promotion)) = parse_coordinate_move(text.trim()) else {
            return false;
        };
        let mv = ChessMove {
            promotion,
            ..ChessMove::quiet(from, to)
        };
        self.try_apply_move(&mv)
    }

    /// Revert the most recent move. Returns false when there is nothing to
    /// undo.
    pub fn undo_move(&mut self) -> bool {
        match self.history.pop() {
            Some(record) => {
                unmake_move(&mut self.board, record);
                true
            }
            None => false,
        }
    }

    pub fn legal_moves_from(&self, from: Coord) -> Vec<ChessMove> {
        legal_moves_from(&self.board, from)
    }

    pub fn all_legal_moves(&self, side: Color) -> Vec<ChessMove> {
        all_legal_moves(&self.board, side)
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        game_status(&self.board, self.board.side_to_move)
    }

    pub fn is_insufficient_material(&self) -> bool {
        is_insufficient_material(&self.board)
    }

    pub fn fen(&self) -> String {
        self.board.get_fen()
    }
}
