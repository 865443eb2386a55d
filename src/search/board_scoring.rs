//! Pluggable static evaluation.
//!
//! Search delegates position scoring to the `BoardScorer` trait so alternate
//! heuristics can be swapped without altering search code. Scoring is a pure
//! read of the board from an explicit perspective: own material and
//! placement added, the opponent's subtracted.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `side`. Must not mutate anything.
    fn score(&self, board: &Board, side: Color) -> i32;
}

/// Raw material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            // King-capture sentinel, not an achievable capture value.
            PieceKind::King => 20_000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        let mut total = 0i32;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let Some(piece) = board.piece_at(Coord::new(row, col)) else {
                    continue;
                };
                let value = Self::piece_value(piece.kind);
                if piece.color == side {
                    total += value;
                } else {
                    total -= value;
                }
            }
        }
        total
    }
}

/// Material plus a per-square positional bonus, mirrored by rank so both
/// sides read the same tables. This is the default evaluator for search.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    /// Positional bonus for a piece of `color` standing on `at`.
    #[inline]
    pub fn table_bonus(kind: PieceKind, color: Color, at: Coord) -> i32 {
        // Tables are written from light's point of view with rank 8 first,
        // so light indexes with the row flipped and dark reads it directly.
        let index = match color {
            Color::Light => (7 - at.row as usize) * 8 + at.col as usize,
            Color::Dark => at.index(),
        };
        match kind {
            PieceKind::Pawn => PAWN_TABLE[index],
            PieceKind::Knight => KNIGHT_TABLE[index],
            PieceKind::Bishop => BISHOP_TABLE[index],
            PieceKind::Rook => ROOK_TABLE[index],
            PieceKind::Queen => QUEEN_TABLE[index],
            PieceKind::King => KING_TABLE[index],
        }
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        let mut total = 0i32;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let at = Coord::new(row, col);
                let Some(piece) = board.piece_at(at) else {
                    continue;
                };
                let value = MaterialScorer::piece_value(piece.kind)
                    + Self::table_bonus(piece.kind, piece.color, at);
                if piece.color == side {
                    total += value;
                } else {
                    total -= value;
                }
            }
        }
        total
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];
