//! Shared ray-cast generation for the sliding pieces.
//!
//! Bishop, rook, and queen generation differ only in their direction sets;
//! the walk-until-blocked logic lives here once.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::moves::move_description::ChessMove;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each ray from `from` until blocked. A blocking enemy piece yields one
/// final capture move; a blocking friendly piece yields none.
pub fn generate_sliding_moves(
    board: &Board,
    from: Coord,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = from;
        while let Some(to) = current.offset(row_delta, col_delta) {
            match board.piece_at(to) {
                None => out.push(ChessMove::quiet(from, to)),
                Some(blocker) => {
                    if blocker.color != side {
                        out.push(ChessMove::capture(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
