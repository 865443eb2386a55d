//! Queen pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::moves::move_description::ChessMove;
use crate::moves::sliding::{generate_sliding_moves, ALL_DIRECTIONS};

pub fn generate_queen_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, side, &ALL_DIRECTIONS, out);
}
