//! Knight pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::moves::move_description::ChessMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    for (row_delta, col_delta) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(row_delta, col_delta) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(ChessMove::quiet(from, to)),
            Some(target) if target.color != side => out.push(ChessMove::capture(from, to)),
            Some(_) => {}
        }
    }
}
