//! King pseudo-legal move generation, castling included.
//!
//! Castling carries the full precondition list: an unmoved king standing on
//! its home square, the matching rights flag, an unmoved rook on its home
//! square, empty squares between them, a king not currently in check, and a
//! transit/destination pair the opponent does not attack.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};
use crate::move_generation::attack_checks::is_square_attacked;
use crate::moves::move_description::ChessMove;
use crate::moves::sliding::ALL_DIRECTIONS;

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

pub fn generate_king_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    for (row_delta, col_delta) in ALL_DIRECTIONS {
        let Some(to) = from.offset(row_delta, col_delta) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(ChessMove::quiet(from, to)),
            Some(target) if target.color != side => out.push(ChessMove::capture(from, to)),
            Some(_) => {}
        }
    }

    generate_castling_moves(board, from, side, out);
}

fn generate_castling_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    let home_row = side.home_row();
    if from != Coord::new(home_row, KING_HOME_COL) {
        return;
    }

    let Some(king) = board.piece_at(from) else {
        return;
    };
    if king.has_moved || is_square_attacked(board, from, side.opposite()) {
        return;
    }

    if board.castling_rights.kingside(side) {
        let between = [Coord::new(home_row, 5), Coord::new(home_row, 6)];
        let safe = [Coord::new(home_row, 5), Coord::new(home_row, 6)];
        if castling_path_is_clear(board, side, KINGSIDE_ROOK_COL, &between, &safe) {
            out.push(ChessMove::castle(from, Coord::new(home_row, 6)));
        }
    }

    if board.castling_rights.queenside(side) {
        let between = [
            Coord::new(home_row, 1),
            Coord::new(home_row, 2),
            Coord::new(home_row, 3),
        ];
        // The b-file square must be empty but may be attacked; only the
        // king's transit and destination need to be safe.
        let safe = [Coord::new(home_row, 3), Coord::new(home_row, 2)];
        if castling_path_is_clear(board, side, QUEENSIDE_ROOK_COL, &between, &safe) {
            out.push(ChessMove::castle(from, Coord::new(home_row, 2)));
        }
    }
}

fn castling_path_is_clear(
    board: &Board,
    side: Color,
    rook_col: u8,
    between: &[Coord],
    safe: &[Coord],
) -> bool {
    let rook_square = Coord::new(side.home_row(), rook_col);
    let rook_ok = matches!(
        board.piece_at(rook_square),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == side && !piece.has_moved
    );
    if !rook_ok {
        return false;
    }

    if between.iter().any(|&square| board.piece_at(square).is_some()) {
        return false;
    }

    let enemy = side.opposite();
    !safe
        .iter()
        .any(|&square| is_square_attacked(board, square, enemy))
}
