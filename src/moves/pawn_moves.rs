//! Pawn pseudo-legal move generation.
//!
//! Covers single and double advances, diagonal captures, en-passant against
//! the board's stored target square, and promotion fan-out (one move per
//! promotion kind on the back rank).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};
use crate::moves::move_description::ChessMove;

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub fn generate_pawn_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            push_advance(from, one_step, side, out);

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = from.offset(forward * 2, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(ChessMove::quiet(from, two_step));
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, col_delta) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) if target.color != side => push_capture(from, to, side, out),
            Some(_) => {}
            None => {
                if board.en_passant_target == Some(to) && has_en_passant_victim(board, from, to, side)
                {
                    out.push(ChessMove::en_passant(from, to));
                }
            }
        }
    }
}

/// The pawn removed by an en-passant capture sits beside the capturer, on
/// the mover's row rather than the destination square.
fn has_en_passant_victim(board: &Board, from: Coord, to: Coord, side: Color) -> bool {
    let victim_square = Coord::new(from.row, to.col);
    matches!(
        board.piece_at(victim_square),
        Some(piece) if piece.kind == PieceKind::Pawn && piece.color != side
    )
}

fn push_advance(from: Coord, to: Coord, side: Color, out: &mut Vec<ChessMove>) {
    if to.row == side.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promoting(from, to, kind, false));
        }
    } else {
        out.push(ChessMove::quiet(from, to));
    }
}

fn push_capture(from: Coord, to: Coord, side: Color, out: &mut Vec<ChessMove>) {
    if to.row == side.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promoting(from, to, kind, true));
        }
    } else {
        out.push(ChessMove::capture(from, to));
    }
}
