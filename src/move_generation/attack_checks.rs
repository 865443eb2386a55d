//! Attack and check primitives.
//!
//! `is_square_attacked` scans outward from the target square: offset tables
//! for knights and kings, the two pawn-attack origins, and blocked rays for
//! the sliders. Both the legality filter and castling safety build on it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::sliding::{ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// True if any piece of `attacker` can reach `target` by its movement rule,
/// respecting blocking for the sliding pieces.
pub fn is_square_attacked(board: &Board, target: Coord, attacker: Color) -> bool {
    // A pawn of `attacker` attacks `target` from one row behind it,
    // relative to the pawn's own direction of travel.
    for col_delta in [-1i8, 1i8] {
        if let Some(origin) = target.offset(-attacker.forward(), col_delta) {
            if holds(board, origin, attacker, PieceKind::Pawn) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in KNIGHT_OFFSETS {
        if let Some(origin) = target.offset(row_delta, col_delta) {
            if holds(board, origin, attacker, PieceKind::Knight) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in ALL_DIRECTIONS {
        if let Some(origin) = target.offset(row_delta, col_delta) {
            if holds(board, origin, attacker, PieceKind::King) {
                return true;
            }
        }
    }

    ray_hits(board, target, attacker, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook)
        || ray_hits(board, target, attacker, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
}

/// Locate the king of `side` and test whether the opponent attacks it.
/// A kingless side counts as in check, so edited positions without a king
/// classify as lost instead of erroring.
pub fn is_king_in_check(board: &Board, side: Color) -> bool {
    let Some(king_square) = board.king_square(side) else {
        return true;
    };
    is_square_attacked(board, king_square, side.opposite())
}

#[inline]
fn holds(board: &Board, at: Coord, color: Color, kind: PieceKind) -> bool {
    matches!(
        board.piece_at(at),
        Some(piece) if piece.color == color && piece.kind == kind
    )
}

/// Walk each ray away from `target`; the first occupied square decides
/// whether a slider of the matching family (or a queen) bears on it.
fn ray_hits(
    board: &Board,
    target: Coord,
    attacker: Color,
    directions: &[(i8, i8)],
    family: PieceKind,
) -> bool {
    for &(row_delta, col_delta) in directions {
        let mut current = target;
        while let Some(next) = current.offset(row_delta, col_delta) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == attacker && (piece.kind == family || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
