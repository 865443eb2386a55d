//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation, then filters out every
//! candidate that would leave the mover's own king attacked. The filter
//! executes each candidate on a probe copy of the board and reverses it,
//! which is the single most expensive routine in the engine — every legal
//! move query pays it once per pseudo-legal candidate.
//!
//! All queries take the side of interest explicitly; nothing here reads or
//! touches `Board::side_to_move`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_description::ChessMove;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Moves obeying the piece's movement shape, own-king safety not yet
/// considered. Empty when the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Coord) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(16);
    pseudo_legal_moves_into(board, from, &mut out);
    out
}

fn pseudo_legal_moves_into(board: &Board, from: Coord, out: &mut Vec<ChessMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_moves(board, from, piece.color, out),
    }
}

/// Legal moves for the piece standing on `from`.
pub fn legal_moves_from(board: &Board, from: Coord) -> Vec<ChessMove> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let pseudo = pseudo_legal_moves(board, from);
    let mut probe = board.clone();
    pseudo
        .into_iter()
        .filter(|mv| leaves_king_safe(&mut probe, mv, piece.color))
        .collect()
}

/// Every legal move available to `side`.
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<ChessMove> {
    let mut pseudo = Vec::with_capacity(64);
    for from in board.occupied_squares(side) {
        pseudo_legal_moves_into(board, from, &mut pseudo);
    }

    let mut probe = board.clone();
    pseudo
        .into_iter()
        .filter(|mv| leaves_king_safe(&mut probe, mv, side))
        .collect()
}

/// Cheaper terminal-state probe: stops at the first legal move found.
pub fn has_any_legal_move(board: &Board, side: Color) -> bool {
    let mut probe = board.clone();
    for from in board.occupied_squares(side) {
        for mv in pseudo_legal_moves(board, from) {
            if leaves_king_safe(&mut probe, &mv, side) {
                return true;
            }
        }
    }
    false
}

/// Simulate, test, revert: execute the candidate on the probe, ask whether
/// the mover's king is attacked, and undo. The probe is byte-identical to
/// the source board before and after.
fn leaves_king_safe(probe: &mut Board, mv: &ChessMove, side: Color) -> bool {
    let Some(record) = make_move(probe, mv) else {
        return false;
    };
    let safe = !is_king_in_check(probe, side);
    unmake_move(probe, record);
    safe
}
