use crate::game_state::chess_types::{CastlingRights, Coord, Piece};
use crate::moves::move_description::ChessMove;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Applying a move and then replaying its record in reverse must reproduce
/// the board exactly, including castling rights and the en-passant target.
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    pub mv: ChessMove,
    /// The mover as it stood before the move, prior has-moved flag included.
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on, which differs from the
    /// move's destination on en-passant captures.
    pub captured: Option<(Coord, Piece)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Coord>,
    pub prev_halfmove_clock: u16,
}
