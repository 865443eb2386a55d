//! Rook pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::moves::move_description::ChessMove;
use crate::moves::sliding::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, side, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};

    #[test]
    fn rook_rays_stop_at_first_blocker_per_direction() {
        let mut board = Board::new_empty();
        let from = Coord::new(0, 0);
        board.set_piece(from, Piece::new(PieceKind::Rook, Color::Light));
        board.set_piece(Coord::new(0, 3), Piece::new(PieceKind::Knight, Color::Light));
        board.set_piece(Coord::new(4, 0), Piece::new(PieceKind::Pawn, Color::Dark));

        let mut out = Vec::new();
        generate_rook_moves(&board, from, Color::Light, &mut out);

        // b1, c1 along the rank; a2..a4 up the file with the capture on a5.
        assert_eq!(out.len(), 6);
        assert!(out.iter().any(|m| m.to == Coord::new(4, 0) && m.is_capture));
    }
}
