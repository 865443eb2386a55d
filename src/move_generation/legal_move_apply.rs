//! Move execution and reversal with full auxiliary-state bookkeeping.
//!
//! `make_move`/`unmake_move` are the raw primitives: they trust their input
//! and maintain every piece of auxiliary state (captures, castling rook
//! relocation, promotion substitution, en-passant target refresh, rights
//! invalidation, clocks, turn flip) so that a make followed by its unmake
//! restores the board exactly. `try_apply_move` is the validated entry
//! point used by callers holding untrusted moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};
use crate::game_state::move_record::MoveRecord;
use crate::moves::king_moves::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::moves::move_description::ChessMove;

/// Execute `mv` without legality checking and return the record that undoes
/// it. Returns `None` (board untouched) when the source square is empty.
pub fn make_move(board: &mut Board, mv: &ChessMove) -> Option<MoveRecord> {
    let moved_piece = board.piece_at(mv.from)?;
    let side = moved_piece.color;

    let captured = if mv.is_en_passant {
        let victim_square = Coord::new(mv.from.row, mv.to.col);
        board
            .piece_at(victim_square)
            .map(|piece| (victim_square, piece))
    } else {
        board.piece_at(mv.to).map(|piece| (mv.to, piece))
    };

    let record = MoveRecord {
        mv: *mv,
        moved_piece,
        captured,
        prev_castling_rights: board.castling_rights,
        prev_en_passant_target: board.en_passant_target,
        prev_halfmove_clock: board.halfmove_clock,
    };

    if mv.is_en_passant {
        board.clear_square(Coord::new(mv.from.row, mv.to.col));
    }

    if mv.is_castling {
        let (rook_from, rook_to) = castling_rook_path(side, mv.to);
        board.relocate_piece(rook_from, rook_to);
    }

    board.relocate_piece(mv.from, mv.to);

    if let Some(kind) = mv.promotion {
        board.set_piece(
            mv.to,
            Piece {
                kind,
                color: side,
                has_moved: true,
            },
        );
    }

    board.en_passant_target = double_step_target(&moved_piece, mv);

    refresh_castling_rights(board, &record, side);

    if moved_piece.kind == PieceKind::Pawn || record.captured.is_some() {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }
    if side == Color::Dark {
        board.fullmove_number = board.fullmove_number.saturating_add(1);
    }
    board.side_to_move = side.opposite();

    Some(record)
}

/// Restore the board exactly as it stood before the recorded move.
pub fn unmake_move(board: &mut Board, record: MoveRecord) {
    let mv = record.mv;
    let side = record.moved_piece.color;

    board.side_to_move = side;
    if side == Color::Dark {
        board.fullmove_number = board.fullmove_number.saturating_sub(1);
    }
    board.halfmove_clock = record.prev_halfmove_clock;
    board.castling_rights = record.prev_castling_rights;
    board.en_passant_target = record.prev_en_passant_target;

    board.clear_square(mv.to);
    board.set_piece(mv.from, record.moved_piece);

    if mv.is_castling {
        // Castling legality required an unmoved rook, so its prior state is known.
        let (rook_from, rook_to) = castling_rook_path(side, mv.to);
        board.clear_square(rook_to);
        board.set_piece(rook_from, Piece::new(PieceKind::Rook, side));
    } else if let Some((victim_square, victim)) = record.captured {
        // En-passant victims return to their own square, which is not the
        // move's destination; ordinary captures return to the destination.
        board.set_piece(victim_square, victim);
    }
}

/// Validate `mv` against the legal moves available from its source square,
/// then execute the matching generated move (whose flags are canonical).
/// Returns `None` with the board untouched when the move is illegal.
pub fn try_apply_move(board: &mut Board, mv: &ChessMove) -> Option<MoveRecord> {
    use crate::move_generation::legal_move_generator::legal_moves_from;

    let piece = board.piece_at(mv.from)?;
    if piece.color != board.side_to_move {
        return None;
    }

    let matched = legal_moves_from(board, mv.from)
        .into_iter()
        .find(|candidate| candidate.same_action(mv))?;

    make_move(board, &matched)
}

fn castling_rook_path(side: Color, king_to: Coord) -> (Coord, Coord) {
    let home_row = side.home_row();
    if king_to.col == 6 {
        (
            Coord::new(home_row, KINGSIDE_ROOK_COL),
            Coord::new(home_row, 5),
        )
    } else {
        (
            Coord::new(home_row, QUEENSIDE_ROOK_COL),
            Coord::new(home_row, 3),
        )
    }
}

fn double_step_target(moved_piece: &Piece, mv: &ChessMove) -> Option<Coord> {
    if moved_piece.kind != PieceKind::Pawn {
        return None;
    }
    if mv.from.row.abs_diff(mv.to.row) != 2 {
        return None;
    }
    Some(Coord::new((mv.from.row + mv.to.row) / 2, mv.from.col))
}

/// Rights are invalidated by a king move, a rook move off its home square,
/// or a rook captured on its home square.
fn refresh_castling_rights(board: &mut Board, record: &MoveRecord, side: Color) {
    let mv = record.mv;

    match record.moved_piece.kind {
        PieceKind::King => board.castling_rights.revoke_both(side),
        PieceKind::Rook => {
            let home_row = side.home_row();
            if mv.from == Coord::new(home_row, KINGSIDE_ROOK_COL) {
                board.castling_rights.revoke_kingside(side);
            } else if mv.from == Coord::new(home_row, QUEENSIDE_ROOK_COL) {
                board.castling_rights.revoke_queenside(side);
            }
        }
        _ => {}
    }

    if let Some((victim_square, victim)) = record.captured {
        if victim.kind == PieceKind::Rook {
            let victim_home = victim.color.home_row();
            if victim_square == Coord::new(victim_home, KINGSIDE_ROOK_COL) {
                board.castling_rights.revoke_kingside(victim.color);
            } else if victim_square == Coord::new(victim_home, QUEENSIDE_ROOK_COL) {
                board.castling_rights.revoke_queenside(victim.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{make_move, try_apply_move, unmake_move};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, PieceKind};
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::moves::move_description::ChessMove;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn double_step_sets_en_passant_target_for_one_ply() {
        let mut board = Board::new_game();

        let double = ChessMove::quiet(Coord::new(1, 4), Coord::new(3, 4));
        try_apply_move(&mut board, &double).expect("e2e4 should be legal");
        assert_eq!(board.en_passant_target, Some(Coord::new(2, 4)));

        let reply = ChessMove::quiet(Coord::new(6, 0), Coord::new(5, 0));
        try_apply_move(&mut board, &reply).expect("a7a6 should be legal");
        assert_eq!(board.en_passant_target, None);
    }

    #[test]
    fn en_passant_capture_is_available_exactly_one_ply() {
        let mut board =
            Board::from_fen("4k3/5p2/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");

        let double = ChessMove::quiet(Coord::new(6, 5), Coord::new(4, 5));
        try_apply_move(&mut board, &double).expect("f7f5 should be legal");

        let capture_now = all_legal_moves(&board, Color::Light)
            .into_iter()
            .any(|m| m.is_en_passant && m.to == Coord::new(5, 5));
        assert!(capture_now, "en-passant must be offered on the reply ply");

        // Decline with king moves on both sides; the window closes.
        let decline = ChessMove::quiet(Coord::new(0, 4), Coord::new(0, 3));
        try_apply_move(&mut board, &decline).expect("king move should be legal");
        let shuffle = ChessMove::quiet(Coord::new(7, 4), Coord::new(7, 3));
        try_apply_move(&mut board, &shuffle).expect("king move should be legal");

        let capture_later = all_legal_moves(&board, Color::Light)
            .into_iter()
            .any(|m| m.is_en_passant);
        assert!(!capture_later, "en-passant window must close after one ply");
    }

    #[test]
    fn castle_moves_both_king_and_rook_and_round_trips() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = board.clone();

        let castle = ChessMove::castle(Coord::new(0, 4), Coord::new(0, 6));
        let record = make_move(&mut board, &castle).expect("castle should execute");

        assert_eq!(
            board.piece_at(Coord::new(0, 6)).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.piece_at(Coord::new(0, 5)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(board.piece_at(Coord::new(0, 7)), None);
        assert!(!board.castling_rights.kingside(Color::Light));
        assert!(!board.castling_rights.queenside(Color::Light));

        unmake_move(&mut board, record);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_round_trip_restores_victim_to_its_own_square() {
        let mut board =
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let before = board.clone();

        let capture = ChessMove::en_passant(Coord::new(4, 4), Coord::new(5, 3));
        let record = make_move(&mut board, &capture).expect("capture should execute");

        assert_eq!(board.piece_at(Coord::new(4, 3)), None, "victim removed");
        assert_eq!(
            board.piece_at(Coord::new(5, 3)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );

        unmake_move(&mut board, record);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_round_trip_restores_the_pawn() {
        let mut board =
            Board::from_fen("3rk3/2P5/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = board.clone();

        let promo =
            ChessMove::promoting(Coord::new(6, 2), Coord::new(7, 3), PieceKind::Queen, true);
        let record = make_move(&mut board, &promo).expect("promotion should execute");

        assert_eq!(
            board.piece_at(Coord::new(7, 3)).map(|p| p.kind),
            Some(PieceKind::Queen)
        );

        unmake_move(&mut board, record);
        assert_eq!(board, before);
    }

    #[test]
    fn rook_capture_on_home_square_revokes_opponent_rights() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        let grab = ChessMove::capture(Coord::new(0, 0), Coord::new(7, 0));
        try_apply_move(&mut board, &grab).expect("a1a8 should be legal");

        assert!(!board.castling_rights.queenside(Color::Dark));
        assert!(board.castling_rights.kingside(Color::Dark));
        assert!(!board.castling_rights.queenside(Color::Light));
        assert!(board.castling_rights.kingside(Color::Light));
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let mut board = Board::new_game();
        let fen_before = board.get_fen();

        let hop = ChessMove::quiet(Coord::new(0, 0), Coord::new(4, 0));
        assert!(try_apply_move(&mut board, &hop).is_none());

        let wrong_side = ChessMove::quiet(Coord::new(6, 4), Coord::new(5, 4));
        assert!(try_apply_move(&mut board, &wrong_side).is_none());

        assert_eq!(board.get_fen(), fen_before);
    }

    #[test]
    fn random_legal_walks_round_trip_exactly() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for game in 0..4u64 {
            let mut board = Board::new_game();
            for _ in 0..60 {
                let side = board.side_to_move;
                let moves = all_legal_moves(&board, side);
                let Some(mv) = moves.as_slice().choose(&mut rng).copied() else {
                    break;
                };

                let before = board.clone();
                let record = make_move(&mut board, &mv)
                    .unwrap_or_else(|| panic!("legal move should execute in game {game}"));
                unmake_move(&mut board, record);
                assert_eq!(board, before, "round trip must be exact in game {game}");

                make_move(&mut board, &mv).expect("replay should execute");
            }
        }
    }
}
