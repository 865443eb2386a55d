//! Validation of moves proposed by a delegated external engine.
//!
//! Top difficulty tiers export the position as FEN and receive a reply in
//! four- or five-character coordinate notation. A reply from an external
//! source is never applied unchecked: it must parse and match an entry in
//! the legal-move list, otherwise play degrades to a uniformly random legal
//! move instead of propagating a failure.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_description::ChessMove;
use crate::utils::long_algebraic::parse_coordinate_move;

/// Outcome of resolving an external reply against the legal-move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyResolution {
    Accepted,
    RejectedFallback,
}

/// Resolve `reply` for `side`. Returns the validated move (or a random
/// legal fallback) and how it was obtained; `None` only when the side has
/// no legal move at all.
pub fn resolve_external_reply<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    reply: &str,
    rng: &mut R,
) -> Option<(ChessMove, ReplyResolution)> {
    let legal_moves = all_legal_moves(board, side);
    if legal_moves.is_empty() {
        return None;
    }

    if let Ok((from, to, promotion)) = parse_coordinate_move(reply.trim()) {
        let matched = legal_moves
            .iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .copied();
        if let Some(mv) = matched {
            return Some((mv, ReplyResolution::Accepted));
        }
    }

    legal_moves
        .as_slice()
        .choose(rng)
        .copied()
        .map(|mv| (mv, ReplyResolution::RejectedFallback))
}

#[cfg(test)]
mod tests {
    use super::{resolve_external_reply, ReplyResolution};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, PieceKind};
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn well_formed_legal_reply_is_accepted_verbatim() {
        let board = Board::new_game();
        let mut rng = StdRng::seed_from_u64(0);

        let (mv, resolution) =
            resolve_external_reply(&board, Color::Light, "e2e4", &mut rng)
                .expect("start position has moves");

        assert_eq!(resolution, ReplyResolution::Accepted);
        assert_eq!(mv.from, Coord::new(1, 4));
        assert_eq!(mv.to, Coord::new(3, 4));
    }

    #[test]
    fn promotion_reply_matches_the_promotion_kind() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(0);

        let (mv, resolution) =
            resolve_external_reply(&board, Color::Light, "a7a8n", &mut rng)
                .expect("promotions exist");

        assert_eq!(resolution, ReplyResolution::Accepted);
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn unparseable_reply_falls_back_to_a_random_legal_move() {
        let board = Board::new_game();
        let mut rng = StdRng::seed_from_u64(17);

        let (mv, resolution) =
            resolve_external_reply(&board, Color::Light, "castle long!", &mut rng)
                .expect("start position has moves");

        assert_eq!(resolution, ReplyResolution::RejectedFallback);
        assert!(all_legal_moves(&board, Color::Light).contains(&mv));
    }

    #[test]
    fn well_formed_but_illegal_reply_falls_back() {
        let board = Board::new_game();
        let mut rng = StdRng::seed_from_u64(17);

        // Syntactically fine, but no rook can reach a5 from the start.
        let (mv, resolution) =
            resolve_external_reply(&board, Color::Light, "a1a5", &mut rng)
                .expect("start position has moves");

        assert_eq!(resolution, ReplyResolution::RejectedFallback);
        assert!(all_legal_moves(&board, Color::Light).contains(&mv));
    }

    #[test]
    fn terminal_position_resolves_to_none() {
        let board =
            Board::from_fen("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(0);
        assert!(resolve_external_reply(&board, Color::Dark, "g8f8", &mut rng).is_none());
    }
}
