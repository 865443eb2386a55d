//! Board-to-FEN generation.
//!
//! Produces the six-field position export consumed by delegated engines and
//! by tests; `parse_fen(generate_fen(board))` must reproduce the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Coord, Piece, PieceKind};
use crate::utils::algebraic::coord_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let layout = generate_board_field(board);
    let side_to_move = match board.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(board.castling_rights);
    let en_passant = generate_en_passant_field(board.en_passant_target);

    format!(
        "{} {} {} {} {} {}",
        layout, side_to_move, castling, en_passant, board.halfmove_clock, board.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match board.piece_at(Coord::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(&piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: &Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(target: Option<Coord>) -> String {
    let Some(target) = target else {
        return "-".to_owned();
    };
    coord_to_algebraic(target).unwrap_or_else(|_| "-".to_owned())
}
