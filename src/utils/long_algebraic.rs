//! Coordinate-pair move notation (long algebraic without piece letters).
//!
//! The wire format: source square, destination square, optional promotion
//! letter — "e2e4", "e7e8q". This is the convention used to relay moves
//! between peers and to exchange moves with a delegated external engine.

use crate::game_state::chess_types::{Coord, PieceKind};
use crate::moves::move_description::ChessMove;
use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};

/// Render a move in coordinate notation.
pub fn coordinate_notation(mv: &ChessMove) -> Result<String, String> {
    let mut out = String::new();
    out.push_str(&coord_to_algebraic(mv.from)?);
    out.push_str(&coord_to_algebraic(mv.to)?);
    if let Some(kind) = mv.promotion {
        out.push(promotion_to_char(kind)?);
    }
    Ok(out)
}

/// Parse four- or five-character coordinate text into its components.
/// Legality is not judged here; callers match the result against a
/// generated legal-move list.
pub fn parse_coordinate_move(text: &str) -> Result<(Coord, Coord, Option<PieceKind>), String> {
    if !(text.len() == 4 || text.len() == 5) || !text.is_ascii() {
        return Err(format!("Invalid coordinate move: {text}"));
    }

    let from = algebraic_to_coord(&text[0..2])?;
    let to = algebraic_to_coord(&text[2..4])?;
    let promotion = if text.len() == 5 {
        let ch = text.as_bytes()[4] as char;
        Some(char_to_promotion(ch)?)
    } else {
        None
    };

    Ok((from, to, promotion))
}

pub fn promotion_to_char(kind: PieceKind) -> Result<char, String> {
    match kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(format!("Invalid promotion piece: {kind:?}")),
    }
}

pub fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(format!("Invalid promotion piece character: {ch}")),
    }
}
