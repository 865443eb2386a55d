//! Conversions between board coordinates and algebraic square names.
//!
//! Converts between human-readable coordinates (for example `e4`) and the
//! internal (row, column) representation reused by FEN, PGN, and the wire
//! interface.

use crate::game_state::chess_types::Coord;

/// Convert an algebraic square name (for example "e4") to a coordinate.
#[inline]
pub fn algebraic_to_coord(square: &str) -> Result<Coord, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Coord::new(rank - b'1', file - b'a'))
}

/// Convert a coordinate to its algebraic square name (for example "e4").
#[inline]
pub fn coord_to_algebraic(at: Coord) -> Result<String, String> {
    if at.row > 7 || at.col > 7 {
        return Err(format!("Coordinate out of bounds: ({}, {})", at.row, at.col));
    }

    let file_char = char::from(b'a' + at.col);
    let rank_char = char::from(b'1' + at.row);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coord, coord_to_algebraic};
    use crate::game_state::chess_types::Coord;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_coord("a1").expect("a1 should parse"), Coord::new(0, 0));
        assert_eq!(algebraic_to_coord("h8").expect("h8 should parse"), Coord::new(7, 7));
        assert_eq!(coord_to_algebraic(Coord::new(0, 0)).expect("should convert"), "a1");
        assert_eq!(coord_to_algebraic(Coord::new(7, 7)).expect("should convert"), "h8");
        assert_eq!(coord_to_algebraic(Coord::new(3, 4)).expect("should convert"), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_coord("e9").is_err());
        assert!(algebraic_to_coord("i4").is_err());
        assert!(algebraic_to_coord("e").is_err());
        assert!(algebraic_to_coord("e44").is_err());
        assert!(coord_to_algebraic(Coord::new(8, 0)).is_err());
    }
}
