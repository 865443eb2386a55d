//! Mailbox board state representation.
//!
//! `Board` is the central model for the engine: 64 optional piece cells plus
//! the auxiliary state move legality depends on (en-passant target, castling
//! rights, clocks, side to move). It stores and mutates; it never judges
//! legality — that is the move-generation layer's job, which keeps the board
//! testable independently of piece-movement rules.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, Color, Coord, Piece, PieceKind};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Coord>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; 64],
            side_to_move: Color::Light,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[at.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, at: Coord, piece: Piece) {
        self.cells[at.index()] = Some(piece);
    }

    #[inline]
    pub fn clear_square(&mut self, at: Coord) {
        self.cells[at.index()] = None;
    }

    /// Copy the source cell to the destination (overwriting anything there),
    /// mark the copy as moved, and empty the source. No legality checking.
    pub fn relocate_piece(&mut self, from: Coord, to: Coord) {
        if let Some(mut piece) = self.cells[from.index()] {
            piece.has_moved = true;
            self.cells[to.index()] = Some(piece);
            self.cells[from.index()] = None;
        }
    }

    /// Scan for the king of `color`. `None` means "not found"; board-editing
    /// call sites may legitimately produce kingless positions.
    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.find_piece(PieceKind::King, color)
    }

    pub fn find_piece(&self, kind: PieceKind, color: Color) -> Option<Coord> {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let at = Coord::new(row, col);
                if let Some(piece) = self.cells[at.index()] {
                    if piece.kind == kind && piece.color == color {
                        return Some(at);
                    }
                }
            }
        }
        None
    }

    /// All coordinates currently holding a piece of `color`.
    pub fn occupied_squares(&self, color: Color) -> Vec<Coord> {
        let mut out = Vec::with_capacity(16);
        for row in 0..8u8 {
            for col in 0..8u8 {
                let at = Coord::new(row, col);
                if let Some(piece) = self.cells[at.index()] {
                    if piece.color == color {
                        out.push(at);
                    }
                }
            }
        }
        out
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
