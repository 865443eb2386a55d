//! ASCII board rendering for diagnostics and harness output.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};

/// Render the board as an 8x8 diagram with rank and file labels, light
/// pieces uppercase, dark pieces lowercase, and a side-to-move footer.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');
        for col in 0..8u8 {
            let cell = match board.piece_at(Coord::new(row, col)) {
                Some(piece) => piece_char(&piece),
                None => '.',
            };
            out.push(cell);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match board.side_to_move {
        Color::Light => "light to move\n",
        Color::Dark => "dark to move\n",
    });

    out
}

fn piece_char(piece: &Piece) -> char {
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
