//! PGN read/write utilities for game history interchange.
//!
//! Serializes move history and headers to PGN text and parses PGN back into
//! a replayable game record. Movetext uses coordinate notation, so every
//! token maps one-to-one onto the wire move format.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::move_generation::legal_move_apply::try_apply_move;
use crate::moves::move_description::ChessMove;
use crate::utils::long_algebraic::{coordinate_notation, parse_coordinate_move};

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_board: Board,
    pub move_history: Vec<ChessMove>,
    pub final_board: Board,
    pub result: String,
}

pub fn write_pgn(
    initial_board: &Board,
    move_history: &[ChessMove],
    result: &str,
) -> Result<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Gambit Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Light".to_owned());
    headers.insert("Black".to_owned(), "Dark".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_board.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(initial_board, move_history, &headers)
}

pub fn write_pgn_with_headers(
    initial_board: &Board,
    move_history: &[ChessMove],
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut board = initial_board.clone();
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let token = coordinate_notation(mv)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token);
        }
        try_apply_move(&mut board, mv)
            .ok_or_else(|| format!("Illegal move in history at ply {}", ply + 1))?;
    }

    let result = headers
        .get("Result")
        .map(|value| normalize_result(value))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_board = if headers.get("SetUp").map(|value| value.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or("PGN SetUp=1 is present but FEN header is missing")?;
        Board::from_fen(fen)?
    } else {
        Board::new_game()
    };

    let mut board = initial_board.clone();
    let mut move_history = Vec::<ChessMove>::new();
    let mut result = "*".to_owned();

    let movetext = strip_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) || token.starts_with('$') {
            continue;
        }
        if is_result_token(token) {
            result = normalize_result(token).to_owned();
            continue;
        }

        let (from, to, promotion) = parse_coordinate_move(token)?;
        let mv = ChessMove {
            promotion,
            ..ChessMove::quiet(from, to)
        };
        try_apply_move(&mut board, &mv)
            .ok_or_else(|| format!("PGN contains an illegal move: {token}"))?;
        move_history.push(mv);
    }

    Ok(PgnGame {
        headers,
        initial_board,
        move_history,
        final_board: board,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| format!("Malformed PGN header line: {line}"))?;

    let (key, rest) = inner
        .split_once(' ')
        .ok_or_else(|| format!("Malformed PGN header line: {line}"))?;
    let value = rest
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| format!("PGN header value must be quoted: {line}"))?;

    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

fn strip_comments_and_variations(movetext: &str) -> String {
    let mut out = String::with_capacity(movetext.len());
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in movetext.chars() {
        match ch {
            '{' => brace_depth += 1,
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' if brace_depth == 0 => paren_depth += 1,
            ')' if brace_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let trimmed = token.trim_end_matches('.');
    !trimmed.is_empty() && trimmed != token && trimmed.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
