//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search explores clones only — the canonical board passed in is never
//! mutated. Each root candidate is scored on its own clone with a fresh
//! full window, so every root move carries its exact minimax value; the
//! final choice is drawn uniformly at random among the tying maxima through
//! the caller's RNG. An optional wall-clock budget aborts deep recursion
//! early and returns the best move found so far.

use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_description::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// Base score of a delivered mate; remaining depth is added on top so the
/// search prefers the faster mate.
pub const MATE_SCORE: i32 = 100_000;
const SCORE_INFINITY: i32 = 1_000_000;

/// How often the wall-clock deadline is polled, in visited nodes.
const DEADLINE_POLL_MASK: u64 = 0x1FF;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
    pub movetime: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            movetime: None,
        }
    }
}

impl SearchConfig {
    pub const fn fixed_depth(depth: u8) -> Self {
        Self {
            depth,
            movetime: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOutcome {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub nodes: u64,
    pub aborted: bool,
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    perspective: Color,
    deadline: Option<Instant>,
    use_pruning: bool,
    nodes: u64,
    aborted: bool,
}

/// Choose a move for `side` under the configured budget.
pub fn find_best_move<S: BoardScorer, R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> SearchOutcome {
    let (scored, nodes, aborted) = score_root_moves(board, side, scorer, config, true);

    if scored.is_empty() {
        let best_score = if is_king_in_check(board, side) {
            -(MATE_SCORE + i32::from(config.depth))
        } else {
            0
        };
        return SearchOutcome {
            best_move: None,
            best_score,
            nodes,
            aborted,
        };
    }

    let best_score = scored
        .iter()
        .map(|(_, score)| *score)
        .max()
        .unwrap_or(-SCORE_INFINITY);
    let ties: Vec<ChessMove> = scored
        .iter()
        .filter(|(_, score)| *score == best_score)
        .map(|(mv, _)| *mv)
        .collect();

    SearchOutcome {
        best_move: ties.as_slice().choose(rng).copied(),
        best_score,
        nodes,
        aborted,
    }
}

/// Exact minimax score for every root candidate of `side`. Promotions are
/// normalized to the queen before simulation. Also the test seam for the
/// pruned-vs-unpruned equivalence property.
pub fn score_root_moves<S: BoardScorer>(
    board: &Board,
    side: Color,
    scorer: &S,
    config: SearchConfig,
    use_pruning: bool,
) -> (Vec<(ChessMove, i32)>, u64, bool) {
    let mut candidates = all_legal_moves(board, side);
    normalize_promotions(&mut candidates);
    order_moves(board, &mut candidates);

    let mut ctx = SearchContext {
        scorer,
        perspective: side,
        deadline: config.movetime.map(|budget| Instant::now() + budget),
        use_pruning,
        nodes: 0,
        aborted: false,
    };

    let mut scored = Vec::with_capacity(candidates.len());
    for mv in candidates {
        let mut probe = board.clone();
        let Some(record) = make_move(&mut probe, &mv) else {
            continue;
        };
        let score = minimax(
            &mut probe,
            config.depth.saturating_sub(1),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            false,
            &mut ctx,
        );
        unmake_move(&mut probe, record);

        if ctx.aborted {
            // A partial subtree score is not comparable; fall back to the
            // best fully-scored candidate, or the first in move order.
            if scored.is_empty() {
                scored.push((mv, score));
            }
            break;
        }
        scored.push((mv, score));
    }

    (scored, ctx.nodes, ctx.aborted)
}

fn minimax<S: BoardScorer>(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_, S>,
) -> i32 {
    ctx.nodes += 1;

    if let Some(deadline) = ctx.deadline {
        if ctx.nodes & DEADLINE_POLL_MASK == 0 && Instant::now() >= deadline {
            ctx.aborted = true;
        }
    }
    if ctx.aborted {
        return ctx.scorer.score(board, ctx.perspective);
    }

    let mover = if maximizing {
        ctx.perspective
    } else {
        ctx.perspective.opposite()
    };

    let mut moves = all_legal_moves(board, mover);
    if moves.is_empty() {
        if is_king_in_check(board, mover) {
            // Mate against the mover; deeper-remaining mates score higher
            // so the faster mate wins.
            let mate = MATE_SCORE + i32::from(depth);
            return if maximizing { -mate } else { mate };
        }
        return 0;
    }

    if depth == 0 {
        return ctx.scorer.score(board, ctx.perspective);
    }

    normalize_promotions(&mut moves);
    order_moves(board, &mut moves);

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let Some(record) = make_move(board, &mv) else {
                continue;
            };
            let score = minimax(board, depth - 1, alpha, beta, false, ctx);
            unmake_move(board, record);

            best = best.max(score);
            alpha = alpha.max(best);
            if ctx.use_pruning && alpha >= beta {
                break;
            }
            if ctx.aborted {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            let Some(record) = make_move(board, &mv) else {
                continue;
            };
            let score = minimax(board, depth - 1, alpha, beta, true, ctx);
            unmake_move(board, record);

            best = best.min(score);
            beta = beta.min(best);
            if ctx.use_pruning && alpha >= beta {
                break;
            }
            if ctx.aborted {
                break;
            }
        }
        best
    }
}

/// The search never explores minor-piece promotions: keep the queen and
/// drop the rook/bishop/knight variants of each promotion.
fn normalize_promotions(moves: &mut Vec<ChessMove>) {
    moves.retain(|mv| match mv.promotion {
        None => true,
        Some(kind) => kind == PieceKind::Queen,
    });
}

/// Cheap capture/promotion ordering: likely material gain first, to improve
/// pruning yield.
fn order_moves(board: &Board, moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| -potential_gain(board, mv));
}

fn potential_gain(board: &Board, mv: &ChessMove) -> i32 {
    let mut gain = 0i32;
    if mv.is_en_passant {
        gain += MaterialScorer::piece_value(PieceKind::Pawn);
    } else if mv.is_capture {
        if let Some(victim) = board.piece_at(mv.to) {
            gain += MaterialScorer::piece_value(victim.kind);
        }
    }
    if let Some(kind) = mv.promotion {
        gain += MaterialScorer::piece_value(kind) - MaterialScorer::piece_value(PieceKind::Pawn);
    }
    gain
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{find_best_move, score_root_moves, SearchConfig, MATE_SCORE};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, PieceKind};
    use crate::move_generation::game_status::{game_status, GameStatus};
    use crate::move_generation::legal_move_apply::make_move;
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::search::board_scoring::{MaterialScorer, PieceSquareScorer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn search_returns_a_legal_move_from_the_start_position() {
        let board = Board::new_game();
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = find_best_move(
            &board,
            Color::Light,
            &PieceSquareScorer,
            SearchConfig::fixed_depth(2),
            &mut rng,
        );

        let best = outcome.best_move.expect("start position has moves");
        assert!(all_legal_moves(&board, Color::Light).contains(&best));
        assert!(!outcome.aborted);
    }

    #[test]
    fn search_takes_a_hanging_queen() {
        let board =
            Board::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = find_best_move(
            &board,
            Color::Light,
            &MaterialScorer,
            SearchConfig::fixed_depth(1),
            &mut rng,
        );

        let best = outcome.best_move.expect("captures exist");
        assert_eq!(best.to, Coord::new(1, 4));
        assert!(best.is_capture);
    }

    #[test]
    fn search_finds_mate_in_one() {
        let board =
            Board::from_fen("6k1/5Q2/6K1/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = find_best_move(
            &board,
            Color::Light,
            &PieceSquareScorer,
            SearchConfig::fixed_depth(2),
            &mut rng,
        );

        let best = outcome.best_move.expect("mating moves exist");
        let mut after = board.clone();
        make_move(&mut after, &best).expect("best move should execute");
        assert_eq!(game_status(&after, Color::Dark), GameStatus::Checkmate);
        assert!(outcome.best_score > MATE_SCORE);
    }

    #[test]
    fn search_only_considers_queen_promotions() {
        let board =
            Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let (scored, _, _) = score_root_moves(
            &board,
            Color::Light,
            &MaterialScorer,
            SearchConfig::fixed_depth(1),
            true,
        );

        let promotions: Vec<_> = scored
            .iter()
            .filter(|(mv, _)| mv.promotion.is_some())
            .collect();
        assert_eq!(promotions.len(), 1);
        assert_eq!(promotions[0].0.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn pruned_and_unpruned_root_scores_are_identical() {
        let positions = [
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1",
        ];
        for fen in positions {
            let board = Board::from_fen(fen).expect("FEN should parse");
            let config = SearchConfig::fixed_depth(3);

            let (pruned, _, _) =
                score_root_moves(&board, Color::Light, &MaterialScorer, config, true);
            let (unpruned, _, _) =
                score_root_moves(&board, Color::Light, &MaterialScorer, config, false);

            assert_eq!(pruned, unpruned, "pruning must not change scores ({fen})");
        }
    }

    #[test]
    fn tie_break_is_deterministic_under_a_seeded_rng() {
        let board = Board::new_game();
        let config = SearchConfig::fixed_depth(1);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);
        let first = find_best_move(&board, Color::Light, &MaterialScorer, config, &mut first_rng);
        let second =
            find_best_move(&board, Color::Light, &MaterialScorer, config, &mut second_rng);

        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn stalemate_scores_zero_and_mate_scores_dominate() {
        let stalemated =
            Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = find_best_move(
            &stalemated,
            Color::Dark,
            &MaterialScorer,
            SearchConfig::fixed_depth(2),
            &mut rng,
        );
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.best_score, 0);
    }

    #[test]
    fn exhausted_time_budget_aborts_with_a_legal_move() {
        let board = Board::new_game();
        let mut rng = StdRng::seed_from_u64(9);
        let config = SearchConfig {
            depth: 6,
            movetime: Some(Duration::ZERO),
        };

        let outcome = find_best_move(&board, Color::Light, &PieceSquareScorer, config, &mut rng);

        assert!(outcome.aborted);
        let best = outcome.best_move.expect("abort still yields a move");
        assert!(all_legal_moves(&board, Color::Light).contains(&best));
    }

    #[test]
    fn search_never_mutates_the_canonical_board() {
        let board =
            Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .expect("FEN should parse");
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let _ = find_best_move(
            &board,
            Color::Light,
            &PieceSquareScorer,
            SearchConfig::fixed_depth(2),
            &mut rng,
        );

        assert_eq!(board, before);
    }

    #[test]
    fn checkmated_searcher_reports_a_mate_score_against_itself() {
        let board =
            Board::from_fen("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(2);
        let outcome = find_best_move(
            &board,
            Color::Dark,
            &MaterialScorer,
            SearchConfig::fixed_depth(2),
            &mut rng,
        );
        assert_eq!(outcome.best_move, None);
        assert!(outcome.best_score <= -MATE_SCORE);
    }
}
