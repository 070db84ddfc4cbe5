use crate::board::Board;
use crate::error::EngineError;
use crate::evaluator::evaluate;
use crate::types::{Mark, Position};
use crate::win_detector;

pub const DEFAULT_DEPTH_LIMIT: usize = 5;

// Largest number of empty cells that exact search explores in full.
const EXACT_SEARCH_MAX_EMPTY: usize = 9;

// X maximizes and O minimizes throughout the search.
const MAXIMIZER: Mark = Mark::X;

// Exact mode scores only terminal positions (+1 X win, -1 O win, 0 draw);
// depth-limited mode scores unresolved positions with the static evaluator.
// Which variant runs is the caller's policy decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    Exact,
    DepthLimited { max_depth: usize },
}

impl SearchStrategy {
    // Default policy: exact while the remaining tree is small enough,
    // otherwise a depth cap that shrinks on huge boards.
    pub fn for_board(board: &Board) -> Self {
        let empty = board.empty_count();
        if empty <= EXACT_SEARCH_MAX_EMPTY {
            SearchStrategy::Exact
        } else {
            SearchStrategy::DepthLimited {
                max_depth: depth_limit_for(empty),
            }
        }
    }
}

fn depth_limit_for(empty_cells: usize) -> usize {
    if empty_cells <= 16 {
        DEFAULT_DEPTH_LIMIT
    } else if empty_cells <= 49 {
        2
    } else {
        1
    }
}

// Explores available cells in row-major order; on equal scores the first
// candidate found wins. The board is mutated in place during exploration and
// is bit-identical to its input state when the call returns.
pub fn find_best_move(
    board: &mut Board,
    mover: Mark,
    strategy: SearchStrategy,
) -> Result<Position, EngineError> {
    debug_assert!(mover != Mark::Empty);
    let opponent = mover.opponent().unwrap();
    let maximizing = mover == MAXIMIZER;
    let n = board.size();

    let mut best_move: Option<Position> = None;
    let mut best_score = if maximizing { i64::MIN } else { i64::MAX };

    for row in 0..n {
        for col in 0..n {
            if !board.is_empty(row, col) {
                continue;
            }
            let pos = Position::new(row, col);
            let score = board.scoped_place(pos, mover, |board| {
                minimax(board, opponent, strategy, 1)
            });
            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improved {
                best_score = score;
                best_move = Some(pos);
            }
        }
    }

    best_move.ok_or(EngineError::NoAvailableMove)
}

fn minimax(board: &mut Board, to_move: Mark, strategy: SearchStrategy, depth: usize) -> i64 {
    match strategy {
        SearchStrategy::Exact => {
            if let Some(winner) = win_detector::winner(board) {
                return if winner == MAXIMIZER { 1 } else { -1 };
            }
            if board.is_full() {
                return 0;
            }
        }
        SearchStrategy::DepthLimited { max_depth } => {
            if win_detector::winner(board).is_some()
                || board.is_full()
                || depth >= max_depth
            {
                return evaluate(board, MAXIMIZER);
            }
        }
    }

    let opponent = to_move.opponent().unwrap();
    let maximizing = to_move == MAXIMIZER;
    let n = board.size();
    let mut best = if maximizing { i64::MIN } else { i64::MAX };

    for row in 0..n {
        for col in 0..n {
            if !board.is_empty(row, col) {
                continue;
            }
            let score = board.scoped_place(Position::new(row, col), to_move, |board| {
                minimax(board, opponent, strategy, depth + 1)
            });
            if maximizing {
                best = best.max(score);
            } else {
                best = best.min(score);
            }
        }
    }

    best
}
