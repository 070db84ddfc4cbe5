use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::board::Board;
use crate::error::EngineError;
use crate::search::{self, SearchStrategy};
use crate::types::{Difficulty, Mark, Position};

// A uniform percentage roll under the difficulty's threshold delegates to
// search; otherwise the move is picked uniformly at random. Difficulty gates
// how often search runs, never how deep it goes.
pub fn choose_move<R: Rng + ?Sized>(
    board: &mut Board,
    mover: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, EngineError> {
    let strategy = SearchStrategy::for_board(board);
    choose_move_with_strategy(board, mover, difficulty, strategy, rng)
}

pub fn choose_move_with_strategy<R: Rng + ?Sized>(
    board: &mut Board,
    mover: Mark,
    difficulty: Difficulty,
    strategy: SearchStrategy,
    rng: &mut R,
) -> Result<Position, EngineError> {
    let moves: Vec<Position> = board.available_moves().collect();
    if moves.is_empty() {
        return Err(EngineError::NoAvailableMove);
    }

    let roll = rng.random_range(0..100u32);
    if roll < difficulty.search_chance() {
        search::find_best_move(board, mover, strategy)
    } else {
        moves
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoAvailableMove)
    }
}
