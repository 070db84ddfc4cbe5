use rand::Rng;

use crate::board::Board;
use crate::error::EngineError;
use crate::search::SearchStrategy;
use crate::selector;
use crate::types::{Difficulty, GameOutcome, Mark, Position};
use crate::win_detector;

// The board plus the turn indicator, owned by the caller. X always opens;
// the outcome is derived from the board on demand, never stored.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
}

impl GameState {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self {
            board: Board::new(size)?,
            current_mark: Mark::X,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> GameOutcome {
        win_detector::outcome(&self.board)
    }

    pub fn place(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(EngineError::GameOver);
        }
        self.board.place(row, col, self.current_mark)?;

        if self.outcome() == GameOutcome::InProgress {
            self.current_mark = if self.current_mark == Mark::X {
                Mark::O
            } else {
                Mark::X
            };
        }
        Ok(())
    }

    // Asks the move selector for the current player's move without applying
    // it. The plain variant lets the default policy pick the search mode.
    pub fn choose_computer_move<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(EngineError::GameOver);
        }
        selector::choose_move(&mut self.board, self.current_mark, difficulty, rng)
    }

    pub fn choose_computer_move_with_strategy<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        strategy: SearchStrategy,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(EngineError::GameOver);
        }
        selector::choose_move_with_strategy(
            &mut self.board,
            self.current_mark,
            difficulty,
            strategy,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_opens_and_turns_alternate() {
        let mut state = GameState::new(3).unwrap();
        assert_eq!(state.current_mark(), Mark::X);

        state.place(0, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().mark_at(0, 0), Mark::X);

        state.place(1, 1).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().mark_at(1, 1), Mark::O);
    }

    #[test]
    fn test_win_is_detected_after_a_move() {
        let mut state = GameState::new(3).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.place(row, col).unwrap();
        }
        assert_eq!(state.outcome(), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_no_moves_accepted_after_the_game_ends() {
        let mut state = GameState::new(3).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.place(row, col).unwrap();
        }
        assert_eq!(state.place(2, 2), Err(EngineError::GameOver));
    }

    #[test]
    fn test_occupied_cell_keeps_the_turn() {
        let mut state = GameState::new(3).unwrap();
        state.place(0, 0).unwrap();
        assert_eq!(
            state.place(0, 0),
            Err(EngineError::OccupiedCell { row: 0, col: 0 })
        );
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_draw_on_a_filled_board() {
        let mut state = GameState::new(3).unwrap();
        // X O X / X O O / O X X with X moving first.
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            state.place(row, col).unwrap();
        }
        assert_eq!(state.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_computer_move_is_legal_and_leaves_board_untouched() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(11);
        let mut state = GameState::new(3).unwrap();
        state.place(0, 0).unwrap();

        let before = state.board().clone();
        let pos = state
            .choose_computer_move(Difficulty::Expert, &mut rng)
            .unwrap();
        assert!(state.board().is_empty(pos.row, pos.col));
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_explicit_depth_limit_overrides_the_default_policy() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new(4).unwrap();

        // A single static ply lands on the first diagonal cell, regardless
        // of what the default policy would have searched.
        let pos = state
            .choose_computer_move_with_strategy(
                Difficulty::Expert,
                SearchStrategy::DepthLimited { max_depth: 1 },
                &mut rng,
            )
            .unwrap();
        assert_eq!(pos, Position::new(0, 0));
    }
}
