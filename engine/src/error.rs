use thiserror::Error;

// Recoverable failures surfaced to the caller; the engine never retries or
// corrects a bad input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already marked")]
    OccupiedCell { row: usize, col: usize },

    #[error("no available move: the board is full")]
    NoAvailableMove,

    #[error("board size must be at least 3, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("the game is already over")]
    GameOver,
}
