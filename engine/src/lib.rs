mod board;
mod error;
mod evaluator;
mod game_state;
mod search;
mod selector;
mod types;
mod win_detector;

pub use board::{Board, MIN_BOARD_SIZE};
pub use error::EngineError;
pub use evaluator::evaluate;
pub use game_state::GameState;
pub use search::{DEFAULT_DEPTH_LIMIT, SearchStrategy, find_best_move};
pub use selector::{choose_move, choose_move_with_strategy};
pub use types::{Difficulty, GameOutcome, Mark, Position};
