use crate::board::Board;
use crate::types::{GameOutcome, Mark};

// Only full-length rows, columns, and the two main diagonals count; shorter
// runs never win, and Empty never forms a line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let n = board.size();

    for i in 0..n {
        if (0..n).all(|col| board.mark_at(i, col) == mark) {
            return true;
        }
        if (0..n).all(|row| board.mark_at(row, i) == mark) {
            return true;
        }
    }

    if (0..n).all(|i| board.mark_at(i, i) == mark) {
        return true;
    }
    (0..n).all(|i| board.mark_at(i, n - 1 - i) == mark)
}

pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_line(board, mark))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = winner(board) {
        GameOutcome::Win(mark)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
