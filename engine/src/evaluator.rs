use crate::board::Board;
use crate::types::Mark;

// Each line held by a single player with k cells contributes 10^(k-1),
// signed toward `maximizer`; contested lines contribute nothing. Arithmetic
// saturates so oversized boards cannot overflow.
pub fn evaluate(board: &Board, maximizer: Mark) -> i64 {
    let n = board.size();
    let mut total: i64 = 0;

    for row in 0..n {
        total = total.saturating_add(line_value(
            board,
            (0..n).map(|col| (row, col)),
            maximizer,
        ));
    }
    for col in 0..n {
        total = total.saturating_add(line_value(
            board,
            (0..n).map(|row| (row, col)),
            maximizer,
        ));
    }
    total = total.saturating_add(line_value(board, (0..n).map(|i| (i, i)), maximizer));
    total = total.saturating_add(line_value(board, (0..n).map(|i| (i, n - 1 - i)), maximizer));

    total
}

fn line_value(
    board: &Board,
    cells: impl Iterator<Item = (usize, usize)>,
    maximizer: Mark,
) -> i64 {
    let mut x_count: u32 = 0;
    let mut o_count: u32 = 0;
    for (row, col) in cells {
        match board.mark_at(row, col) {
            Mark::X => x_count += 1,
            Mark::O => o_count += 1,
            Mark::Empty => {}
        }
    }

    if x_count > 0 && o_count > 0 {
        return 0;
    }
    let (owner, count) = if x_count > 0 {
        (Mark::X, x_count)
    } else if o_count > 0 {
        (Mark::O, o_count)
    } else {
        return 0;
    };

    let magnitude = 10i64.saturating_pow(count - 1);
    if owner == maximizer {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(3).unwrap();
        assert_eq!(evaluate(&board, Mark::X), 0);
    }

    #[test]
    fn test_pair_in_a_row_scores_ten() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        // Row 0 holds two X: +10. Columns 0 and 1 and the main diagonal each
        // hold a single X: +1 apiece. The anti-diagonal is untouched.
        assert_eq!(evaluate(&board, Mark::X), 13);
    }

    #[test]
    fn test_single_mark_scores_one_per_line() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::X).unwrap();
        // The center sits on a row, a column, and both diagonals.
        assert_eq!(evaluate(&board, Mark::X), 4);
    }

    #[test]
    fn test_mixed_line_scores_zero() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::O).unwrap();
        // Row 0 is contested: 0. Column 0 and the main diagonal hold a lone
        // X (+1 each); column 1 holds a lone O (-1).
        assert_eq!(evaluate(&board, Mark::X), 1);
    }

    #[test]
    fn test_sign_follows_the_maximizer() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::X).unwrap();
        assert_eq!(evaluate(&board, Mark::X), 4);
        assert_eq!(evaluate(&board, Mark::O), -4);
    }

    #[test]
    fn test_run_length_scales_exponentially() {
        let mut board = Board::new(5).unwrap();
        board.place(2, 0, Mark::X).unwrap();
        board.place(2, 1, Mark::X).unwrap();
        board.place(2, 2, Mark::X).unwrap();
        // Row 2 holds three X: +100. Columns 0 and 1 hold one X each: +2.
        // Column 2 and both diagonals also pass through (2, 2): +3.
        assert_eq!(evaluate(&board, Mark::X), 105);
    }

    #[test]
    fn test_opponent_progress_scores_negative() {
        let mut board = Board::new(3).unwrap();
        board.place(2, 0, Mark::O).unwrap();
        board.place(2, 1, Mark::O).unwrap();
        // Mirror of the +10 case with the other player.
        assert_eq!(evaluate(&board, Mark::X), -13);
    }
}
