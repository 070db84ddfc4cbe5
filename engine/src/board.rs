use crate::error::EngineError;
use crate::types::{Mark, Position};

pub const MIN_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize { size });
        }
        Ok(Self {
            cells: vec![vec![Mark::Empty; size]; size],
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // Panics out of range; `place` is the checked path for untrusted input.
    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == Mark::Empty)
            .count()
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        self.check_bounds(row, col)?;
        if self.cells[row][col] != Mark::Empty {
            return Err(EngineError::OccupiedCell { row, col });
        }
        self.cells[row][col] = mark;
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = Mark::Empty;
        Ok(())
    }

    // Empty cells in row-major order; search relies on this order for its
    // first-found tie-break.
    pub fn available_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, &cell)| {
                if cell == Mark::Empty {
                    Some(Position::new(row, col))
                } else {
                    None
                }
            })
        })
    }

    // Places `mark` at `pos`, runs `f`, and restores the cell to Empty on
    // every return path, unwinding included. The cell must be empty when
    // called.
    pub(crate) fn scoped_place<T>(
        &mut self,
        pos: Position,
        mark: Mark,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        struct Restore<'a> {
            board: &'a mut Board,
            pos: Position,
        }

        impl Drop for Restore<'_> {
            fn drop(&mut self) {
                self.board.cells[self.pos.row][self.pos.col] = Mark::Empty;
            }
        }

        debug_assert!(self.cells[pos.row][pos.col] == Mark::Empty);
        self.cells[pos.row][pos.col] = mark;
        let guard = Restore { board: self, pos };
        f(&mut *guard.board)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), EngineError> {
        if row >= self.size || col >= self.size {
            return Err(EngineError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }
}
