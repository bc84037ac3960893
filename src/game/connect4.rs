use super::{GameBoard, MoveError, Side};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Side),
}

/// The column-drop board. Row 0 is the top, row 5 is the bottom; gravity
/// resolves a column choice to the lowest empty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connect4Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Connect4Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Connect4Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Taken(side);
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Place a marker directly, bypassing gravity. For building win-scan
    /// fixtures only.
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, side: Side) {
        self.cells[row][col] = Cell::Taken(side);
    }

    /// Scan the whole board for a run of four along any row, column, or
    /// diagonal.
    pub fn has_four(&self, side: Side) -> bool {
        let own = Cell::Taken(side);

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row][col + i] == own) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                if (0..4).all(|i| self.cells[row + i][col] == own) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row + i][col + i] == own) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                if (0..4).all(|i| self.cells[row - i][col + i] == own) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Connect4Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for Connect4Board {
    type Move = usize;

    fn legal_moves(&self, _side: Side) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    fn apply(&mut self, mv: usize, side: Side) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.drop_piece(mv, side)?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.has_four(Side::First) || self.has_four(Side::Second) || self.is_full()
    }

    fn is_winner(&self, side: Side) -> bool {
        self.has_four(side)
    }
}
