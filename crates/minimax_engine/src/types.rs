//! Core domain types for tic-tac-toe.

use crate::error::{EngineError, EngineErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString};

/// One of the two sides in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side X.
    X,
    /// Side O.
    O,
}

impl Side {
    /// Returns the other side. Applying it twice gives back `self`.
    pub fn flip(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Parses a side, mapping failures into the engine error type.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        Side::from_str(s.trim())
            .map_err(|_| EngineError::new(EngineErrorKind::ParseSide(s.to_string())))
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Holds a side's mark.
    Marked(Side),
}

impl Cell {
    /// Notation character used in board strings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Marked(Side::X) => 'X',
            Cell::Marked(Side::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '_' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Marked(Side::X)),
            'O' | 'o' => Some(Cell::Marked(Side::O)),
            _ => None,
        }
    }
}

/// A (row, col) coordinate on the 3x3 grid, both 0-indexed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Creates a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`. Use [`Coord::checked`] for
    /// untrusted input.
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 3 && col < 3, "coordinate out of bounds");
        Self { row, col }
    }

    /// Creates a coordinate, rejecting anything outside the grid.
    #[track_caller]
    pub fn checked(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(EngineError::new(EngineErrorKind::OutOfBounds { row, col }))
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copying it is a 9-byte memcpy, so search code copies freely
/// instead of sharing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    /// Returns a copy of this board with `side` marked at `at`.
    pub fn with_mark(&self, at: Coord, side: Side) -> Self {
        let mut next = *self;
        next.set(at, Cell::Marked(side));
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|at| self.is_empty(*at))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// The same position with every X and O exchanged.
    pub fn swap_sides(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            if let Cell::Marked(side) = cell {
                *side = side.flip();
            }
        }
        swapped
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push(' ');
                result.push(self.cells[row * 3 + col].symbol());
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Side),
    /// Game ended in a draw.
    Draw,
}

/// Compact notation: three rows separated by `/`, e.g. `XO_/_X_/__O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').map(str::trim).collect();
        if rows.len() != 3 {
            return Err(EngineError::new(EngineErrorKind::ParseBoard(format!(
                "expected 3 rows separated by '/', got {} in '{}'",
                rows.len(),
                s
            ))));
        }

        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != 3 {
                return Err(EngineError::new(EngineErrorKind::ParseBoard(format!(
                    "row {} has {} cells, expected 3 in '{}'",
                    r + 1,
                    symbols.len(),
                    s
                ))));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    EngineError::new(EngineErrorKind::ParseBoard(format!(
                        "invalid character '{}' in '{}'",
                        symbol, s
                    )))
                })?;
                board.cells[r * 3 + c] = cell;
            }
        }
        Ok(board)
    }
}
