use std::fmt;
use std::ops::Range;

use crate::{Error, CONNECT_NUMBER};

/// One of the two players. The discriminant doubles as a score multiplier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    You = 1,
    Cpu = -1,
}

impl Side {
    /// +1 for YOU, -1 for CPU
    pub fn sign(self) -> i32 {
        self as i32
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::You => Side::Cpu,
            Side::Cpu => Side::You,
        }
    }

    /// YOU maximizes the score, CPU minimizes it
    pub fn is_maximizing(self) -> bool {
        self == Side::You
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::You => write!(f, "YOU"),
            Side::Cpu => write!(f, "CPU"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    You,
    Cpu,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::You => Some(Side::You),
            Cell::Cpu => Some(Side::Cpu),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::You => Cell::You,
            Side::Cpu => Cell::Cpu,
        }
    }
}

/// The four orientations a run of pieces can take
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// top-left to bottom-right
    Diagonal,
    /// top-right to bottom-left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    // (row step, column step), rows counting downwards
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A window is a run of exactly `CONNECT_NUMBER` cells along one direction
pub type Window = [Cell; CONNECT_NUMBER];

/// A Connect 4 board of configurable size
///
/// Cells are stored row by row with row 0 at the top, so pieces settle towards
/// the highest row index of their column. Columns are addressed 1-based in
/// every move-related method, matching what a player types.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    // number of pieces in each column
    heights: Vec<usize>,
    num_moves: usize,
}

impl Board {
    /// Creates an empty board, rejecting sizes that cannot hold a window in every direction
    pub fn new(rows: usize, columns: usize) -> Result<Self, Error> {
        if rows <= CONNECT_NUMBER || columns <= CONNECT_NUMBER {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            heights: vec![0; columns],
            num_moves: 0,
        })
    }

    /// Builds a board from a string of 1-based column digits, alternating sides
    /// starting with YOU
    pub fn from_moves<S: AsRef<str>>(rows: usize, columns: usize, moves: S) -> Result<Self, Error> {
        let mut board = Self::new(rows, columns)?;
        let mut side = Side::You;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    board.apply_move(column as usize, side)?;
                    side = side.opponent();
                }
                _ => {
                    return Err(Error::InvalidMoveString {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of pieces on the board
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Returns the cell at a 0-based row and column, row 0 being the top
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    pub fn is_move_valid(&self, column: usize) -> bool {
        column >= 1 && column <= self.columns && self.cell(0, column - 1).is_empty()
    }

    /// Returns every playable column in ascending order, empty when the board is full
    pub fn possible_moves(&self) -> Vec<usize> {
        (1..=self.columns)
            .filter(|&column| self.is_move_valid(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.possible_moves().is_empty()
    }

    /// Drops a piece for `side` into a column, leaving the board untouched on error
    pub fn apply_move(&mut self, column: usize, side: Side) -> Result<(), Error> {
        if column < 1 || column > self.columns {
            return Err(Error::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        if !self.is_move_valid(column) {
            return Err(Error::ColumnFull { column });
        }
        self.play(column, side);
        Ok(())
    }

    /// Unchecked drop for callers that already hold a valid column
    pub(crate) fn play(&mut self, column: usize, side: Side) {
        debug_assert!(self.is_move_valid(column));
        let index = column - 1;
        let row = self.rows - 1 - self.heights[index];
        self.cells[row * self.columns + index] = side.into();
        self.heights[index] += 1;
        self.num_moves += 1;
    }

    /// Removes the topmost piece of a column, returning whose it was
    ///
    /// Returns `None` without touching the board if the column is out of
    /// range or empty.
    pub fn undo_move(&mut self, column: usize) -> Option<Side> {
        if column < 1 || column > self.columns || self.heights[column - 1] == 0 {
            return None;
        }
        let index = column - 1;
        let row = self.rows - self.heights[index];
        let cell = std::mem::replace(&mut self.cells[row * self.columns + index], Cell::Empty);
        self.heights[index] -= 1;
        self.num_moves -= 1;
        cell.side()
    }

    // ranges of window anchor rows and columns for a direction
    fn anchors(&self, direction: Direction) -> (Range<usize>, Range<usize>) {
        let row_span = self.rows - CONNECT_NUMBER + 1;
        let column_span = self.columns - CONNECT_NUMBER + 1;
        match direction {
            Direction::Horizontal => (0..self.rows, 0..column_span),
            Direction::Vertical => (0..row_span, 0..self.columns),
            Direction::Diagonal => (0..row_span, 0..column_span),
            Direction::AntiDiagonal => (0..row_span, CONNECT_NUMBER - 1..self.columns),
        }
    }

    /// Iterates every window along a direction, scanning anchors row by row from the top left
    pub fn windows(&self, direction: Direction) -> impl Iterator<Item = Window> + '_ {
        let (rows, columns) = self.anchors(direction);
        let (row_step, column_step) = direction.step();

        rows.flat_map(move |row| columns.clone().map(move |column| (row, column)))
            .map(move |(row, column)| {
                let mut window = [Cell::Empty; CONNECT_NUMBER];
                for (i, cell) in window.iter_mut().enumerate() {
                    let r = row as isize + row_step * i as isize;
                    let c = column as isize + column_step * i as isize;
                    *cell = self.cell(r as usize, c as usize);
                }
                window
            })
    }

    /// Checks every window for `CONNECT_NUMBER` pieces of one side
    pub fn has_won(&self, side: Side) -> bool {
        let target = Cell::from(side);
        Direction::ALL.iter().any(|&direction| {
            self.windows(direction)
                .any(|window| window.iter().all(|&cell| cell == target))
        })
    }

    /// Returns the winning side, checking YOU before CPU
    pub fn winner(&self) -> Option<Side> {
        if self.has_won(Side::You) {
            Some(Side::You)
        } else if self.has_won(Side::Cpu) {
            Some(Side::Cpu)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = match self.cell(row, column) {
                    Cell::Empty => '.',
                    Cell::You => 'X',
                    Cell::Cpu => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        let footer: String = (1..=self.columns).map(|x| (x % 10).to_string()).collect();
        write!(f, "{}", footer)
    }
}
