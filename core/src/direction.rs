//! Move directions and the direction-relative view of the grid.
//!
//! The move engine is written once, for tiles travelling toward logical row 0.
//! [`Oriented`] makes every direction look like that by remapping logical
//! `(y, x)` onto physical `(row, col)`.

use crate::grid::{Grid, SIZE};

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in `legal_moves` order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    /// Returns None for invalid values.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Physical `(row, col)` of logical cell `(y, x)` when looking along `self`.
    ///
    /// Logical row 0 is the edge tiles travel toward; logical `x` selects the line.
    #[inline]
    pub const fn locate(self, y: usize, x: usize) -> (usize, usize) {
        let last = SIZE - 1;
        match self {
            Direction::Up => (y, x),
            Direction::Down => (last - y, x),
            Direction::Left => (last - x, y),
            Direction::Right => (last - x, last - y),
        }
    }
}

/// A grid seen along one direction.
pub struct Oriented<'g> {
    grid: &'g mut Grid,
    dir: Direction,
}

impl<'g> Oriented<'g> {
    pub fn new(grid: &'g mut Grid, dir: Direction) -> Self {
        Oriented { grid, dir }
    }

    /// Value at logical `(y, x)`. Both must be below [`SIZE`].
    #[inline]
    pub fn read(&self, y: usize, x: usize) -> u32 {
        debug_assert!(y < SIZE && x < SIZE, "logical cell ({y}, {x}) out of range");
        let (row, col) = self.dir.locate(y, x);
        self.grid.get(row, col)
    }

    #[inline]
    pub fn write(&mut self, y: usize, x: usize, value: u32) {
        debug_assert!(y < SIZE && x < SIZE, "logical cell ({y}, {x}) out of range");
        let (row, col) = self.dir.locate(y, x);
        self.grid.set(row, col, value);
    }
}
