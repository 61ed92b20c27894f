//! The `SIZE`×`SIZE` tile grid.

use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 4;

/// The board: tile values addressed by physical `(row, col)`.
///
/// Empty cells are 0, tiles contain their value (2, 4, 8, ...). Only the move
/// engine and the spawner write individual cells; everything else reads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    /// A constant empty grid.
    pub const EMPTY: Grid = Grid {
        cells: [[0; SIZE]; SIZE],
    };

    /// Build a grid from row-major tile values.
    ///
    /// Nonzero values are expected to be powers of two.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Self {
        debug_assert!(
            rows.iter().flatten().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
            "tiles must be powers of two"
        );
        Grid { cells: rows }
    }

    /// Borrow the rows of the grid.
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Tile value at a physical cell.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [[0; SIZE]; SIZE];
    }

    /// Iterate over `(row, col)` of every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, &v)| v == 0)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of nonzero cells.
    pub fn tile_count(&self) -> usize {
        SIZE * SIZE - self.empty_count()
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for line in &self.cells {
            for &val in line {
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "+------".repeat(SIZE) + "+";
        writeln!(f, "{}", border)?;
        for line in &self.cells {
            write!(f, "|")?;
            for &val in line {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}
