//! Game-over detection.

use crate::grid::{Grid, SIZE};

/// Return true if no move in any direction can change `grid`.
///
/// A direct adjacency scan: the game continues as soon as an empty cell or two
/// equal orthogonal neighbors are found.
pub fn is_game_over(grid: &Grid) -> bool {
    let last = SIZE - 1;

    for x in 0..last {
        for y in 0..last {
            let tile = grid.get(y, x);
            let below = grid.get(y + 1, x);
            let next = grid.get(y, x + 1);
            if tile == 0 || below == 0 || next == 0 || tile == below || tile == next {
                return false;
            }
        }
        if grid.get(last, x) == grid.get(last, x + 1) {
            return false;
        }
    }

    for y in 0..last {
        if grid.get(y, last) == 0 || grid.get(y, last) == grid.get(y + 1, last) {
            return false;
        }
    }

    grid.get(last, last) != 0
}
