//! Random tile spawning.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;

/// A tile placed by [`spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a new tile in a uniformly chosen empty cell.
/// 90% chance of 2, 10% chance of 4.
///
/// Returns `None` when the grid has no empty cell; the grid is left untouched.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawned> {
    let empty_cells: Vec<(usize, usize)> = grid.empty_cells().collect();
    let &(row, col) = empty_cells.choose(rng)?;

    let value = if rng.gen_range(0..10) > 8 { 4 } else { 2 };
    grid.set(row, col, value);

    Some(Spawned { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SIZE;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_on_empty_grid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut grid = Grid::EMPTY;
        let spawned = spawn_tile(&mut grid, &mut rng).expect("grid has room");
        assert_eq!(grid.tile_count(), 1);
        assert_eq!(grid.get(spawned.row, spawned.col), spawned.value);
        assert!(spawned.value == 2 || spawned.value == 4);
    }

    #[test]
    fn test_spawn_fills_only_hole() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        let before = grid;
        let spawned = spawn_tile(&mut grid, &mut rng).expect("one hole left");
        assert_eq!((spawned.row, spawned.col), (2, 2));
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row, col) != (2, 2) {
                    assert_eq!(grid.get(row, col), before.get(row, col));
                }
            }
        }
    }

    #[test]
    fn test_spawn_on_full_grid_is_refused() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut grid = Grid::from_rows([[2; SIZE]; SIZE]);
        let before = grid;
        assert_eq!(spawn_tile(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_value_distribution() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let mut fours = 0;
        let trials = 10_000;
        for _ in 0..trials {
            let mut grid = Grid::EMPTY;
            if spawn_tile(&mut grid, &mut rng).map(|s| s.value) == Some(4) {
                fours += 1;
            }
        }
        // Expect ~10%; wide bounds keep this stable across seeds.
        assert!((700..1300).contains(&fours), "got {fours} fours");
    }

    #[test]
    fn test_spawn_reaches_every_cell() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut hit = [[false; SIZE]; SIZE];
        for _ in 0..2_000 {
            let mut grid = Grid::EMPTY;
            if let Some(s) = spawn_tile(&mut grid, &mut rng) {
                hit[s.row][s.col] = true;
            }
        }
        assert!(hit.iter().flatten().all(|&h| h));
    }
}
