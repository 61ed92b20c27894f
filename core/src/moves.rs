//! The move engine: merge, then slide, along one direction.

use crate::direction::{Direction, Oriented};
use crate::grid::{Grid, SIZE};

/// Outcome of applying one move to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any tile merged or moved.
    pub changed: bool,
    /// Points earned: the sum of every tile produced by a merge.
    pub score_delta: u32,
    /// Number of merge events.
    pub merges: u32,
}

/// Apply a move to `grid` in place.
///
/// Algorithm, per logical line (see [`Oriented`]):
/// 1. Merge: scan toward the far edge; a tile merges with the next nonzero
///    tile behind it when both are equal. One forward pass, so a merged tile
///    never merges again in the same move.
/// 2. Slide: compact all tiles toward logical row 0.
pub fn apply_move(grid: &mut Grid, dir: Direction) -> MoveResult {
    let mut view = Oriented::new(grid, dir);
    let mut result = MoveResult::default();

    for x in 0..SIZE {
        merge_line(&mut view, x, &mut result);
    }
    for x in 0..SIZE {
        slide_line(&mut view, x, &mut result);
    }

    result
}

/// Whether moving `grid` in `dir` would change it.
pub fn can_move(grid: &Grid, dir: Direction) -> bool {
    let mut probe = *grid;
    apply_move(&mut probe, dir).changed
}

fn merge_line(view: &mut Oriented<'_>, x: usize, result: &mut MoveResult) {
    for y in 0..SIZE - 1 {
        let tile = view.read(y, x);
        if tile == 0 {
            continue;
        }

        // Next tile behind this one, skipping gaps.
        let Some(next) = (y + 1..SIZE).find(|&y2| view.read(y2, x) != 0) else {
            continue;
        };

        if view.read(next, x) == tile {
            let merged = tile * 2;
            view.write(next, x, 0);
            view.write(y, x, merged);
            result.score_delta += merged;
            result.merges += 1;
            result.changed = true;
        }
    }
}

fn slide_line(view: &mut Oriented<'_>, x: usize, result: &mut MoveResult) {
    let mut line = [0u32; SIZE];
    let mut len = 0;

    for y in 0..SIZE {
        let tile = view.read(y, x);
        if tile != 0 {
            if len < y {
                result.changed = true;
            }
            line[len] = tile;
            len += 1;
        }
    }

    for (y, &tile) in line.iter().enumerate() {
        view.write(y, x, tile);
    }
}
