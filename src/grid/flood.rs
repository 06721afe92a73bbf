use rustc_hash::FxHashSet;
use tracing::trace;

use super::model::Grid;
use crate::core::{Coord, NeighborMode, Neighborhood, Result};

/// Collects the 4-connected region containing `seed` whose cells satisfy
/// `member`. A seed that is not itself a member yields an empty region.
pub fn flood<T, P>(grid: &Grid<T>, seed: Coord, member: P) -> Result<FxHashSet<Coord>>
where
    T: Copy,
    P: Fn(&Grid<T>, T) -> bool,
{
    let mut visited = FxHashSet::default();
    if member(grid, grid.at(seed)?) {
        fill(grid, seed, &member, &mut visited);
    }
    trace!(?seed, size = visited.len(), "flood");
    Ok(visited)
}

fn fill<T, P>(grid: &Grid<T>, seed: Coord, member: &P, visited: &mut FxHashSet<Coord>)
where
    T: Copy,
    P: Fn(&Grid<T>, T) -> bool,
{
    let mut stack = vec![seed];
    visited.insert(seed);

    while let Some(cur) = stack.pop() {
        for n in grid.neighbors(cur, Neighborhood::VonNeumann, NeighborMode::Clamped) {
            if visited.contains(&n) {
                continue;
            }
            let value = grid.cells()[grid.index(n.x, n.y)];
            if member(grid, value) {
                visited.insert(n);
                stack.push(n);
            }
        }
    }
}

/// Every region of member cells, ordered by the row-major position of each
/// region's first cell.
pub fn regions<T, P>(grid: &Grid<T>, member: P) -> Vec<FxHashSet<Coord>>
where
    T: Copy,
    P: Fn(&Grid<T>, T) -> bool,
{
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    let mut out = Vec::new();

    for coord in grid.coords() {
        if seen.contains(&coord) {
            continue;
        }
        let value = grid.cells()[grid.index(coord.x, coord.y)];
        if !member(grid, value) {
            continue;
        }
        let mut region = FxHashSet::default();
        fill(grid, coord, &member, &mut region);
        seen.extend(region.iter().copied());
        out.push(region);
    }
    out
}
