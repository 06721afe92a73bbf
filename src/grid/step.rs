// Generation stepping for marker-movement automata.
//
// Each rule is one phase. A phase reads the grid as it stood when the phase
// began and writes into a fresh buffer, so a cell vacated by an earlier phase
// of the same generation is free, while a cell being vacated in the current
// phase is still occupied. Phase order is part of the semantics.

use tracing::{debug, trace};

use super::model::Grid;
use crate::core::{Coord, GridError, NeighborMode, Result};

/// Move every `marker` by (dx, dy), wrapping at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRule<T> {
    pub marker: T,
    pub dx: isize,
    pub dy: isize,
}

impl<T> MoveRule<T> {
    pub fn new(marker: T, dx: isize, dy: isize) -> Self {
        Self { marker, dx, dy }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPoint<T> {
    pub grid: Grid<T>,
    /// Step calls made, including the final one that changed nothing.
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct StepSimulator<T> {
    empty: T,
    rules: Vec<MoveRule<T>>,
}

impl StepSimulator<char> {
    /// East-facing `>` herd moves first, then the south-facing `v` herd.
    pub fn sea_cucumbers() -> Self {
        Self::new('.', vec![MoveRule::new('>', 1, 0), MoveRule::new('v', 0, 1)])
    }
}

impl<T: Copy + PartialEq + std::fmt::Debug> StepSimulator<T> {
    pub fn new(empty: T, rules: Vec<MoveRule<T>>) -> Self {
        Self { empty, rules }
    }

    /// Advances one generation. Returns the new grid and whether any cell
    /// differs from `grid`.
    pub fn step(&self, grid: &Grid<T>) -> Result<(Grid<T>, bool)> {
        let (width, height) = grid.dimensions();
        let mut current = grid.clone();

        for rule in &self.rules {
            let mut next = current.cells().to_vec();
            let mut moved = 0usize;

            for coord in current.coords() {
                if current.at(coord)? != rule.marker {
                    continue;
                }
                let dest = self.destination(&current, coord, rule)?;
                let di = current.index(dest.x, dest.y);
                if current.at(dest)? == self.empty && next[di] == self.empty {
                    next[di] = rule.marker;
                    next[current.index(coord.x, coord.y)] = self.empty;
                    moved += 1;
                }
            }

            trace!(marker = ?rule.marker, moved, "phase done");
            current = Grid::from_parts(width, height, next);
        }

        let changed = current.cells() != grid.cells();
        Ok((current, changed))
    }

    /// Steps until nothing changes, giving up after `max_steps` calls.
    pub fn run_to_fixed_point(&self, grid: &Grid<T>, max_steps: usize) -> Result<FixedPoint<T>> {
        let mut current = grid.clone();
        for steps in 1..=max_steps {
            let (next, changed) = self.step(&current)?;
            if !changed {
                debug!(steps, "fixed point reached");
                return Ok(FixedPoint { grid: next, steps });
            }
            current = next;
        }
        debug!(max_steps, "no fixed point");
        Err(GridError::Exhausted(max_steps))
    }

    fn destination(&self, grid: &Grid<T>, coord: Coord, rule: &MoveRule<T>) -> Result<Coord> {
        grid.offset(coord, (rule.dx, rule.dy), NeighborMode::Toroidal)
            .ok_or(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: grid.width(),
                height: grid.height(),
            })
    }
}
