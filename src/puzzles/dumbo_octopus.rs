// Dumbo octopuses: energy levels that flash and cascade into all eight
// neighbors.

use std::fmt;

use tracing::{debug, trace};

use crate::core::{Coord, GridError, NeighborMode, Neighborhood, Result};
use crate::grid::Grid;

const FLASH_ABOVE: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Octopuses {
    energy: Grid<u8>,
}

impl Octopuses {
    pub fn new(energy: Grid<u8>) -> Self {
        Self { energy }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Grid::parse_digits(input).map(Self::new)
    }

    pub fn energy(&self) -> &Grid<u8> {
        &self.energy
    }

    /// One step. Each octopus flashes at most once; flashed octopuses end the
    /// step at zero. Returns the next state and the number of flashes.
    pub fn step(&self) -> (Octopuses, usize) {
        let grid = &self.energy;
        let (width, height) = grid.dimensions();
        let mut energy: Vec<u8> = grid.cells().iter().map(|e| e.saturating_add(1)).collect();
        let mut flashed = vec![false; energy.len()];
        let mut pending: Vec<usize> = (0..energy.len()).filter(|&i| energy[i] > FLASH_ABOVE).collect();

        while let Some(i) = pending.pop() {
            if flashed[i] {
                continue;
            }
            flashed[i] = true;
            let here = Coord::new(i % width, i / width);
            for n in grid.neighbors(here, Neighborhood::Moore, NeighborMode::Clamped) {
                let ni = grid.index(n.x, n.y);
                energy[ni] = energy[ni].saturating_add(1);
                if energy[ni] > FLASH_ABOVE && !flashed[ni] {
                    pending.push(ni);
                }
            }
        }

        let mut flashes = 0;
        for (e, &f) in energy.iter_mut().zip(&flashed) {
            if f {
                *e = 0;
                flashes += 1;
            }
        }
        trace!(flashes, "octopus step");
        (Octopuses::new(Grid::from_parts(width, height, energy)), flashes)
    }

    pub fn total_flashes(&self, steps: usize) -> usize {
        let mut current = self.clone();
        let mut total = 0;
        for _ in 0..steps {
            let (next, flashes) = current.step();
            total += flashes;
            current = next;
        }
        debug!(steps, total, "flashes counted");
        total
    }

    /// The first step on which every octopus flashes.
    pub fn first_synchronized_step(&self, limit: usize) -> Result<usize> {
        let population = self.energy.cells().len();
        let mut current = self.clone();
        for step in 1..=limit {
            let (next, flashes) = current.step();
            if flashes == population {
                debug!(step, "synchronized");
                return Ok(step);
            }
            current = next;
        }
        Err(GridError::Exhausted(limit))
    }
}

impl fmt::Display for Octopuses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "11111\n19991\n19191\n19991\n11111";

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn small_cascade() {
        let start = Octopuses::parse(SMALL).unwrap();
        let (one, flashes) = start.step();
        assert_eq!(flashes, 9);
        assert_eq!(one.to_string(), "34543\n40004\n50005\n40004\n34543\n");

        let (two, flashes) = one.step();
        assert_eq!(flashes, 0);
        assert_eq!(two.to_string(), "45654\n51115\n61116\n51115\n45654\n");
    }

    #[test]
    fn example_flashes_after_ten_and_hundred_steps() {
        let start = Octopuses::parse(EXAMPLE).unwrap();
        assert_eq!(start.total_flashes(10), 204);
        assert_eq!(start.total_flashes(100), 1656);
    }

    #[test]
    fn example_synchronizes() {
        let start = Octopuses::parse(EXAMPLE).unwrap();
        assert_eq!(start.first_synchronized_step(1000).unwrap(), 195);
        assert_eq!(start.first_synchronized_step(100), Err(GridError::Exhausted(100)));
    }

    #[test]
    fn all_nines_flash_together() {
        let start = Octopuses::parse("99\n99").unwrap();
        assert_eq!(start.first_synchronized_step(1).unwrap(), 1);
        let (next, _) = start.step();
        assert_eq!(next.energy().count(|e| e == 0), 4);
    }

    #[test]
    fn out_of_range_energy_saturates_and_flashes() {
        let start = Octopuses::new(Grid::from_rows(vec![vec![255u8, 0]]).unwrap());
        let (next, flashes) = start.step();
        assert_eq!(flashes, 1);
        assert_eq!(next.energy().cells(), &[0, 2]);
    }

    #[test]
    fn step_leaves_input_untouched() {
        let start = Octopuses::parse(SMALL).unwrap();
        let before = start.clone();
        let _ = start.step();
        assert_eq!(start, before);
    }
}
