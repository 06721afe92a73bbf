// Sea cucumbers: two herds shuffling across a wrapping sea floor.

use tracing::debug;

use crate::core::Result;
use crate::grid::{Grid, StepSimulator};

pub fn parse(input: &str) -> Result<Grid<char>> {
    Grid::parse_with(input, |c| matches!(c, '.' | '>' | 'v').then_some(c))
}

/// The first step on which no sea cucumber moves.
pub fn first_still_step(floor: &Grid<char>, max_steps: usize) -> Result<usize> {
    let (east, south) = herd_sizes(floor);
    debug!(east, south, "herds");
    StepSimulator::sea_cucumbers()
        .run_to_fixed_point(floor, max_steps)
        .map(|done| done.steps)
}

fn herd_sizes(floor: &Grid<char>) -> (usize, usize) {
    (floor.count(|c| c == '>'), floor.count(|c| c == 'v'))
}
