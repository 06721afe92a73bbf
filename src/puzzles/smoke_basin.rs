// Smoke basin: height-map low points and the basins that drain into them.

use tracing::debug;

use crate::core::{GridError, Result};
use crate::grid::{flood, low_points, Grid};

/// Sum of `height + 1` over every low point.
pub fn risk_level_sum(heights: &Grid<u8>) -> Result<u64> {
    let mut sum = 0;
    for c in low_points(heights)? {
        sum += heights.at(c)? as u64 + 1;
    }
    Ok(sum)
}

/// Basin sizes, largest first. A basin is its low point plus everything
/// below `boundary` reachable from it.
pub fn basin_sizes(heights: &Grid<u8>, boundary: u8) -> Result<Vec<usize>> {
    let mut sizes = Vec::new();
    for low in low_points(heights)? {
        // A low point at or above the boundary still forms a one-cell basin;
        // its neighbors are all higher, so none of them can join.
        let size = flood(heights, low, |_, h| h < boundary)?.len().max(1);
        debug!(?low, size, "basin");
        sizes.push(size);
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes)
}

pub fn largest_basins_product(heights: &Grid<u8>, boundary: u8, top: usize) -> Result<usize> {
    let sizes = basin_sizes(heights, boundary)?;
    if sizes.len() < top {
        return Err(GridError::MalformedInput(format!(
            "found {} basins, need at least {}",
            sizes.len(),
            top
        )));
    }
    Ok(sizes.iter().take(top).product())
}
