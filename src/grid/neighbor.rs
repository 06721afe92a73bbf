// Neighbor resolution and directional predicates.
//
// Coordinate resolution and edge policy live here; the comparison itself is
// always supplied by the caller as a pure function of (current, neighbor).

use super::model::Grid;
use crate::core::{Coord, Direction, NeighborMode, Neighborhood, Result};

impl<T: Copy> Grid<T> {
    /// Resolves `coord + (dx, dy)`. `None` only in clamped mode past an edge.
    pub fn offset(&self, coord: Coord, (dx, dy): (isize, isize), mode: NeighborMode) -> Option<Coord> {
        let (w, h) = (self.width() as isize, self.height() as isize);
        let nx = coord.x as isize + dx;
        let ny = coord.y as isize + dy;
        match mode {
            NeighborMode::Clamped => {
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    None
                } else {
                    Some(Coord::new(nx as usize, ny as usize))
                }
            }
            NeighborMode::Toroidal => {
                Some(Coord::new(nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize))
            }
        }
    }

    pub fn neighbor(&self, coord: Coord, dir: Direction, mode: NeighborMode) -> Option<Coord> {
        self.offset(coord, dir.offset(), mode)
    }

    /// Neighbors of `coord` that exist under `mode`. In toroidal mode on a
    /// grid narrower than 3 the same cell may be yielded more than once.
    pub fn neighbors(
        &self,
        coord: Coord,
        neighborhood: Neighborhood,
        mode: NeighborMode,
    ) -> impl Iterator<Item = Coord> + '_ {
        neighborhood
            .offsets()
            .iter()
            .filter_map(move |&off| self.offset(coord, off, mode))
    }
}

/// A relation between a cell and its orthogonal neighbors under a fixed
/// edge policy.
#[derive(Debug, Clone, Copy)]
pub struct NeighborPredicate<F> {
    mode: NeighborMode,
    relation: F,
}

impl<F> NeighborPredicate<F> {
    pub fn new(mode: NeighborMode, relation: F) -> Self {
        Self { mode, relation }
    }

    /// Whether the neighbor of (x, y) in `dir` satisfies the relation.
    /// A clamped edge counts as satisfied.
    pub fn direction_satisfied<T>(&self, grid: &Grid<T>, x: usize, y: usize, dir: Direction) -> Result<bool>
    where
        T: Copy,
        F: Fn(T, T) -> bool,
    {
        let current = grid.get(x, y)?;
        match grid.neighbor(Coord::new(x, y), dir, self.mode) {
            Some(n) => Ok((self.relation)(current, grid.at(n)?)),
            None => Ok(true),
        }
    }

    pub fn all_satisfied<T>(&self, grid: &Grid<T>, x: usize, y: usize) -> Result<bool>
    where
        T: Copy,
        F: Fn(T, T) -> bool,
    {
        for dir in Direction::ALL {
            if !self.direction_satisfied(grid, x, y, dir)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// True iff the cell is strictly lower than each orthogonal neighbor; grid
/// edges count as higher.
pub fn is_low_point<T: Copy + PartialOrd>(grid: &Grid<T>, x: usize, y: usize) -> Result<bool> {
    NeighborPredicate::new(NeighborMode::Clamped, |cur: T, n: T| cur < n).all_satisfied(grid, x, y)
}

/// All low points in row-major order.
pub fn low_points<T: Copy + PartialOrd>(grid: &Grid<T>) -> Result<Vec<Coord>> {
    let lower = NeighborPredicate::new(NeighborMode::Clamped, |cur: T, n: T| cur < n);
    let mut out = Vec::new();
    for c in grid.coords() {
        if lower.all_satisfied(grid, c.x, c.y)? {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Grid<u8> {
        Grid::parse_digits(s).unwrap()
    }

    #[test]
    fn toroidal_wraps_east_and_west() {
        let grid = digits("123\n456");
        let (w, _) = grid.dimensions();
        for y in 0..2 {
            assert_eq!(
                grid.neighbor(Coord::new(w - 1, y), Direction::East, NeighborMode::Toroidal),
                Some(Coord::new(0, y))
            );
            assert_eq!(
                grid.neighbor(Coord::new(0, y), Direction::West, NeighborMode::Toroidal),
                Some(Coord::new(w - 1, y))
            );
        }
    }

    #[test]
    fn toroidal_wraps_north_and_south() {
        let grid = digits("12\n34\n56");
        assert_eq!(
            grid.neighbor(Coord::new(1, 0), Direction::North, NeighborMode::Toroidal),
            Some(Coord::new(1, 2))
        );
        assert_eq!(
            grid.neighbor(Coord::new(1, 2), Direction::South, NeighborMode::Toroidal),
            Some(Coord::new(1, 0))
        );
    }

    #[test]
    fn clamped_has_no_neighbor_past_edge() {
        let grid = digits("12\n34");
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::North, NeighborMode::Clamped), None);
        assert_eq!(grid.neighbor(Coord::new(1, 1), Direction::East, NeighborMode::Clamped), None);
        assert_eq!(
            grid.neighbor(Coord::new(0, 0), Direction::South, NeighborMode::Clamped),
            Some(Coord::new(0, 1))
        );
    }

    #[test]
    fn moore_neighbors_at_corner_and_center() {
        let grid = digits("123\n456\n789");
        let corner: Vec<_> = grid.neighbors(Coord::new(0, 0), Neighborhood::Moore, NeighborMode::Clamped).collect();
        assert_eq!(corner.len(), 3);
        let center = grid.neighbors(Coord::new(1, 1), Neighborhood::Moore, NeighborMode::Clamped).count();
        assert_eq!(center, 8);
        let wrapped = grid.neighbors(Coord::new(0, 0), Neighborhood::Moore, NeighborMode::Toroidal).count();
        assert_eq!(wrapped, 8);
    }

    #[test]
    fn clamped_edge_satisfies_direction() {
        let grid = digits("5");
        let never = NeighborPredicate::new(NeighborMode::Clamped, |_: u8, _: u8| false);
        for dir in Direction::ALL {
            assert!(never.direction_satisfied(&grid, 0, 0, dir).unwrap());
        }
    }

    #[test]
    fn toroidal_single_cell_compares_with_itself() {
        let grid = digits("5");
        let lower = NeighborPredicate::new(NeighborMode::Toroidal, |c: u8, n: u8| c < n);
        assert!(!lower.direction_satisfied(&grid, 0, 0, Direction::East).unwrap());
    }

    #[test]
    fn single_cell_is_low_point() {
        assert!(is_low_point(&digits("9"), 0, 0).unwrap());
        assert!(is_low_point(&Grid::parse_chars("x").unwrap(), 0, 0).unwrap());
    }

    #[test]
    fn equal_neighbors_are_not_lower() {
        let grid = digits("11\n11");
        assert!(low_points(&grid).unwrap().is_empty());
    }

    #[test]
    fn last_column_is_checked() {
        let grid = digits("9990\n9999");
        assert_eq!(low_points(&grid).unwrap(), vec![Coord::new(3, 0)]);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let grid = digits("12");
        assert!(is_low_point(&grid, 5, 0).is_err());
    }
}
