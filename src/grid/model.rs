use std::fmt;

use crate::core::{Coord, GridError, Result};

/// Row-major rectangular grid. Immutable once built; simulators produce a
/// fresh grid per generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Parses equal-length lines, converting each character with `cell`.
    /// Trailing blank lines are ignored.
    pub fn parse_with<F>(input: &str, cell: F) -> Result<Self>
    where
        F: Fn(char) -> Option<T>,
    {
        let mut lines: Vec<&str> = input.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let value = cell(ch).ok_or_else(|| {
                    GridError::MalformedInput(format!("unexpected {:?} at ({}, {})", ch, x, y))
                })?;
                row.push(value);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::MalformedInput("empty grid".into()));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::MalformedInput(format!(
                "row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { width, height, cells })
    }

    /// Assembles a grid from a row-major buffer produced by a simulator.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(x, y)])
    }

    pub fn at(&self, coord: Coord) -> Result<T> {
        self.get(coord.x, coord.y)
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        y * self.width + x
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Coord::new(i % width, i / width))
    }

    pub fn count<P>(&self, pred: P) -> usize
    where
        P: Fn(T) -> bool,
    {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    pub fn map<U: Copy, F>(&self, f: F) -> Grid<U>
    where
        F: Fn(T) -> U,
    {
        Grid::from_parts(self.width, self.height, self.cells.iter().map(|&c| f(c)).collect())
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self> {
        Self::parse_with(input, Some)
    }
}

impl Grid<u8> {
    /// Parses a grid of `0`-`9` digits.
    pub fn parse_digits(input: &str) -> Result<Self> {
        Self::parse_with(input, |c| c.to_digit(10).map(|d| d as u8))
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for n in row {
                write!(f, "{}", n)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
