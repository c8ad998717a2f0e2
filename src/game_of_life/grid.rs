//! Grid representation and utilities for Game of Life

use crate::error::LifeError;
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability that a randomly initialised cell starts alive
pub const DEFAULT_DENSITY: f64 = 0.2;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Display intensity: 255 for alive, 0 for dead
    pub fn intensity(self) -> u8 {
        match self {
            Cell::Alive => 255,
            Cell::Dead => 0,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

const GLIDER: [[Cell; 3]; 3] = [
    [Cell::Dead, Cell::Dead, Cell::Alive],
    [Cell::Alive, Cell::Dead, Cell::Alive],
    [Cell::Dead, Cell::Alive, Cell::Alive],
];

/// A square Game of Life grid on a torus.
///
/// Every coordinate is taken modulo `size` in both dimensions, so any signed
/// row or column addresses a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = LifeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(LifeError::GridShape {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Random grid where each cell is alive with probability 0.2
    pub fn random(size: usize) -> Self {
        Self::random_with_rng(size, DEFAULT_DENSITY, &mut rand::rng())
    }

    /// Random grid with one independent Bernoulli trial per cell
    pub fn random_with_rng<R: Rng + ?Sized>(size: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() {
            DEFAULT_DENSITY
        } else {
            density.clamp(0.0, 1.0)
        };
        let cells = (0..size * size)
            .map(|_| Cell::from(rng.random_bool(density)))
            .collect();
        Self { size, cells }
    }

    /// Create a grid with the given (row, col) pairs alive.
    ///
    /// Pairs outside `0..size` in either coordinate are skipped.
    pub fn from_coordinates<I>(size: usize, coordinates: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut grid = Self::new(size);
        let bound = size as i64;
        for (x, y) in coordinates {
            if (0..bound).contains(&x) && (0..bound).contains(&y) {
                let idx = grid.index(x as usize, y as usize);
                grid.cells[idx] = Cell::Alive;
            } else {
                tracing::debug!(x, y, size, "skipping out-of-range coordinate");
            }
        }
        grid
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    fn wrap(&self, value: isize) -> usize {
        value.rem_euclid(self.size as isize) as usize
    }

    /// Cell state at the wrapped coordinates
    pub fn cell_state(&self, row: isize, col: isize) -> Cell {
        if self.size == 0 {
            return Cell::Dead;
        }
        self.cells[self.index(self.wrap(row), self.wrap(col))]
    }

    /// Set the cell at the wrapped coordinates
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) {
        if self.size == 0 {
            return;
        }
        let idx = self.index(self.wrap(row), self.wrap(col));
        self.cells[idx] = cell;
    }

    /// Count living cells among the 8 toroidal neighbors
    pub fn count_alive_neighbors(&self, row: isize, col: isize) -> u8 {
        if self.size == 0 {
            return 0;
        }
        let (row, col) = (self.wrap(row) as isize, self.wrap(col) as isize);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter(|&(dr, dc)| self.cell_state(row + dr, col + dc).is_alive())
            .count() as u8
    }

    /// Stamp a glider whose top-left corner is at (row, col)
    pub fn add_glider(&mut self, row: isize, col: isize) {
        if self.size == 0 {
            return;
        }
        let (row, col) = (self.wrap(row) as isize, self.wrap(col) as isize);
        for (dr, pattern_row) in GLIDER.iter().enumerate() {
            for (dc, &cell) in pattern_row.iter().enumerate() {
                self.set(row + dr as isize, col + dc as isize, cell);
            }
        }
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.cells[self.index(row, col)].is_alive())
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let symbol = if cell.is_alive() { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
