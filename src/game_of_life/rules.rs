//! Game of Life rules implementation

use super::{Cell, Grid};
use itertools::iproduct;

/// B3/S23 rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Evolve the grid one generation forward.
    ///
    /// Every cell reads the unmodified input, so the result never depends on
    /// the order in which cells are visited.
    pub fn step(current: &Grid) -> Grid {
        let mut next = Grid::new(current.size());
        Self::step_into(current, &mut next);
        next
    }

    /// Write the successor of `current` into `next`.
    ///
    /// `next` is resized to match `current` if the sizes differ.
    pub fn step_into(current: &Grid, next: &mut Grid) {
        if next.size() != current.size() {
            *next = Grid::new(current.size());
        }

        let size = current.size();
        let out = next.cells_mut();
        for (row, col) in iproduct!(0..size, 0..size) {
            let (r, c) = (row as isize, col as isize);
            let neighbors = current.count_alive_neighbors(r, c);
            out[row * size + col] = Self::next_state(current.cell_state(r, c), neighbors);
        }
    }

    /// Evolve the grid for multiple generations
    pub fn step_generations(grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut next = Grid::new(grid.size());
        for _ in 0..generations {
            Self::step_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }

    /// State of a cell in the next generation given its neighbor count
    pub fn next_state(cell: Cell, neighbor_count: u8) -> Cell {
        let counts = match cell {
            Cell::Alive => Self::survival_neighbor_counts(),
            Cell::Dead => Self::birth_neighbor_counts(),
        };
        Cell::from(counts.contains(&neighbor_count))
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &[3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &[2, 3]
    }
}
