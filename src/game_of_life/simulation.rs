//! Double-buffered simulation runner

use super::{GameOfLifeRules, Grid};
use tracing::debug;

/// Owns the live grid and a scratch buffer of the same size.
///
/// Each step reads `current`, writes `scratch`, then swaps the two.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    scratch: Grid,
    generation: usize,
    changed: bool,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let scratch = Grid::new(grid.size());
        Self {
            current: grid,
            scratch,
            generation: 0,
            changed: true,
        }
    }

    /// Advance one generation and return the new state
    pub fn step(&mut self) -> &Grid {
        GameOfLifeRules::step_into(&self.current, &mut self.scratch);
        self.changed = self.current != self.scratch;
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        debug!(
            generation = self.generation,
            alive = self.current.living_count(),
            "stepped"
        );
        &self.current
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.current.is_empty()
    }

    /// True when the most recent step left the grid unchanged
    pub fn is_stable(&self) -> bool {
        self.generation > 0 && !self.changed
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }
}

/// Yields the state after each successive step, without end.
impl Iterator for Simulation {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        Some(self.step().clone())
    }
}
