//! Timed presentation of successive generations

pub mod driver;

pub use driver::{AnimationDriver, RunSummary};

use crate::game_of_life::Grid;
use anyhow::Result;

/// Consumer of rendered generations.
///
/// The driver calls `present` once for the initial grid (generation 0) and
/// once after every step.
pub trait FrameSink {
    fn present(&mut self, grid: &Grid, generation: usize) -> Result<()>;

    /// Called once after the last frame
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F> FrameSink for F
where
    F: FnMut(&Grid, usize) -> Result<()>,
{
    fn present(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        self(grid, generation)
    }
}
