//! Conway's Game of Life
//!
//! A B3/S23 simulation on a toroidal grid, with a coordinate-file loader and
//! pluggable frame sinks for presenting each generation.

pub mod animation;
pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, GameOfLifeRules, Grid, Simulation};

use anyhow::Result;
use config::DEFAULT_GENERATIONS;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Build the initial grid described by the settings.
///
/// A pattern file wins over the glider demo, which wins over random fill.
/// Returns the grid together with the number of generations to run.
pub fn initial_grid(settings: &Settings) -> Result<(Grid, usize)> {
    let size = settings.simulation.size;
    let configured = settings.simulation.generations;

    if let Some(ref path) = settings.input.pattern_file {
        let pattern = game_of_life::load_pattern_file(path)?;
        let generations = configured.unwrap_or(pattern.generations);
        info!(
            path = %path.display(),
            cells = pattern.coordinates.len(),
            generations,
            "loaded pattern"
        );
        return Ok((pattern.into_grid(size), generations));
    }

    let generations = configured.unwrap_or(DEFAULT_GENERATIONS);

    if settings.input.glider {
        let mut grid = Grid::new(size);
        grid.add_glider(1, 1);
        return Ok((grid, generations));
    }

    let density = settings.simulation.density;
    let grid = match settings.simulation.seed {
        Some(seed) => Grid::random_with_rng(size, density, &mut StdRng::seed_from_u64(seed)),
        None => Grid::random_with_rng(size, density, &mut rand::rng()),
    };
    info!(size, density, alive = grid.living_count(), "random grid");
    Ok((grid, generations))
}
