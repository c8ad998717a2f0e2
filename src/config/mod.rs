//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
    DEFAULT_GENERATIONS, DEFAULT_GRID_SIZE, DEFAULT_UPDATE_INTERVAL_MS, MIN_GRID_SIZE,
};
