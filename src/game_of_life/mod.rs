//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;
pub mod simulation;

pub use grid::{Cell, Grid, DEFAULT_DENSITY};
pub use io::{
    create_example_patterns, load_pattern_file, parse_pattern, pattern_to_string,
    save_pattern_file, PatternFile,
};
pub use rules::GameOfLifeRules;
pub use simulation::Simulation;
