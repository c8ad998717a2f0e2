//! Command line runner for Conway's Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_life::{
    animation::{AnimationDriver, FrameSink},
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, Simulation},
    initial_grid,
    utils::{ColorOutput, JsonSink, TerminalSink},
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Runs Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid side length (minimum 9)
        #[arg(long)]
        size: Option<usize>,

        /// Update interval in milliseconds
        #[arg(long)]
        update: Option<u64>,

        /// Pattern file with the initial live cells
        #[arg(long)]
        filename: Option<PathBuf>,

        /// Number of generations (overrides the pattern file)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Seed for the random initial grid
        #[arg(long)]
        seed: Option<u64>,

        /// Start from an empty grid with a single glider
        #[arg(long)]
        glider: bool,

        /// Frame output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size,
            update,
            filename,
            generations,
            seed,
            glider,
            format,
            verbose,
        } => {
            init_tracing(verbose);
            let overrides = CliOverrides {
                size,
                update_interval_ms: update,
                generations,
                seed,
                pattern_file: filename,
                glider,
                format,
            };
            run_command(&config, &overrides).inspect_err(|err| {
                eprintln!("{}", ColorOutput::error(&format!("Run failed: {:#}", err)));
            })
        }
        Commands::Setup { directory, force } => {
            init_tracing(false);
            setup_command(&directory, force)
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;

    let (grid, generations) = initial_grid(&settings).context("Failed to build initial grid")?;
    let mut simulation = Simulation::new(grid);
    let driver = AnimationDriver::from_settings(&settings, generations);

    let stdout = std::io::stdout().lock();
    let mut sink: Box<dyn FrameSink> = match settings.output.format {
        OutputFormat::Text => Box::new(TerminalSink::new(stdout, settings.output.clear_screen)),
        OutputFormat::Json => Box::new(JsonSink::new(stdout)),
    };

    let summary = driver.run(&mut simulation, sink.as_mut())?;

    if summary.extinct_at.is_some() {
        warn!(generation = ?summary.extinct_at, "no live cells remain");
    }
    info!(
        generations = summary.generations_run,
        alive = summary.final_alive,
        "simulation complete"
    );
    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up example files..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)?;

    let written = create_example_patterns(&patterns_dir, force)
        .context("Failed to create example patterns")?;
    println!(
        "Created {} example pattern(s) in: {}",
        written.len(),
        patterns_dir.display()
    );

    let mut glider_config = Settings::default();
    glider_config.simulation.size = 20;
    glider_config.simulation.update_interval_ms = 100;
    glider_config.input.pattern_file = Some(patterns_dir.join("glider.txt"));
    write_config(&config_dir.join("glider.yaml"), &glider_config, force)?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("  cargo run -- run --config {}", config_dir.join("glider.yaml").display());
    println!("  cargo run -- run --size 40 --update 100");

    Ok(())
}

fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }
    settings
        .to_file(path)
        .with_context(|| format!("Failed to create configuration {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}
