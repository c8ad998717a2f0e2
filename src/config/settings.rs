//! Configuration settings for the Game of Life runner

use crate::error::LifeError;
use crate::game_of_life::DEFAULT_DENSITY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Smallest grid side length the runner accepts
pub const MIN_GRID_SIZE: usize = 9;
pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 200;
/// Generations to run when no pattern file supplies a count
pub const DEFAULT_GENERATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub size: usize,
    pub update_interval_ms: u64,
    /// Overrides the pattern file's generation count when set
    #[serde(default)]
    pub generations: Option<usize>,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
    #[serde(default)]
    pub glider: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                size: DEFAULT_GRID_SIZE,
                update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
                generations: None,
                density: DEFAULT_DENSITY,
                seed: None,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.size < MIN_GRID_SIZE {
            return Err(LifeError::GridTooSmall {
                size: self.simulation.size,
                min: MIN_GRID_SIZE,
            }
            .into());
        }

        if self.simulation.update_interval_ms == 0 {
            return Err(LifeError::ZeroInterval.into());
        }

        if !(0.0..=1.0).contains(&self.simulation.density) {
            anyhow::bail!(
                "Density must be between 0 and 1, got {}",
                self.simulation.density
            );
        }

        if let Some(ref file) = self.input.pattern_file {
            if !file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.simulation.size = size;
        }
        if let Some(interval) = cli_overrides.update_interval_ms {
            self.simulation.update_interval_ms = interval;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if cli_overrides.glider {
            self.input.glider = true;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub update_interval_ms: Option<u64>,
    pub generations: Option<usize>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub glider: bool,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.size, 100);
        assert_eq!(settings.simulation.update_interval_ms, 200);
        assert!(settings.input.pattern_file.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_minimum_size() {
        let mut settings = Settings::default();
        settings.simulation.size = 8;
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<LifeError>(),
            Some(&LifeError::GridTooSmall { size: 8, min: 9 })
        );

        settings.simulation.size = 9;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut settings = Settings::default();
        settings.simulation.update_interval_ms = 0;
        let err = settings.validate().unwrap_err();
        assert_eq!(err.downcast_ref::<LifeError>(), Some(&LifeError::ZeroInterval));
    }

    #[test]
    fn test_missing_pattern_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.input.pattern_file = Some(temp_dir.path().join("nope.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.size = 40;
        settings.simulation.seed = Some(3);
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_optional_fields_default() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("minimal.yaml");
        std::fs::write(
            &path,
            "simulation:\n  size: 20\n  update_interval_ms: 50\ninput: {}\noutput:\n  format: text\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.simulation.size, 20);
        assert_eq!(settings.simulation.density, DEFAULT_DENSITY);
        assert!(settings.output.clear_screen);
        assert!(!settings.input.glider);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            size: Some(30),
            update_interval_ms: Some(50),
            generations: Some(4),
            pattern_file: Some(PathBuf::from("glider.txt")),
            format: Some(OutputFormat::Json),
            ..CliOverrides::default()
        });

        assert_eq!(settings.simulation.size, 30);
        assert_eq!(settings.simulation.update_interval_ms, 50);
        assert_eq!(settings.simulation.generations, Some(4));
        assert_eq!(settings.input.pattern_file, Some(PathBuf::from("glider.txt")));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.simulation.seed, None);
    }
}
