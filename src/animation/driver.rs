//! Fixed-interval animation loop

use super::FrameSink;
use crate::config::Settings;
use crate::game_of_life::Simulation;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Drives a simulation, presenting one frame per interval
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    interval: Duration,
    generations: usize,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_run: usize,
    pub frames_presented: usize,
    pub final_alive: usize,
    pub extinct_at: Option<usize>,
    pub stable_at: Option<usize>,
}

impl AnimationDriver {
    pub fn new(interval: Duration, generations: usize) -> Self {
        Self {
            interval,
            generations,
        }
    }

    pub fn from_settings(settings: &Settings, generations: usize) -> Self {
        Self::new(
            Duration::from_millis(settings.simulation.update_interval_ms),
            generations,
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Present the current grid, then step and present until the configured
    /// number of generations has been shown.
    pub fn run<S: FrameSink + ?Sized>(
        &self,
        simulation: &mut Simulation,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary {
            generations_run: 0,
            frames_presented: 0,
            final_alive: simulation.current().living_count(),
            extinct_at: None,
            stable_at: None,
        };

        info!(
            generations = self.generations,
            interval_ms = self.interval.as_millis() as u64,
            "starting animation"
        );

        sink.present(simulation.current(), simulation.generation())
            .context("Failed to present initial frame")?;
        summary.frames_presented += 1;

        let mut next_frame = Instant::now() + self.interval;
        for _ in 0..self.generations {
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            }
            next_frame += self.interval;

            simulation.step();
            let generation = simulation.generation();
            sink.present(simulation.current(), generation)
                .with_context(|| format!("Failed to present generation {}", generation))?;
            summary.generations_run += 1;
            summary.frames_presented += 1;

            if summary.extinct_at.is_none() && simulation.is_extinct() {
                info!(generation, "population died out");
                summary.extinct_at = Some(generation);
            }
            if summary.stable_at.is_none() && simulation.is_stable() {
                info!(generation, "grid reached a fixed point");
                summary.stable_at = Some(generation);
            }
        }

        sink.finish()?;
        summary.final_alive = simulation.current().living_count();
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "animation finished");
        Ok(summary)
    }
}
