//! Display and output formatting utilities

use crate::animation::FrameSink;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.size() * (grid.size() + 1) * 3);
        for row in grid.cells().chunks(grid.size().max(1)) {
            for cell in row {
                output.push(if cell.is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Title shown above each frame
    pub fn frame_title(generation: usize) -> String {
        format!("Generation = {}", generation)
    }
}

/// Row-major pixel intensities: 255 for alive, 0 for dead
pub fn intensity_frame(grid: &Grid) -> Vec<u8> {
    grid.cells().iter().map(|cell| cell.intensity()).collect()
}

/// Renders frames as block characters
pub struct TerminalSink<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        writeln!(self.out, "{}", GridFormatter::frame_title(generation))?;
        write!(self.out, "{}", GridFormatter::format_grid_compact(grid))?;
        self.out.flush().context("Failed to flush terminal output")
    }
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    generation: usize,
    size: usize,
    alive: &'a [(usize, usize)],
}

/// Writes one JSON object per line per frame
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonSink<W> {
    fn present(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        let alive = grid.living_cells();
        let frame = JsonFrame {
            generation,
            size: grid.size(),
            alive: &alive,
        };
        serde_json::to_writer(&mut self.out, &frame).context("Failed to serialize frame")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush JSON output")
    }
}

/// Keeps the latest frame as a pixel buffer for a graphical front end
#[derive(Debug, Default)]
pub struct IntensitySink {
    pub size: usize,
    pub generation: usize,
    pub pixels: Vec<u8>,
}

impl FrameSink for IntensitySink {
    fn present(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        self.size = grid.size();
        self.generation = generation;
        self.pixels = intensity_frame(grid);
        Ok(())
    }
}

impl IntensitySink {
    pub fn pixel(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            self.pixels.get(row * self.size + col).copied()
        } else {
            None
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Cell;

    fn sample() -> Grid {
        Grid::from_coordinates(9, vec![(0, 0), (1, 2), (8, 8)])
    }

    #[test]
    fn test_grid_formatting() {
        let compact = GridFormatter::format_grid_compact(&sample());
        let lines: Vec<&str> = compact.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "█········");
        assert_eq!(lines[1], "··█······");

    }

    #[test]
    fn test_intensity_frame() {
        let pixels = intensity_frame(&sample());
        assert_eq!(pixels.len(), 81);
        assert_eq!(pixels[0], 255);
        assert_eq!(pixels[1], 0);
        assert_eq!(pixels[11], 255);
        assert_eq!(pixels.iter().filter(|&&p| p == 255).count(), 3);
    }

    #[test]
    fn test_terminal_sink() {
        let mut sink = TerminalSink::new(Vec::new(), false);
        sink.present(&sample(), 1).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("Generation = 1\n█"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_json_sink() {
        let mut sink = JsonSink::new(Vec::new());
        sink.present(&sample(), 0).unwrap();
        sink.present(&Grid::new(9), 1).unwrap();
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let frames: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["generation"], 0);
        assert_eq!(frames[0]["size"], 9);
        assert_eq!(frames[0]["alive"][1], serde_json::json!([1, 2]));
        assert_eq!(frames[1]["alive"], serde_json::json!([]));
    }

    #[test]
    fn test_intensity_sink() {
        let mut sink = IntensitySink::default();
        sink.present(&sample(), 4).unwrap();

        assert_eq!(sink.generation, 4);
        assert_eq!(sink.pixel(8, 8), Some(Cell::Alive.intensity()));
        assert_eq!(sink.pixel(4, 4), Some(Cell::Dead.intensity()));
        assert_eq!(sink.pixel(9, 0), None);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
