//! Coordinate pattern files
//!
//! Format: the first line is a free-form title, the second line begins with
//! the number of generations to run, and every following line holds one
//! `x y` pair naming a live cell (x is the row, y the column).

use super::Grid;
use crate::error::LifeError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A parsed pattern file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFile {
    pub title: String,
    pub generations: usize,
    pub coordinates: Vec<(i64, i64)>,
}

impl PatternFile {
    /// Place the coordinates on an empty grid, skipping any out of range
    pub fn into_grid(self, size: usize) -> Grid {
        let bound = size as i64;
        let skipped = self
            .coordinates
            .iter()
            .filter(|&&(x, y)| !(0..bound).contains(&x) || !(0..bound).contains(&y))
            .count();
        if skipped > 0 {
            warn!(skipped, size, "pattern cells fall outside the grid");
        }
        Grid::from_coordinates(size, self.coordinates)
    }
}

/// Load a pattern from a text file
pub fn load_pattern_file<P: AsRef<Path>>(path: P) -> Result<PatternFile> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a pattern from its string representation
pub fn parse_pattern(content: &str) -> Result<PatternFile, LifeError> {
    let mut lines = content.lines();
    let title = lines.next().ok_or(LifeError::MissingHeader)?;
    let count_line = lines.next().ok_or(LifeError::MissingHeader)?;

    let generations = count_line
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| LifeError::InvalidGenerationCount {
            line: count_line.to_string(),
        })?;

    let mut coordinates = Vec::new();
    for (idx, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut tokens = trimmed.split_whitespace().map(str::parse::<i64>);
        match (tokens.next(), tokens.next()) {
            (Some(Ok(x)), Some(Ok(y))) => coordinates.push((x, y)),
            _ => {
                return Err(LifeError::InvalidCoordinate {
                    line_number: idx + 3,
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(PatternFile {
        title: title.trim().to_string(),
        generations,
        coordinates,
    })
}

/// Render a grid's live cells in pattern file format
pub fn pattern_to_string(title: &str, generations: usize, grid: &Grid) -> String {
    let mut result = format!("{}\n{}\n", title, generations);
    for (row, col) in grid.living_cells() {
        result.push_str(&format!("{} {}\n", row, col));
    }
    result
}

/// Save a grid to a pattern file
pub fn save_pattern_file<P: AsRef<Path>>(
    path: P,
    title: &str,
    generations: usize,
    grid: &Grid,
) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, pattern_to_string(title, generations, grid))
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))
}

/// Create example pattern files and return the paths written.
///
/// Existing files are left alone unless `overwrite` is set.
pub fn create_example_patterns<P: AsRef<Path>>(
    output_dir: P,
    overwrite: bool,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("block.txt", "Block (still life)", 10, vec![(2, 2), (2, 3), (3, 2), (3, 3)]),
        ("blinker.txt", "Blinker (period 2)", 10, vec![(4, 3), (4, 4), (4, 5)]),
        ("glider.txt", "Glider", 40, vec![(1, 3), (2, 1), (2, 3), (3, 2), (3, 3)]),
        (
            "beacon.txt",
            "Beacon (period 2)",
            10,
            vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 3), (3, 4), (4, 3), (4, 4)],
        ),
    ];

    let mut written = Vec::new();
    for (filename, title, generations, cells) in examples {
        let path = dir.join(filename);
        if path.exists() && !overwrite {
            continue;
        }
        let grid = Grid::from_coordinates(10, cells);
        save_pattern_file(&path, title, generations, &grid)
            .with_context(|| format!("Failed to write {}", filename))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let content = "my pattern\n25 generations\n1 2\n3 4\n";
        let pattern = parse_pattern(content).unwrap();

        assert_eq!(pattern.title, "my pattern");
        assert_eq!(pattern.generations, 25);
        assert_eq!(pattern.coordinates, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let content = "\n7\n  1\t2  \n\n5   6\n";
        let pattern = parse_pattern(content).unwrap();

        assert_eq!(pattern.generations, 7);
        assert_eq!(pattern.coordinates, vec![(1, 2), (5, 6)]);
    }

    #[test]
    fn test_header_only() {
        let pattern = parse_pattern("empty\n3\n").unwrap();
        assert!(pattern.coordinates.is_empty());
        assert!(pattern.into_grid(9).is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(parse_pattern(""), Err(LifeError::MissingHeader));
        assert_eq!(parse_pattern("title only\n"), Err(LifeError::MissingHeader));
    }

    #[test]
    fn test_invalid_generation_count() {
        let err = parse_pattern("title\nten\n1 1\n").unwrap_err();
        assert_eq!(
            err,
            LifeError::InvalidGenerationCount {
                line: "ten".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_coordinate() {
        let err = parse_pattern("title\n5\n1 1\n2 x\n").unwrap_err();
        assert_eq!(
            err,
            LifeError::InvalidCoordinate {
                line_number: 4,
                line: "2 x".to_string()
            }
        );
        assert!(parse_pattern("title\n5\n7\n").is_err());
    }

    #[test]
    fn test_out_of_range_skipped() {
        let n = 12;
        let content = format!("title\n1\n{n} {n}\n{} 3\n", n + 5);
        let grid = parse_pattern(&content).unwrap().into_grid(n as usize);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_pattern_to_string() {
        let grid = Grid::from_coordinates(9, vec![(0, 1), (2, 0)]);
        assert_eq!(pattern_to_string("two", 3, &grid), "two\n3\n0 1\n2 0\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/pattern.txt");

        let original = Grid::from_coordinates(10, vec![(1, 1), (8, 9)]);
        save_pattern_file(&file_path, "saved", 6, &original).unwrap();

        let loaded = load_pattern_file(&file_path).unwrap();
        assert_eq!(loaded.generations, 6);
        assert_eq!(loaded.into_grid(10), original);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_pattern_file(temp_dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        let written = create_example_patterns(temp_dir.path(), false).unwrap();
        assert_eq!(written.len(), 4);

        for name in ["block.txt", "blinker.txt", "glider.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists(), "{name}");
        }

        let glider = load_pattern_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.generations, 40);
        assert_eq!(glider.coordinates.len(), 5);
    }

    #[test]
    fn test_example_patterns_keep_existing_files() {
        let temp_dir = tempdir().unwrap();
        let block = temp_dir.path().join("block.txt");
        std::fs::write(&block, "mine\n1\n0 0\n").unwrap();

        let written = create_example_patterns(temp_dir.path(), false).unwrap();
        assert_eq!(written.len(), 3);
        assert!(!written.contains(&block));
        assert_eq!(std::fs::read_to_string(&block).unwrap(), "mine\n1\n0 0\n");

        let written = create_example_patterns(temp_dir.path(), true).unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(load_pattern_file(&block).unwrap().coordinates.len(), 4);
    }
}
