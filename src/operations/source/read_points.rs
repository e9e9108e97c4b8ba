use std::path::{Path, PathBuf};

use crate::error::{Result, SourceError};
use crate::math::Point2;

/// Parses one `x,y` record per line.
///
/// Lines that do not have exactly two comma-separated fields are skipped.
/// Lines whose fields are not finite numbers are skipped and logged; unlike
/// the Qt reader this replaces, `inf` and `nan` are rejected too.
#[must_use]
pub fn parse_points(text: &str) -> Vec<Point2> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let fields: Vec<&str> = line.split(',').collect();
            let [x, y] = fields.as_slice() else {
                return None;
            };
            match (parse_coord(x), parse_coord(y)) {
                (Some(x), Some(y)) => Some(Point2::new(x, y)),
                _ => {
                    tracing::debug!(line = idx + 1, record = line, "skipping malformed record");
                    None
                }
            }
        })
        .collect()
}

fn parse_coord(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Loads a point sequence from a comma-separated text file.
pub struct ReadPoints {
    path: PathBuf,
}

impl ReadPoints {
    /// Creates a new `ReadPoints` operation.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let points = parse_points(&text);
        tracing::info!(path = %self.path.display(), count = points.len(), "loaded points");
        Ok(points)
    }

    /// Reads the file, yielding an empty sequence if it cannot be read.
    #[must_use]
    pub fn execute_or_empty(&self) -> Vec<Point2> {
        self.execute().unwrap_or_else(|err| {
            tracing::warn!("{err}");
            Vec::new()
        })
    }
}
