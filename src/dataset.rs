//! Labeled point datasets and their plain-text ingestion.
//!
//! The text format is one point per line, `x,y,category`, without a header.
//! Blank lines are skipped and the category is trimmed.

use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::geom::Point;

/// A labeled point in data space.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
    /// Category label.
    pub category: String,
}

impl DataPoint {
    /// Create a labeled point.
    pub fn new(x: f64, y: f64, category: impl Into<String>) -> Self {
        Self {
            x,
            y,
            category: category.into(),
        }
    }

    /// Position of the point without its label.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered, non-empty sequence of labeled points.
///
/// Points are identified by their index, which stays stable for the lifetime
/// of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Wrap a list of points, rejecting an empty one.
    pub fn new(points: Vec<DataPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(PlotError::EmptyDataset);
        }
        Ok(Self { points })
    }

    /// Parse `x,y,category` lines.
    pub fn parse(text: &str) -> Result<Self> {
        let mut points = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            points.push(parse_line(line, line_index + 1)?);
        }
        debug!(points = points.len(), "parsed dataset");
        Self::new(points)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading dataset");
        Self::parse(&text)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the dataset has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access all points in order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Access a point, failing fast on a stale or invalid index.
    pub fn get(&self, index: usize) -> Result<&DataPoint> {
        self.points.get(index).ok_or(PlotError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    /// Iterate over point positions.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(DataPoint::position)
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for point in &self.points {
            if !seen.contains(&point.category.as_str()) {
                seen.push(&point.category);
            }
        }
        seen
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<DataPoint> {
    let mut fields = line.split(',');
    let x = parse_coordinate(fields.next(), "x", line_number)?;
    let y = parse_coordinate(fields.next(), "y", line_number)?;
    let category = fields.next().ok_or(PlotError::MissingField {
        line: line_number,
        field: "category",
    })?;
    Ok(DataPoint::new(x, y, category.trim()))
}

fn parse_coordinate(field: Option<&str>, name: &'static str, line: usize) -> Result<f64> {
    let raw = field.ok_or(PlotError::MissingField { line, field: name })?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PlotError::InvalidNumber {
            line,
            field: name,
            value: raw.to_string(),
        }),
    }
}
