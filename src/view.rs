//! Data ranges and padded plot bounds.

use crate::error::{PlotError, Result};
use crate::geom::Point;

/// Fraction of each axis' data range added as padding on both sides.
pub const BOUNDS_PADDING_FRAC: f64 = 0.1;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Widen both ends by `frac` of the span.
    ///
    /// A zero-span range stays zero-span.
    pub fn padded(&self, frac: f64) -> Self {
        let padding = self.span().abs() * frac;
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }
}

/// Padded data extent on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Bounds {
    /// Create bounds from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Compute padded bounds covering every point.
    ///
    /// Each axis spans the data min/max widened by 10% of that axis' range on
    /// both sides. Non-finite coordinates are skipped on every point alike.
    /// Empty input, or an axis with no finite value, is rejected.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut x: Option<Range> = None;
        let mut y: Option<Range> = None;
        let mut any = false;
        for point in points {
            any = true;
            include_finite(&mut x, point.x);
            include_finite(&mut y, point.y);
        }
        if !any {
            return Err(PlotError::EmptyDataset);
        }
        let x = x.ok_or(PlotError::NoFiniteValues { axis: "x" })?;
        let y = y.ok_or(PlotError::NoFiniteValues { axis: "y" })?;
        Ok(Self::new(x, y).padded(BOUNDS_PADDING_FRAC))
    }

    /// Apply padding to both axes.
    pub fn padded(&self, frac: f64) -> Self {
        Self {
            x: self.x.padded(frac),
            y: self.y.padded(frac),
        }
    }

    /// Lower X bound.
    pub fn x_min(&self) -> f64 {
        self.x.min
    }

    /// Upper X bound.
    pub fn x_max(&self) -> f64 {
        self.x.max
    }

    /// Lower Y bound.
    pub fn y_min(&self) -> f64 {
        self.y.min
    }

    /// Upper Y bound.
    pub fn y_max(&self) -> f64 {
        self.y.max
    }
}

fn include_finite(range: &mut Option<Range>, value: f64) {
    if !value.is_finite() {
        return;
    }
    match range {
        Some(current) => current.expand_to_include(value),
        None => *range = Some(Range::new(value, value)),
    }
}
