//! Plot sizing and behavior configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::geom::{ScreenPoint, ScreenRect};

/// Outer plot size and the padding reserved for axes on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotDimensions {
    /// Total width in pixels.
    pub width: f64,
    /// Total height in pixels.
    pub height: f64,
    /// Padding on each side in pixels.
    pub padding: f64,
}

impl PlotDimensions {
    /// Create dimensions from explicit values.
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width available to data.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height available to data.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// The data area in screen space.
    pub fn plot_rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(self.padding as f32, self.padding as f32),
            ScreenPoint::new(
                (self.width - self.padding) as f32,
                (self.height - self.padding) as f32,
            ),
        )
    }

    /// Reject dimensions that leave no finite, positive data area.
    pub fn validate(&self) -> Result<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.padding.is_finite();
        if !finite || self.padding < 0.0 || self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(PlotError::InvalidDimensions {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }
}

impl Default for PlotDimensions {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
            padding: 70.0,
        }
    }
}

/// Configuration for a scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Outer size and padding.
    pub dimensions: PlotDimensions,
    /// Number of ticks per axis, endpoints included.
    pub tick_count: usize,
    /// Number of neighbors highlighted by a neighbor query.
    pub neighbor_count: usize,
    /// Marker half-size in pixels.
    pub marker_size: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dimensions: PlotDimensions::default(),
            tick_count: 8,
            neighbor_count: 5,
            marker_size: 7.0,
        }
    }
}
