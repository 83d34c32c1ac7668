//! Coordinate transforms between data and screen space.

use tracing::{debug, warn};

use crate::config::PlotDimensions;
use crate::geom::{Point, ScreenPoint};
use crate::view::{Bounds, Range};

/// Maps data coordinates into plot pixels for one set of bounds and
/// dimensions.
///
/// Y is inverted so larger data values sit higher on screen. An axis whose
/// bounds have zero span maps every value to the center of that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    bounds: Bounds,
    dimensions: PlotDimensions,
}

impl Scaler {
    /// Create a scaler for the given bounds and dimensions.
    ///
    /// `dimensions` are expected to pass [`PlotDimensions::validate`]. An axis
    /// with no drawable extent maps screen points back to its range midpoint.
    pub fn new(bounds: Bounds, dimensions: PlotDimensions) -> Self {
        if !bounds.x.is_valid() || !bounds.y.is_valid() {
            warn!(
                x_span = bounds.x.span(),
                y_span = bounds.y.span(),
                "degenerate axis range, mapping to plot center"
            );
        }
        debug!(?bounds, ?dimensions, "scaler built");
        Self { bounds, dimensions }
    }

    /// Access the bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Access the dimensions.
    pub fn dimensions(&self) -> PlotDimensions {
        self.dimensions
    }

    /// Map a data X value to a pixel X coordinate.
    pub fn scale_x(&self, x: f64) -> f64 {
        let dims = &self.dimensions;
        dims.padding + normalize(x, self.bounds.x) * dims.plot_width()
    }

    /// Map a data Y value to a pixel Y coordinate.
    pub fn scale_y(&self, y: f64) -> f64 {
        let dims = &self.dimensions;
        dims.height - dims.padding - normalize(y, self.bounds.y) * dims.plot_height()
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.scale_x(point.x) as f32, self.scale_y(point.y) as f32)
    }

    /// Map a screen point back into data space.
    ///
    /// A degenerate axis maps back to its single data value.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        let dims = &self.dimensions;
        let x_norm = screen_norm(point.x as f64 - dims.padding, dims.plot_width());
        let y_norm = screen_norm(dims.height - dims.padding - point.y as f64, dims.plot_height());
        Point::new(
            denormalize(x_norm, self.bounds.x),
            denormalize(y_norm, self.bounds.y),
        )
    }
}

fn normalize(value: f64, range: Range) -> f64 {
    if range.span() == 0.0 {
        return 0.5;
    }
    (value - range.min) / range.span()
}

fn screen_norm(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.5;
    }
    offset / extent
}

fn denormalize(norm: f64, range: Range) -> f64 {
    if range.span() == 0.0 {
        return range.midpoint();
    }
    range.min + norm * range.span()
}
