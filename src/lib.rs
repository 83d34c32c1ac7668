//! quadplot computes everything a scatter plot needs besides the drawing:
//! padded bounds, data-to-pixel scaling, axis ticks, category styles, and
//! two point-selection analyses (quadrants around an origin, and nearest
//! neighbors of a query point).

#![forbid(unsafe_code)]

pub mod analytics;
pub mod axis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod plot;
pub mod render;
pub mod style;
pub mod transform;
pub mod view;

pub use analytics::{Quadrant, euclidean_distance, find_nearest_neighbors, quadrant};
pub use axis::{Axis, AxisFormatter, Tick, generate_ticks};
pub use config::{PlotConfig, PlotDimensions};
pub use dataset::{DataPoint, Dataset};
pub use error::{PlotError, Result};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use interaction::{STYLE_RULES, Selection, StyleRule};
pub use plot::{ScatterPlot, ScatterPlotBuilder};
pub use render::{
    Color, Legend, LegendEntry, LineStyle, Marker, MarkerShape, PointStyle, RenderCommand,
    RenderList, TextAnchor, TextStyle,
};
pub use style::{CategoryStyle, CategoryStyles, Theme};
pub use transform::Scaler;
pub use view::{Bounds, Range};
