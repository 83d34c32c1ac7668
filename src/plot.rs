//! Scatter plot entry points and builders.

use tracing::debug;

use crate::analytics::{Quadrant, find_nearest_neighbors, quadrant};
use crate::axis::{Axis, AxisFormatter, Tick, axis_ticks};
use crate::config::{PlotConfig, PlotDimensions};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geom::ScreenPoint;
use crate::interaction::{STYLE_RULES, Selection, StyleContext, resolve_style};
use crate::render::{
    Frame, Legend, LegendEntry, Marker, MarkerShape, PointStyle, RenderList, build_frame,
};
use crate::style::{CategoryStyles, Theme};
use crate::transform::Scaler;
use crate::view::Bounds;

/// An interactive scatter plot over one dataset.
///
/// Bounds and category styles are fixed for the dataset; the scaler is
/// rebuilt when dimensions change. The only state that user events mutate is
/// the [`Selection`].
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    dataset: Dataset,
    config: PlotConfig,
    theme: Theme,
    formatter: AxisFormatter,
    bounds: Bounds,
    scaler: Scaler,
    categories: CategoryStyles,
    selection: Selection,
}

impl ScatterPlot {
    /// Create a plot with default configuration.
    pub fn new(dataset: Dataset) -> Result<Self> {
        Self::builder(dataset).build()
    }

    /// Start building a plot with custom configuration.
    pub fn builder(dataset: Dataset) -> ScatterPlotBuilder {
        ScatterPlotBuilder {
            dataset,
            config: PlotConfig::default(),
            theme: Theme::default(),
            formatter: AxisFormatter::default(),
        }
    }

    /// Access the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the padded data bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Access the data-to-pixel scaler.
    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// Access the category styles.
    pub fn categories(&self) -> &CategoryStyles {
        &self.categories
    }

    /// Access the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Resize the plot. The selection is kept.
    pub fn set_dimensions(&mut self, dimensions: PlotDimensions) -> Result<()> {
        dimensions.validate()?;
        self.config.dimensions = dimensions;
        self.scaler = Scaler::new(self.bounds, dimensions);
        Ok(())
    }

    /// Primary action on a point: toggle it as the quadrant origin.
    pub fn select(&mut self, index: usize) -> Result<&Selection> {
        self.dataset.get(index)?;
        self.selection.select(index);
        Ok(&self.selection)
    }

    /// Secondary action on a point: toggle its nearest-neighbor highlight.
    pub fn query_neighbors(&mut self, index: usize) -> Result<&Selection> {
        self.dataset.get(index)?;
        let points = self.dataset.points();
        let count = self.config.neighbor_count;
        self.selection
            .query_neighbors(index, |query| find_nearest_neighbors(points, query, count))?;
        Ok(&self.selection)
    }

    /// Drop any selection.
    pub fn clear_selection(&mut self) {
        debug!("selection cleared");
        self.selection.clear();
    }

    /// Quadrant of a point relative to the active origin.
    ///
    /// `None` when no origin is active or the point is the origin itself.
    pub fn quadrant_of(&self, index: usize) -> Result<Option<Quadrant>> {
        let point = self.dataset.get(index)?;
        let Some(origin_index) = self.selection.origin() else {
            return Ok(None);
        };
        if origin_index == index {
            return Ok(None);
        }
        let origin = self.dataset.get(origin_index)?;
        Ok(Some(quadrant(point.position(), origin.position())))
    }

    /// Pixel position of a point.
    pub fn screen_position(&self, index: usize) -> Result<ScreenPoint> {
        let point = self.dataset.get(index)?;
        Ok(self.scaler.data_to_screen(point.position()))
    }

    /// Fill and border of a point under the current selection.
    pub fn point_style(&self, index: usize) -> Result<PointStyle> {
        let point = self.dataset.get(index)?;
        let origin = match self.selection.origin() {
            Some(origin_index) => Some(self.dataset.get(origin_index)?.position()),
            None => None,
        };
        let category_color = self
            .categories
            .color(&point.category)
            .unwrap_or(self.theme.category_colors[0]);
        let ctx = StyleContext {
            selection: &self.selection,
            index,
            position: point.position(),
            origin,
            category_color,
            theme: &self.theme,
        };
        Ok(resolve_style(&ctx, &STYLE_RULES))
    }

    /// One marker per point, in dataset order.
    pub fn markers(&self) -> Result<Vec<Marker>> {
        self.dataset
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                Ok(Marker {
                    index,
                    position: self.scaler.data_to_screen(point.position()),
                    shape: self
                        .categories
                        .shape(&point.category)
                        .unwrap_or(MarkerShape::Circle),
                    size: self.config.marker_size,
                    style: self.point_style(index)?,
                    tooltip: format!("({}, {}) - {}", point.x, point.y, point.category),
                })
            })
            .collect()
    }

    /// Ticks along the X axis.
    pub fn x_ticks(&self) -> Vec<Tick> {
        axis_ticks(Axis::X, &self.scaler, self.config.tick_count, &self.formatter)
    }

    /// Ticks along the Y axis.
    pub fn y_ticks(&self) -> Vec<Tick> {
        axis_ticks(Axis::Y, &self.scaler, self.config.tick_count, &self.formatter)
    }

    /// Legend content for the current selection.
    pub fn legend(&self) -> Legend {
        let categories = self
            .categories
            .entries()
            .iter()
            .map(|style| LegendEntry {
                label: style.category.clone(),
                color: style.color,
                shape: style.shape,
            })
            .collect();
        let quadrants = match self.selection.origin() {
            Some(_) => Quadrant::ALL
                .iter()
                .map(|&q| LegendEntry {
                    label: format!("Q{}", q.number()),
                    color: self.theme.quadrant_color(q),
                    shape: MarkerShape::Square,
                })
                .collect(),
            None => Vec::new(),
        };
        let caption = self
            .selection
            .neighbor_query()
            .map(|_| self.selection.neighbor_results().len())
            .map(|count| format!("{count} nearest neighbors highlighted"));
        Legend {
            categories,
            quadrants,
            caption,
        }
    }

    /// Assemble the full draw list for the current state.
    pub fn render(&self) -> Result<RenderList> {
        let x_ticks = self.x_ticks();
        let y_ticks = self.y_ticks();
        let origin = match self.selection.origin() {
            Some(index) => Some(self.dataset.get(index)?.position()),
            None => None,
        };
        Ok(build_frame(Frame {
            scaler: &self.scaler,
            theme: &self.theme,
            x_ticks: &x_ticks,
            y_ticks: &y_ticks,
            origin,
            markers: self.markers()?,
        }))
    }

    /// Index of the marker nearest to `cursor` within `threshold_px`, if the
    /// cursor is inside the plot area.
    ///
    /// Later points are drawn on top, so they win exact ties.
    pub fn pick(&self, cursor: ScreenPoint, threshold_px: f32) -> Option<usize> {
        if !self.config.dimensions.plot_rect().contains(cursor) {
            return None;
        }
        let threshold_sq = threshold_px * threshold_px;
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.dataset.points().iter().enumerate() {
            let dist = self.scaler.data_to_screen(point.position()).distance_sq(cursor);
            if dist > threshold_sq {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist <= best_dist) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug)]
pub struct ScatterPlotBuilder {
    dataset: Dataset,
    config: PlotConfig,
    theme: Theme,
    formatter: AxisFormatter,
}

impl ScatterPlotBuilder {
    /// Set the whole configuration.
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the plot dimensions.
    pub fn dimensions(mut self, dimensions: PlotDimensions) -> Self {
        self.config.dimensions = dimensions;
        self
    }

    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the tick label formatter.
    pub fn formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Build the plot, computing bounds, scaler and category styles.
    pub fn build(self) -> Result<ScatterPlot> {
        self.config.dimensions.validate()?;
        let bounds = Bounds::from_points(self.dataset.positions())?;
        let scaler = Scaler::new(bounds, self.config.dimensions);
        let categories = CategoryStyles::new(self.dataset.categories(), &self.theme);
        debug!(
            points = self.dataset.len(),
            categories = categories.len(),
            "scatter plot built"
        );
        Ok(ScatterPlot {
            dataset: self.dataset,
            config: self.config,
            theme: self.theme,
            formatter: self.formatter,
            bounds,
            scaler,
            categories,
            selection: Selection::Idle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataPoint;
    use crate::error::PlotError;
    use crate::render::RenderCommand;

    fn scenario_plot() -> ScatterPlot {
        let dataset = Dataset::parse("0,0,A\n1,1,A\n10,10,B\n1,0,A\n0,1,A\n2,2,B").unwrap();
        ScatterPlot::new(dataset).unwrap()
    }

    #[test]
    fn builds_bounds_and_categories() {
        let plot = scenario_plot();
        assert!((plot.bounds().x_min() - -1.0).abs() < 1e-12);
        assert!((plot.bounds().x_max() - 11.0).abs() < 1e-12);
        let labels: Vec<&str> = plot
            .categories()
            .entries()
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(plot.x_ticks().len(), 8);
    }

    #[test]
    fn neighbor_query_scenario() {
        let mut plot = scenario_plot();
        let selection = plot.query_neighbors(0).unwrap();
        assert_eq!(selection.neighbor_results(), &[3, 4, 1, 5, 2]);

        let style = plot.point_style(3).unwrap();
        assert_eq!(style.fill, plot.theme().neighbor_fill);
        assert_eq!(plot.point_style(0).unwrap().stroke_width, 3.0);

        let legend = plot.legend();
        assert!(legend.quadrants.is_empty());
        assert_eq!(legend.caption.as_deref(), Some("5 nearest neighbors highlighted"));

        plot.query_neighbors(0).unwrap();
        assert!(plot.selection().is_idle());
        assert!(plot.legend().caption.is_none());
    }

    #[test]
    fn origin_switch_clears_neighbors() {
        let mut plot = scenario_plot();
        plot.query_neighbors(0).unwrap();
        plot.select(5).unwrap();
        assert_eq!(plot.selection(), &Selection::Origin(5));
        assert_eq!(plot.quadrant_of(0).unwrap(), Some(Quadrant::III));
        assert_eq!(plot.quadrant_of(2).unwrap(), Some(Quadrant::I));
        assert_eq!(plot.quadrant_of(5).unwrap(), None);
        assert_eq!(plot.legend().quadrants.len(), 4);

        let style = plot.point_style(0).unwrap();
        assert_eq!(style.fill, plot.theme().quadrant_color(Quadrant::III));
    }

    #[test]
    fn stale_index_fails_fast() {
        let mut plot = scenario_plot();
        plot.select(1).unwrap();
        let err = plot.select(6).unwrap_err();
        assert!(matches!(err, PlotError::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(plot.selection(), &Selection::Origin(1));
        assert!(plot.query_neighbors(42).is_err());
        assert!(plot.point_style(6).is_err());
    }

    #[test]
    fn render_includes_guides_only_with_origin() {
        let mut plot = scenario_plot();
        let idle = plot.render().unwrap();
        plot.select(0).unwrap();
        let active = plot.render().unwrap();
        assert_eq!(active.commands().len(), idle.commands().len() + 2);
        assert_eq!(active.markers().count(), 6);

        let marker = active.markers().find(|m| m.index == 2).unwrap();
        assert_eq!(marker.shape, MarkerShape::Square);
        assert_eq!(marker.tooltip, "(10, 10) - B");
        assert!(matches!(active.commands()[0], RenderCommand::Line { .. }));
    }

    #[test]
    fn pick_finds_marker_under_cursor() {
        let plot = scenario_plot();
        let target = plot.screen_position(2).unwrap();
        let cursor = ScreenPoint::new(target.x + 3.0, target.y - 2.0);
        assert_eq!(plot.pick(cursor, 8.0), Some(2));
        assert_eq!(plot.pick(ScreenPoint::new(0.0, 0.0), 8.0), None);
    }

    #[test]
    fn resize_keeps_selection() {
        let mut plot = scenario_plot();
        plot.select(4).unwrap();
        plot.set_dimensions(PlotDimensions::new(400.0, 300.0, 50.0)).unwrap();
        assert_eq!(plot.selection(), &Selection::Origin(4));
        let pos = plot.screen_position(0).unwrap();
        // x = 0 is one padding step (1/12 of the plot width) inside the left edge.
        assert!((pos.x - (50.0 + 300.0 / 12.0)).abs() < 1e-3);
        assert!(plot.set_dimensions(PlotDimensions::new(80.0, 300.0, 50.0)).is_err());
    }

    #[test]
    fn degenerate_dataset_renders_at_center() {
        let dataset = Dataset::new(vec![
            DataPoint::new(2.0, 2.0, "A"),
            DataPoint::new(2.0, 2.0, "B"),
        ])
        .unwrap();
        let plot = ScatterPlot::new(dataset).unwrap();
        assert_eq!(plot.screen_position(1).unwrap(), ScreenPoint::new(350.0, 250.0));
        let ticks = plot.x_ticks();
        assert!(ticks.iter().all(|t| t.label == "2.0" && t.position == 350.0));
    }

    #[test]
    fn non_finite_point_does_not_poison_bounds() {
        assert!(Dataset::parse("NaN,0,A\n1,1,A\n2,2,A").is_err());

        let dataset = Dataset::new(vec![
            DataPoint::new(f64::NAN, 0.0, "A"),
            DataPoint::new(1.0, 1.0, "A"),
            DataPoint::new(2.0, 2.0, "A"),
        ])
        .unwrap();
        let plot = ScatterPlot::new(dataset).unwrap();
        assert!(plot.bounds().x.is_finite());
        assert!((plot.bounds().x_min() - 0.9).abs() < 1e-12);
        assert!((plot.bounds().x_max() - 2.1).abs() < 1e-12);
        assert!(plot.screen_position(1).unwrap().x.is_finite());
    }

    #[test]
    fn builder_applies_config() {
        let dataset = Dataset::parse("0,0,A\n1,1,B\n2,2,C\n3,3,D").unwrap();
        let config = PlotConfig {
            tick_count: 3,
            neighbor_count: 2,
            ..PlotConfig::default()
        };
        let mut plot = ScatterPlot::builder(dataset)
            .config(config)
            .theme(Theme::new().with_neighbor_fill(crate::render::Color::WHITE))
            .build()
            .unwrap();
        assert_eq!(plot.y_ticks().len(), 3);
        plot.query_neighbors(0).unwrap();
        assert_eq!(plot.selection().neighbor_results(), &[1, 2]);
        assert_eq!(plot.point_style(1).unwrap().fill, crate::render::Color::WHITE);
        assert_eq!(plot.categories().color("D"), plot.categories().color("A"));
    }
}
