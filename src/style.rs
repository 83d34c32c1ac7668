//! Palettes, theming, and per-category marker styles.

use std::collections::HashMap;

use crate::analytics::Quadrant;
use crate::render::{Color, LineStyle, MarkerShape, TextAnchor, TextStyle};

/// Fill colors cycled through by category.
pub const CATEGORY_COLORS: [Color; 3] = [
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x10, 0xb9, 0x3a),
];

/// Marker shapes cycled through by category.
pub const CATEGORY_SHAPES: [MarkerShape; 3] =
    [MarkerShape::Circle, MarkerShape::Square, MarkerShape::Triangle];

/// Fill colors for quadrants I through IV.
pub const QUADRANT_COLORS: [Color; 4] = [
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x10, 0xb9, 0x3a),
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0xff, 0xcd, 0x17),
];

/// Fill for highlighted neighbors.
pub const NEIGHBOR_COLOR: Color = Color::from_rgb8(0xff, 0x00, 0xff);

const SLATE: Color = Color::from_rgb8(0x37, 0x41, 0x51);

/// Visual theme for scatter plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Category fill palette.
    pub category_colors: [Color; 3],
    /// Category marker palette.
    pub category_shapes: [MarkerShape; 3],
    /// Quadrant fills, I through IV.
    pub quadrant_colors: [Color; 4],
    /// Fill for highlighted neighbors.
    pub neighbor_fill: Color,
    /// Border width for highlighted neighbors.
    pub neighbor_stroke_width: f32,
    /// Border of ordinary markers.
    pub marker_stroke: LineStyle,
    /// Border of the active origin or query point.
    pub emphasis_stroke: LineStyle,
    /// Grid lines at every tick.
    pub grid: LineStyle,
    /// Axis lines.
    pub axis: LineStyle,
    /// Tick marks.
    pub tick: LineStyle,
    /// Tick mark length in pixels.
    pub tick_length: f32,
    /// Tick label text.
    pub tick_label: TextStyle,
    /// Distance from the X axis to its labels.
    pub x_label_offset: f32,
    /// Distance from the Y axis to its labels.
    pub y_label_offset: f32,
    /// Dashed guides through the active origin.
    pub origin_guide: LineStyle,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category palettes.
    pub fn with_category_palette(mut self, colors: [Color; 3], shapes: [MarkerShape; 3]) -> Self {
        self.category_colors = colors;
        self.category_shapes = shapes;
        self
    }

    /// Replace the quadrant palette.
    pub fn with_quadrant_colors(mut self, colors: [Color; 4]) -> Self {
        self.quadrant_colors = colors;
        self
    }

    /// Replace the neighbor highlight fill.
    pub fn with_neighbor_fill(mut self, color: Color) -> Self {
        self.neighbor_fill = color;
        self
    }

    /// Fill color for a quadrant.
    pub fn quadrant_color(&self, quadrant: Quadrant) -> Color {
        self.quadrant_colors[usize::from(quadrant.number() - 1)]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            category_colors: CATEGORY_COLORS,
            category_shapes: CATEGORY_SHAPES,
            quadrant_colors: QUADRANT_COLORS,
            neighbor_fill: NEIGHBOR_COLOR,
            neighbor_stroke_width: 2.0,
            marker_stroke: LineStyle::solid(SLATE, 1.0),
            emphasis_stroke: LineStyle::solid(Color::BLACK, 3.0),
            grid: LineStyle::solid(Color::from_rgb8(0xf0, 0xf0, 0xf0), 1.0),
            axis: LineStyle::solid(SLATE, 2.0),
            tick: LineStyle::solid(SLATE, 1.0),
            tick_length: 5.0,
            tick_label: TextStyle {
                color: Color::from_rgb8(0x6b, 0x72, 0x80),
                size: 11.0,
                anchor: TextAnchor::Start,
            },
            x_label_offset: 18.0,
            y_label_offset: 8.0,
            origin_guide: LineStyle::dashed(Color::from_rgb8(0x9c, 0xa3, 0xaf), 2.0, 6.0, 4.0),
        }
    }
}

/// Color and shape assigned to one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStyle {
    /// Category label.
    pub category: String,
    /// Fill color.
    pub color: Color,
    /// Marker shape.
    pub shape: MarkerShape,
}

/// Category styles in first-occurrence order.
///
/// The i-th distinct category takes palette slot `i % 3`, so a fourth
/// category looks exactly like the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStyles {
    entries: Vec<CategoryStyle>,
    lookup: HashMap<String, usize>,
}

impl CategoryStyles {
    /// Assign styles to categories, skipping repeats.
    pub fn new<'a, I>(categories: I, theme: &Theme) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut styles = Self::default();
        for category in categories {
            if styles.lookup.contains_key(category) {
                continue;
            }
            let slot = styles.entries.len();
            styles.lookup.insert(category.to_string(), slot);
            styles.entries.push(CategoryStyle {
                category: category.to_string(),
                color: theme.category_colors[slot % theme.category_colors.len()],
                shape: theme.category_shapes[slot % theme.category_shapes.len()],
            });
        }
        styles
    }

    /// Style for a category, if it was seen.
    pub fn get(&self, category: &str) -> Option<&CategoryStyle> {
        self.lookup.get(category).map(|&slot| &self.entries[slot])
    }

    /// Fill color for a category.
    pub fn color(&self, category: &str) -> Option<Color> {
        self.get(category).map(|style| style.color)
    }

    /// Marker shape for a category.
    pub fn shape(&self, category: &str) -> Option<MarkerShape> {
        self.get(category).map(|style| style.shape)
    }

    /// All styles in first-occurrence order.
    pub fn entries(&self) -> &[CategoryStyle] {
        &self.entries
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no categories were assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
