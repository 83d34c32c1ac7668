//! Rendering primitives and frame assembly.
//!
//! These types are backend-agnostic. A drawing backend walks the
//! [`RenderList`] in order and draws each command; the crate itself never
//! draws anything.

use crate::axis::Tick;
use crate::geom::{Point, ScreenPoint};
use crate::style::Theme;
use crate::transform::Scaler;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Format as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash and gap lengths in pixels; solid when `None`.
    pub dash: Option<(f32, f32)>,
}

impl LineStyle {
    /// Solid line.
    pub const fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Dashed line.
    pub const fn dashed(color: Color, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Marker shape for scatter points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// Circle of radius `size`.
    Circle,
    /// Square with half-side `size`.
    Square,
    /// Upward triangle inscribed in the `size` square.
    Triangle,
}

/// Fill and border of a single scatter marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Fill color.
    pub fill: Color,
    /// Border color.
    pub stroke: Color,
    /// Border width in pixels.
    pub stroke_width: f32,
}

/// Horizontal text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            anchor: TextAnchor::Start,
        }
    }
}

/// A scatter marker in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the point in its dataset.
    pub index: usize,
    /// Marker center.
    pub position: ScreenPoint,
    /// Marker shape.
    pub shape: MarkerShape,
    /// Marker half-size in pixels.
    pub size: f32,
    /// Fill and border.
    pub style: PointStyle,
    /// Hover text, `"(x, y) - category"`.
    pub tooltip: String,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a straight line.
    Line {
        /// Line start.
        start: ScreenPoint,
        /// Line end.
        end: ScreenPoint,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw a scatter marker.
    Marker(Marker),
    /// Draw text.
    Text {
        /// Anchor position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands in draw order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Iterate over the marker commands only.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    fn line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle) {
        self.push(RenderCommand::Line { start, end, style });
    }
}

/// A legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Row label.
    pub label: String,
    /// Swatch color.
    pub color: Color,
    /// Swatch shape.
    pub shape: MarkerShape,
}

/// Legend content for the current frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    /// One entry per category in first-occurrence order.
    pub categories: Vec<LegendEntry>,
    /// Quadrant swatches; empty unless an origin is active.
    pub quadrants: Vec<LegendEntry>,
    /// Caption shown while neighbors are highlighted.
    pub caption: Option<String>,
}

/// Inputs for assembling a frame.
#[derive(Debug)]
pub(crate) struct Frame<'a> {
    pub(crate) scaler: &'a Scaler,
    pub(crate) theme: &'a Theme,
    pub(crate) x_ticks: &'a [Tick],
    pub(crate) y_ticks: &'a [Tick],
    pub(crate) origin: Option<Point>,
    pub(crate) markers: Vec<Marker>,
}

/// Assemble the draw list: grid, axes, ticks, origin guides, then markers.
pub(crate) fn build_frame(frame: Frame<'_>) -> RenderList {
    let mut list = RenderList::new();
    let rect = frame.scaler.dimensions().plot_rect();
    let theme = frame.theme;

    for tick in frame.x_ticks {
        list.line(
            ScreenPoint::new(tick.position, rect.min.y),
            ScreenPoint::new(tick.position, rect.max.y),
            theme.grid,
        );
    }
    for tick in frame.y_ticks {
        list.line(
            ScreenPoint::new(rect.min.x, tick.position),
            ScreenPoint::new(rect.max.x, tick.position),
            theme.grid,
        );
    }

    let corner = ScreenPoint::new(rect.min.x, rect.max.y);
    list.line(corner, rect.max, theme.axis);
    list.line(rect.min, corner, theme.axis);

    let mut x_label = theme.tick_label.clone();
    x_label.anchor = TextAnchor::Middle;
    for tick in frame.x_ticks {
        list.line(
            ScreenPoint::new(tick.position, rect.max.y),
            ScreenPoint::new(tick.position, rect.max.y + theme.tick_length),
            theme.tick,
        );
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(tick.position, rect.max.y + theme.x_label_offset),
            text: tick.label.clone(),
            style: x_label.clone(),
        });
    }

    let mut y_label = theme.tick_label.clone();
    y_label.anchor = TextAnchor::End;
    for tick in frame.y_ticks {
        list.line(
            ScreenPoint::new(rect.min.x, tick.position),
            ScreenPoint::new(rect.min.x - theme.tick_length, tick.position),
            theme.tick,
        );
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(rect.min.x - theme.y_label_offset, tick.position),
            text: tick.label.clone(),
            style: y_label.clone(),
        });
    }

    if let Some(origin) = frame.origin {
        let center = frame.scaler.data_to_screen(origin);
        list.line(
            ScreenPoint::new(center.x, rect.min.y),
            ScreenPoint::new(center.x, rect.max.y),
            theme.origin_guide,
        );
        list.line(
            ScreenPoint::new(rect.min.x, center.y),
            ScreenPoint::new(rect.max.x, center.y),
            theme.origin_guide,
        );
    }

    for marker in frame.markers {
        list.push(RenderCommand::Marker(marker));
    }
    list
}
