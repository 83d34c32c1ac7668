//! Axis tick generation and label formatting.

use std::sync::Arc;

use crate::transform::Scaler;

/// Default number of ticks per axis.
pub const DEFAULT_TICK_COUNT: usize = 8;

/// Which plot axis a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// One decimal place.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value:.1}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// A single axis tick ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value of the tick.
    pub value: f64,
    /// Pixel coordinate along the axis (X for [`Axis::X`], Y for [`Axis::Y`]).
    pub position: f32,
    /// Formatted label.
    pub label: String,
}

/// Evenly spaced values from `min` to `max`, both included.
///
/// `count == 0` yields nothing and `count == 1` yields `[min]`.
pub fn generate_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut ticks: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
            // Accumulated rounding must not move the last tick off `max`.
            ticks[count - 1] = max;
            ticks
        }
    }
}

/// Ticks for one axis spanning the scaler's bounds.
pub fn axis_ticks(
    axis: Axis,
    scaler: &Scaler,
    count: usize,
    formatter: &AxisFormatter,
) -> Vec<Tick> {
    let bounds = scaler.bounds();
    let range = match axis {
        Axis::X => bounds.x,
        Axis::Y => bounds.y,
    };
    generate_ticks(range.min, range.max, count)
        .into_iter()
        .map(|value| {
            let position = match axis {
                Axis::X => scaler.scale_x(value),
                Axis::Y => scaler.scale_y(value),
            };
            Tick {
                value,
                position: position as f32,
                label: formatter.format(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotDimensions;
    use crate::view::{Bounds, Range};

    #[test]
    fn ticks_zero_to_seven() {
        let ticks = generate_ticks(0.0, 7.0, 8);
        assert_eq!(ticks, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn ticks_include_endpoints_exactly() {
        let ticks = generate_ticks(-1.3, 11.7, DEFAULT_TICK_COUNT);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[0], -1.3);
        assert_eq!(ticks[7], 11.7);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ticks_small_counts() {
        assert!(generate_ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(generate_ticks(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(generate_ticks(2.0, 5.0, 2), vec![2.0, 5.0]);
    }

    #[test]
    fn axis_ticks_positions_and_labels() {
        let bounds = Bounds::new(Range::new(0.0, 7.0), Range::new(0.0, 3.0));
        let scaler = Scaler::new(bounds, PlotDimensions::default());
        let x = axis_ticks(Axis::X, &scaler, 8, &AxisFormatter::default());
        assert_eq!(x.first().map(|t| t.position), Some(70.0));
        assert_eq!(x.last().map(|t| t.position), Some(630.0));
        assert_eq!(x[3].label, "3.0");

        let y = axis_ticks(Axis::Y, &scaler, 4, &AxisFormatter::default());
        assert_eq!(y[0].position, 430.0);
        assert_eq!(y[3].position, 70.0);
    }

    #[test]
    fn custom_formatter() {
        let formatter = AxisFormatter::Custom(Arc::new(|v| format!("{v:.0}%")));
        assert_eq!(formatter.format(42.4), "42%");
        assert_eq!(AxisFormatter::Default.format(-0.26), "-0.3");
    }
}
