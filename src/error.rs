//! Error types for dataset loading and plot interaction.

use thiserror::Error;

/// Errors raised by the plotting core.
///
/// Geometry itself never fails; these cover caller contract violations
/// (empty data, stale indices, unusable dimensions) and dataset parsing.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The dataset contains no points.
    #[error("dataset is empty")]
    EmptyDataset,

    /// No point has a finite coordinate on some axis.
    #[error("no finite {axis} values to compute bounds from")]
    NoFiniteValues {
        /// Axis name, `"x"` or `"y"`.
        axis: &'static str,
    },

    /// A point index does not refer to the loaded dataset.
    #[error("point index {index} out of range for dataset of {len} points")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of points in the dataset.
        len: usize,
    },

    /// A dataset line is missing a field.
    #[error("line {line}: missing {field} field")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A coordinate field could not be parsed as a number.
    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// Plot dimensions leave no drawable area.
    #[error("invalid plot dimensions: {width}x{height} with padding {padding}")]
    InvalidDimensions {
        /// Total width in pixels.
        width: f64,
        /// Total height in pixels.
        height: f64,
        /// Padding on each side in pixels.
        padding: f64,
    },

    /// Reading a dataset file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlotError>;
