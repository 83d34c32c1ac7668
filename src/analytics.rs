//! Quadrant classification and nearest-neighbor search.
//!
//! Distances are computed exhaustively; datasets are small enough that a
//! spatial index would not pay for itself.

use tracing::debug;

use crate::dataset::DataPoint;
use crate::error::{PlotError, Result};
use crate::geom::Point;

/// Default number of neighbors returned by a neighbor query.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;

/// Euclidean distance between two data points.
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Indices of the `count` points closest to `points[index]`, nearest first.
///
/// The query point never appears in its own result. Equal distances keep
/// their original index order. Fewer than `count` indices are returned when
/// the dataset is too small.
pub fn find_nearest_neighbors(
    points: &[DataPoint],
    index: usize,
    count: usize,
) -> Result<Vec<usize>> {
    let query = points
        .get(index)
        .ok_or(PlotError::IndexOutOfRange {
            index,
            len: points.len(),
        })?
        .position();

    let mut ranked: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let distance = if i == index {
                f64::INFINITY
            } else {
                euclidean_distance(query, point.position())
            };
            (i, distance)
        })
        .collect();
    // `sort_by` is stable, so ties stay in index order.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let neighbors: Vec<usize> = ranked
        .into_iter()
        .filter(|(i, _)| *i != index)
        .take(count)
        .map(|(i, _)| i)
        .collect();
    debug!(index, ?neighbors, "nearest neighbors");
    Ok(neighbors)
}

/// One of the four regions around an origin point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Right of and above (or on) the origin.
    I,
    /// Left of and above (or on) the origin.
    II,
    /// Left of and below the origin.
    III,
    /// Right of (or on) and below the origin.
    IV,
}

impl Quadrant {
    /// All quadrants in numeric order.
    pub const ALL: [Quadrant; 4] = [Quadrant::I, Quadrant::II, Quadrant::III, Quadrant::IV];

    /// Quadrant number, 1 through 4.
    pub fn number(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
        }
    }
}

/// Quadrant of `point` relative to `origin`.
///
/// Points on the origin's horizontal line count as above it, points on its
/// vertical line count as right of it, so the origin itself is quadrant I.
pub fn quadrant(point: Point, origin: Point) -> Quadrant {
    match (point.x >= origin.x, point.y >= origin.y) {
        (true, true) => Quadrant::I,
        (false, true) => Quadrant::II,
        (false, false) => Quadrant::III,
        (true, false) => Quadrant::IV,
    }
}
