//! Point layout engines.
//!
//! A layout places support points inside a rectangle: four corner anchors
//! inset by `edge_distance`, full rows along the bottom and top edges, and
//! interior rows whose spacing is derived from the minimum distances.
//!
//! Two row schemes are available through [`LayoutPattern`]:
//!
//! - [`LayoutPattern::Staggered`] (default) doubles the row density and
//!   alternates offset rows with regular rows, like courses of bricks.
//! - [`LayoutPattern::Grid`] repeats regular rows every `dy`.
//!
//! Both engines are pure functions of their inputs: no state, no I/O, and the
//! same inputs always produce the same, identically ordered points.
//!
//! # Preconditions
//!
//! The engines do not validate their inputs. A minimum distance of zero fails
//! with [`LayoutError::DivisionByZero`]; every other combination produces
//! whatever the formulas give, so callers must reject non-positive sizes and
//! distances first.
//!
//! # Examples
//!
//! ```
//! use matelas_core::{
//!     geometry::RectangleSpec,
//!     layout::{self, LayoutParams},
//! };
//!
//! let params = LayoutParams::new(80.0, 80.0, 10.0);
//! let points = layout::compute(RectangleSpec::new(100.0, 100.0), &params).unwrap();
//! assert_eq!(points.len(), 5);
//! ```

mod grid;
mod rows;
mod staggered;

pub use grid::GridEngine;
pub use staggered::StaggeredEngine;

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::LayoutError,
    geometry::{Axis, Point, RectangleSpec},
};

/// Default target spacing between columns.
pub const DEFAULT_MIN_DIST_X: f64 = 30.0;

/// Default target spacing between rows.
pub const DEFAULT_MIN_DIST_Y: f64 = 40.0;

/// Default inset of the corner anchors from the rectangle edges.
pub const DEFAULT_EDGE_DISTANCE: f64 = 15.0;

/// Points in generation order: bottom row left to right, interior rows upward,
/// then the top row.
pub type PointList = Vec<Point>;

/// Spacing and inset settings of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    min_dist_x: f64,
    min_dist_y: f64,
    edge_distance: f64,
}

impl LayoutParams {
    /// Creates layout parameters.
    ///
    /// # Arguments
    ///
    /// * `min_dist_x` - Target minimum spacing between columns.
    /// * `min_dist_y` - Target minimum spacing between regular rows.
    /// * `edge_distance` - Inset of the corner anchors from every edge.
    pub fn new(min_dist_x: f64, min_dist_y: f64, edge_distance: f64) -> Self {
        Self {
            min_dist_x,
            min_dist_y,
            edge_distance,
        }
    }

    pub fn min_dist_x(&self) -> f64 {
        self.min_dist_x
    }

    pub fn min_dist_y(&self) -> f64 {
        self.min_dist_y
    }

    pub fn edge_distance(&self) -> f64 {
        self.edge_distance
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_DIST_X,
            DEFAULT_MIN_DIST_Y,
            DEFAULT_EDGE_DISTANCE,
        )
    }
}

/// Column and row counts with the actual spacing along each axis.
///
/// The actual spacing is the usable span divided by the largest segment count
/// whose segments are at least the requested minimum distance. A count of
/// zero is bumped to one, so a span shorter than the minimum distance yields a
/// single segment covering it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    nbx: i64,
    nby: i64,
    dx: f64,
    dy: f64,
}

impl GridDimensions {
    /// Derives the segment counts and spacing for a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DivisionByZero`] when either minimum distance is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matelas_core::{geometry::RectangleSpec, layout::{GridDimensions, LayoutParams}};
    /// let dims = GridDimensions::new(RectangleSpec::new(220.0, 240.0), &LayoutParams::default())
    ///     .unwrap();
    /// assert_eq!(dims.nbx(), 6);
    /// assert_eq!(dims.nby(), 5);
    /// assert_eq!(dims.dy(), 42.0);
    /// ```
    pub fn new(rect: RectangleSpec, params: &LayoutParams) -> Result<Self, LayoutError> {
        let edge = params.edge_distance();
        let (nbx, dx) = segments(rect.width() - 2.0 * edge, params.min_dist_x(), Axis::X)?;
        let (nby, dy) = segments(rect.height() - 2.0 * edge, params.min_dist_y(), Axis::Y)?;

        Ok(Self { nbx, nby, dx, dy })
    }

    /// Number of column segments along the x axis
    pub fn nbx(&self) -> i64 {
        self.nbx
    }

    /// Number of row segments along the y axis
    pub fn nby(&self) -> i64 {
        self.nby
    }

    /// Actual spacing between columns
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Actual spacing between regular rows
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Upper bound on the number of points any pattern emits for these
    /// dimensions.
    ///
    /// Useful to refuse absurdly dense requests before allocating them.
    pub fn estimated_points(&self) -> u64 {
        let columns = clamp_count(self.nbx).saturating_add(2);
        let rows = if self.dy > 0.0 {
            clamp_count(self.nby).saturating_mul(2).saturating_add(2)
        } else {
            2
        };
        columns.saturating_mul(rows)
    }
}

fn clamp_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// Splits `span` into segments of at least `min_dist`.
fn segments(span: f64, min_dist: f64, axis: Axis) -> Result<(i64, f64), LayoutError> {
    if min_dist == 0.0 {
        return Err(LayoutError::DivisionByZero { axis });
    }

    // Saturating float-to-int cast; NaN becomes 0 and is bumped to 1 below.
    let mut count = (span / min_dist).floor() as i64;
    if count == 0 {
        count = 1;
    }

    Ok((count, span / count as f64))
}

/// Interface shared by the layout engines
pub trait LayoutEngine: Send + Sync {
    /// Computes the points of a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DivisionByZero`] when a minimum distance is zero
    /// and [`LayoutError::NonAdvancingRows`] when the row step cannot reach
    /// the top edge.
    fn compute(&self, rect: RectangleSpec, params: &LayoutParams)
    -> Result<PointList, LayoutError>;
}

/// Row scheme used to fill the interior of the rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPattern {
    /// Half-spaced rows alternating offset and regular rows.
    #[default]
    Staggered,
    /// Regular rows every `dy`.
    Grid,
}

impl LayoutPattern {
    /// Returns the engine implementing this pattern
    pub fn engine(self) -> &'static dyn LayoutEngine {
        match self {
            Self::Staggered => &StaggeredEngine,
            Self::Grid => &GridEngine,
        }
    }
}

impl fmt::Display for LayoutPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staggered => write!(f, "staggered"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

impl FromStr for LayoutPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staggered" => Ok(Self::Staggered),
            "grid" => Ok(Self::Grid),
            _ => Err(format!(
                "unknown layout pattern `{s}`, expected `staggered` or `grid`"
            )),
        }
    }
}

/// Computes a staggered layout, the canonical pattern.
///
/// # Errors
///
/// See [`LayoutEngine::compute`].
pub fn compute(rect: RectangleSpec, params: &LayoutParams) -> Result<PointList, LayoutError> {
    compute_with_pattern(LayoutPattern::Staggered, rect, params)
}

/// Computes a layout with the given row scheme.
///
/// # Errors
///
/// See [`LayoutEngine::compute`].
pub fn compute_with_pattern(
    pattern: LayoutPattern,
    rect: RectangleSpec,
    params: &LayoutParams,
) -> Result<PointList, LayoutError> {
    debug!(
        pattern:% = pattern,
        width = rect.width(),
        height = rect.height();
        "Computing layout"
    );
    pattern.engine().compute(rect, params)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_grid_dimensions_standard() {
        let dims =
            GridDimensions::new(RectangleSpec::new(220.0, 240.0), &LayoutParams::default())
                .unwrap();

        assert_eq!(dims.nbx(), 6);
        assert_eq!(dims.nby(), 5);
        assert_approx_eq!(f64, dims.dx(), 190.0 / 6.0);
        assert_approx_eq!(f64, dims.dy(), 42.0);
    }

    #[test]
    fn test_grid_dimensions_bumps_zero_count() {
        let params = LayoutParams::new(80.0, 80.0, 10.0);
        let dims = GridDimensions::new(RectangleSpec::new(60.0, 60.0), &params).unwrap();

        assert_eq!(dims.nbx(), 1);
        assert_eq!(dims.nby(), 1);
        assert_approx_eq!(f64, dims.dx(), 40.0);
    }

    #[test]
    fn test_grid_dimensions_zero_min_dist() {
        let rect = RectangleSpec::new(220.0, 240.0);

        let err = GridDimensions::new(rect, &LayoutParams::new(0.0, 40.0, 15.0)).unwrap_err();
        assert_eq!(err, LayoutError::DivisionByZero { axis: Axis::X });

        let err = GridDimensions::new(rect, &LayoutParams::new(30.0, 0.0, 15.0)).unwrap_err();
        assert_eq!(err, LayoutError::DivisionByZero { axis: Axis::Y });
    }

    #[test]
    fn test_estimated_points_bounds_actual_count() {
        let cases = [
            (220.0, 240.0, LayoutParams::default()),
            (50.0, 60.0, LayoutParams::new(15.0, 20.0, 10.0)),
            (5000.0, 3000.0, LayoutParams::new(100.0, 150.0, 50.0)),
            (100.0, 100.0, LayoutParams::new(5.0, 5.0, 10.0)),
        ];

        for (x, y, params) in cases {
            let rect = RectangleSpec::new(x, y);
            let dims = GridDimensions::new(rect, &params).unwrap();
            for pattern in [LayoutPattern::Staggered, LayoutPattern::Grid] {
                let points = compute_with_pattern(pattern, rect, &params).unwrap();
                assert!(
                    points.len() as u64 <= dims.estimated_points(),
                    "{pattern} {x}x{y}: {} points above estimate {}",
                    points.len(),
                    dims.estimated_points()
                );
            }
        }
    }

    #[test]
    fn test_estimated_points_saturates() {
        let params = LayoutParams::new(1e-300, 1e-300, 0.0);
        let dims = GridDimensions::new(RectangleSpec::new(1e300, 1e300), &params).unwrap();
        assert_eq!(dims.estimated_points(), u64::MAX);
    }

    #[test]
    fn test_pattern_from_str() {
        assert_eq!(
            "staggered".parse::<LayoutPattern>(),
            Ok(LayoutPattern::Staggered)
        );
        assert_eq!("grid".parse::<LayoutPattern>(), Ok(LayoutPattern::Grid));
        assert!("hexagonal".parse::<LayoutPattern>().is_err());
        assert_eq!(LayoutPattern::default().to_string(), "staggered");
    }

    #[test]
    fn test_compute_defaults_to_staggered() {
        let rect = RectangleSpec::new(200.0, 150.0);
        let params = LayoutParams::new(30.0, 25.0, 20.0);

        assert_eq!(
            compute(rect, &params).unwrap(),
            compute_with_pattern(LayoutPattern::Staggered, rect, &params).unwrap()
        );
    }
}
