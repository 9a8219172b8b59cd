//! Row emission shared by the layout engines.

use log::trace;

use super::{GridDimensions, LayoutParams, PointList};
use crate::{
    error::LayoutError,
    geometry::{Point, RectangleSpec, round_to_hundredths},
};

/// Relative tolerance under which a candidate counts as sitting on the far edge.
const EDGE_TOLERANCE: f64 = 1e-9;

/// `value` lies strictly before `limit`, ignoring floating-point drift.
fn strictly_before(value: f64, limit: f64) -> bool {
    value < limit - EDGE_TOLERANCE * limit.abs().max(1.0)
}

/// Inset rectangle and spacing a layout is emitted into.
pub(super) struct Frame {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    dims: GridDimensions,
}

impl Frame {
    pub(super) fn new(rect: RectangleSpec, params: &LayoutParams) -> Result<Self, LayoutError> {
        let dims = GridDimensions::new(rect, params)?;
        let edge = params.edge_distance();
        trace!(
            nbx = dims.nbx(),
            nby = dims.nby(),
            dx = dims.dx(),
            dy = dims.dy();
            "Grid dimensions"
        );

        Ok(Self {
            left: edge,
            right: rect.width() - edge,
            bottom: edge,
            top: rect.height() - edge,
            dims,
        })
    }

    pub(super) fn dims(&self) -> &GridDimensions {
        &self.dims
    }

    /// Emits the bottom row. Its y coordinate is the edge distance, unrounded.
    pub(super) fn push_bottom_row(&self, points: &mut PointList) {
        self.push_regular_row(points, self.bottom, self.bottom);
    }

    /// Emits the top row. Corners keep the exact y, interior points are rounded.
    pub(super) fn push_top_row(&self, points: &mut PointList) {
        self.push_regular_row(points, self.top, round_to_hundredths(self.top));
    }

    /// Emits the interior rows at `bottom + k * step` (k >= 1) below the top row,
    /// handing each row's index and y to `emit`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonAdvancingRows`] when `step` is not positive
    /// but the first row already lies inside the frame.
    pub(super) fn for_each_interior_row(
        &self,
        step: f64,
        mut emit: impl FnMut(usize, f64),
    ) -> Result<(), LayoutError> {
        let first = self.bottom + step;
        if (step.is_nan() || step <= 0.0) && strictly_before(first, self.top) {
            return Err(LayoutError::NonAdvancingRows { step });
        }

        let mut index = 0usize;
        loop {
            let row_y = self.bottom + (index + 1) as f64 * step;
            if !strictly_before(row_y, self.top) {
                break;
            }
            emit(index, round_to_hundredths(row_y));
            index += 1;
        }

        Ok(())
    }

    /// Emits a full row: left corner, interior columns, right corner.
    ///
    /// Interior columns sit at `left + i * dx` for `i` in `1..=nbx` and are
    /// dropped when they would reach the right corner.
    pub(super) fn push_regular_row(&self, points: &mut PointList, corner_y: f64, interior_y: f64) {
        points.push(Point::new(self.left, corner_y));
        for i in 1..=self.dims.nbx() {
            let x = self.left + i as f64 * self.dims.dx();
            if strictly_before(x, self.right) {
                points.push(Point::new(round_to_hundredths(x), interior_y));
            }
        }
        points.push(Point::new(self.right, corner_y));
    }

    /// Emits an offset row: no corners, columns at `left + (i + 0.5) * dx` for
    /// `i` in `0..=nbx`, kept while left of the right edge.
    pub(super) fn push_staggered_row(&self, points: &mut PointList, row_y: f64) {
        for i in 0..=self.dims.nbx() {
            let x = self.left + (i as f64 + 0.5) * self.dims.dx();
            if strictly_before(x, self.right) {
                points.push(Point::new(round_to_hundredths(x), row_y));
            }
        }
    }
}
