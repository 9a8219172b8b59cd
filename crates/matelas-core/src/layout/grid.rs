//! Grid layout: corner anchored, every interior row regular.

use log::debug;

use super::{LayoutEngine, LayoutParams, PointList, rows::Frame};
use crate::{error::LayoutError, geometry::RectangleSpec};

/// Engine for [`LayoutPattern::Grid`](super::LayoutPattern::Grid).
///
/// Rows are spaced by the full row spacing and each one carries both corner
/// points, giving a plain rectangular grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEngine;

impl LayoutEngine for GridEngine {
    fn compute(
        &self,
        rect: RectangleSpec,
        params: &LayoutParams,
    ) -> Result<PointList, LayoutError> {
        let frame = Frame::new(rect, params)?;
        let mut points = PointList::new();

        frame.push_bottom_row(&mut points);
        frame.for_each_interior_row(frame.dims().dy(), |_, row_y| {
            frame.push_regular_row(&mut points, row_y, row_y);
        })?;
        frame.push_top_row(&mut points);

        debug!(points_count = points.len(); "Grid layout computed");

        Ok(points)
    }
}
