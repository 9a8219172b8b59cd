//! Staggered layout: corner anchored, with offset rows between regular rows.

use log::{debug, trace};

use super::{LayoutEngine, LayoutParams, PointList, rows::Frame};
use crate::{error::LayoutError, geometry::RectangleSpec};

/// Engine for [`LayoutPattern::Staggered`](super::LayoutPattern::Staggered).
///
/// Interior rows are spaced by half the regular row spacing. The first
/// interior row is offset by half a column and has no corner points, the next
/// one is a regular row with corners, and so on up to the top row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaggeredEngine;

impl LayoutEngine for StaggeredEngine {
    fn compute(
        &self,
        rect: RectangleSpec,
        params: &LayoutParams,
    ) -> Result<PointList, LayoutError> {
        let frame = Frame::new(rect, params)?;
        let mut points = PointList::new();

        frame.push_bottom_row(&mut points);

        let half_step = 0.5 * frame.dims().dy();
        frame.for_each_interior_row(half_step, |index, row_y| {
            if index % 2 == 0 {
                frame.push_staggered_row(&mut points, row_y);
            } else {
                frame.push_regular_row(&mut points, row_y, row_y);
            }
        })?;

        frame.push_top_row(&mut points);

        debug!(points_count = points.len(); "Staggered layout computed");
        trace!(points:?; "Staggered layout points");

        Ok(points)
    }
}
