//! Error types raised by the layout engines.

use thiserror::Error;

use crate::geometry::Axis;

/// Failures of a layout computation.
///
/// The engines do not validate their inputs. These variants cover the two
/// situations where the arithmetic itself cannot proceed; callers are expected
/// to reject non-positive sizes and distances before computing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A minimum distance of zero was used as a divisor.
    #[error("division by zero: min_dist_{axis} must not be zero")]
    DivisionByZero { axis: Axis },

    /// The vertical step between rows does not move towards the top edge.
    #[error("row step {step} never reaches the top edge")]
    NonAdvancingRows { step: f64 },
}
