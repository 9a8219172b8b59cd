//! Layout requests and their validation.
//!
//! A [`LayoutRequest`] is what a caller sends: every field optional, numbers
//! possibly given as text. [`LayoutRequest::resolve`] turns it into a
//! [`LayoutInput`] the engines can run on, or into an [`InputError`] whose
//! message is safe to show to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use matelas_core::{
    geometry::RectangleSpec,
    layout::{GridDimensions, LayoutParams},
};

use crate::config::LayoutConfig;

/// Rejections of a layout request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A required field is missing, or a value is not a finite number.
    #[error("Invalid input data")]
    InvalidData { field: &'static str },

    #[error("All dimensions must be positive")]
    NonPositiveDimensions,

    #[error("All distances must be positive")]
    NonPositiveDistances,

    /// The layout would contain more points than the configured limit.
    #[error("Layout would produce up to {estimated} points, above the limit of {limit}")]
    TooDense { estimated: u64, limit: u64 },
}

/// A number given either as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Returns the finite value, or `None` for unparseable or non-finite input.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Rectangle and spacing as submitted by a caller.
///
/// `x` and `y` are required; missing distances fall back to the configured
/// defaults.
///
/// # Examples
///
/// ```
/// # use matelas::{config::LayoutConfig, request::LayoutRequest};
/// let request: LayoutRequest = serde_json::from_str(r#"{"x": "220", "y": 240}"#).unwrap();
/// let input = request.resolve(&LayoutConfig::default()).unwrap();
/// assert_eq!(input.rectangle().width(), 220.0);
/// assert_eq!(input.params().edge_distance(), 15.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    #[serde(default)]
    x: Option<Numeric>,
    #[serde(default)]
    y: Option<Numeric>,
    #[serde(default)]
    min_dist_x: Option<Numeric>,
    #[serde(default)]
    min_dist_y: Option<Numeric>,
    #[serde(default)]
    edge_distance: Option<Numeric>,
}

impl LayoutRequest {
    /// Creates a request for a rectangle, leaving the distances to defaults.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    pub fn with_min_dist_x(mut self, min_dist_x: f64) -> Self {
        self.min_dist_x = Some(min_dist_x.into());
        self
    }

    pub fn with_min_dist_y(mut self, min_dist_y: f64) -> Self {
        self.min_dist_y = Some(min_dist_y.into());
        self
    }

    pub fn with_edge_distance(mut self, edge_distance: f64) -> Self {
        self.edge_distance = Some(edge_distance.into());
        self
    }

    /// Validates the request and fills in defaults.
    ///
    /// Checks run in this order: every present value must be a finite number,
    /// then both dimensions must be positive, then all three distances must
    /// be positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn resolve(&self, defaults: &LayoutConfig) -> Result<LayoutInput, InputError> {
        let x = required(self.x.as_ref(), "x")?;
        let y = required(self.y.as_ref(), "y")?;
        let min_dist_x = optional(self.min_dist_x.as_ref(), "min_dist_x", defaults.min_dist_x())?;
        let min_dist_y = optional(self.min_dist_y.as_ref(), "min_dist_y", defaults.min_dist_y())?;
        let edge_distance = optional(
            self.edge_distance.as_ref(),
            "edge_distance",
            defaults.edge_distance(),
        )?;

        if x <= 0.0 || y <= 0.0 {
            return Err(InputError::NonPositiveDimensions);
        }
        if min_dist_x <= 0.0 || min_dist_y <= 0.0 || edge_distance <= 0.0 {
            return Err(InputError::NonPositiveDistances);
        }

        Ok(LayoutInput {
            rectangle: RectangleSpec::new(x, y),
            params: LayoutParams::new(min_dist_x, min_dist_y, edge_distance),
        })
    }
}

fn required(value: Option<&Numeric>, field: &'static str) -> Result<f64, InputError> {
    value
        .and_then(Numeric::value)
        .ok_or(InputError::InvalidData { field })
}

fn optional(value: Option<&Numeric>, field: &'static str, default: f64) -> Result<f64, InputError> {
    match value {
        Some(value) => value.value().ok_or(InputError::InvalidData { field }),
        None => Ok(default),
    }
}

/// A validated rectangle with its layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    rectangle: RectangleSpec,
    params: LayoutParams,
}

impl LayoutInput {
    pub fn rectangle(&self) -> RectangleSpec {
        self.rectangle
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Refuses inputs whose layout could exceed `limit` points.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooDense`] when the estimate is above the limit.
    pub fn check_density(&self, limit: u64) -> Result<(), InputError> {
        // Distances are positive once resolved, so the divisions cannot fail.
        let estimated = GridDimensions::new(self.rectangle, &self.params)
            .map(|dims| dims.estimated_points())
            .unwrap_or(u64::MAX);

        if estimated > limit {
            return Err(InputError::TooDense { estimated, limit });
        }
        Ok(())
    }
}
