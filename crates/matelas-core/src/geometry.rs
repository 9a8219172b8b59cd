//! Geometric primitives for point layouts.
//!
//! This module provides the value types that flow in and out of the layout
//! engines.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate inside the rectangle
//! - [`RectangleSpec`] - Width and height of the rectangle being filled
//! - [`Bounds`] - An axis-aligned box, used for the usable (inset) area
//! - [`Axis`] - Names the horizontal or vertical direction
//!
//! # Coordinate System
//!
//! Layout coordinates are expressed in the same unit as the rectangle
//! (documented as centimeters) with the origin at the bottom-left corner:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! Renderers that draw in screen space (SVG, the browser canvas) flip the
//! y axis themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rounds a coordinate to two decimal places.
///
/// # Examples
///
/// ```
/// # use matelas_core::geometry::round_to_hundredths;
/// assert_eq!(round_to_hundredths(46.666_666), 46.67);
/// assert_eq!(round_to_hundredths(15.0), 15.0);
/// ```
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A 2D point of a layout.
///
/// Points compare by value and serialize as a two-element array `[x, y]`,
/// which is the wire shape the HTTP API and the web page use.
///
/// # Examples
///
/// ```
/// # use matelas_core::geometry::Point;
/// let point = Point::new(15.0, 36.0);
/// assert_eq!(point.x(), 15.0);
/// assert_eq!(point.y(), 36.0);
/// assert_eq!(point, Point::new(15.0, 36.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the rectangle a layout is computed for.
///
/// The engine never validates these values; callers reject non-positive
/// sizes before computing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RectangleSpec {
    x: f64,
    y: f64,
}

impl RectangleSpec {
    /// Creates a rectangle of width `x` and height `y`
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f64 {
        self.x
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f64 {
        self.y
    }

    /// Returns the area left once `edge_distance` is removed from every side.
    ///
    /// The four corners of the returned bounds are the corner anchors of a
    /// layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matelas_core::geometry::RectangleSpec;
    /// let usable = RectangleSpec::new(220.0, 240.0).inset(15.0);
    /// assert_eq!(usable.min_x(), 15.0);
    /// assert_eq!(usable.max_x(), 205.0);
    /// assert_eq!(usable.max_y(), 225.0);
    /// ```
    pub fn inset(self, edge_distance: f64) -> Bounds {
        Bounds {
            min_x: edge_distance,
            min_y: edge_distance,
            max_x: self.x - edge_distance,
            max_y: self.y - edge_distance,
        }
    }
}

/// An axis-aligned box defined by minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    pub fn min_y(self) -> f64 {
        self.min_y
    }

    pub fn max_x(self) -> f64 {
        self.max_x
    }

    pub fn max_y(self) -> f64 {
        self.max_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the four corners: bottom-left, bottom-right, top-left, top-right
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.min_x, self.max_y),
            Point::new(self.max_x, self.max_y),
        ]
    }

    /// Checks whether a point lies inside the bounds, edges included
    pub fn contains(self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x())
            && (self.min_y..=self.max_y).contains(&point.y())
    }
}

/// One of the two layout directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}
