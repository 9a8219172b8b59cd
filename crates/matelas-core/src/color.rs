//! Color handling for rendered layouts
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate so style settings can be given as CSS color strings.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use matelas_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("mattress").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#d62728").is_ok());
        assert!(Color::new("white").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_error_names_input() {
        let err = Color::new("plaid").unwrap_err();
        assert!(err.contains("plaid"));
    }
}
