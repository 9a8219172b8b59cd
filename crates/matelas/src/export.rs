//! Export of computed layouts to text formats.
//!
//! Every format implements [`Exporter`] and renders a whole
//! [`PointLayout`] into a `String`.

mod csv;
mod json;
mod svg;

pub use self::csv::{CsvExporter, FILE_NAME as CSV_FILE_NAME, HEADER as CSV_HEADER};
pub use self::json::JsonExporter;
pub use self::svg::SvgExporter;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::PointLayout;

/// Renders a layout into one output format
pub trait Exporter {
    /// Renders `layout` to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the underlying writer fails.
    fn export(&self, layout: &PointLayout) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}

/// Output formats supported by the exporters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Svg,
}

impl ExportFormat {
    /// MIME type of the rendered output
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "svg" => Ok(Self::Svg),
            _ => Err(format!(
                "unknown export format `{s}`, expected `json`, `csv` or `svg`"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trips_through_str() {
        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Svg] {
            assert_eq!(format.to_string().parse::<ExportFormat>(), Ok(format));
        }
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_content_types() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
    }
}
