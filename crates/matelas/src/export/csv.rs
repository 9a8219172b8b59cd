//! CSV export: one numbered row per point.

use log::debug;

use super::{Error, Exporter};
use crate::PointLayout;

/// Header row of the exported file.
pub const HEADER: [&str; 3] = ["Point #", "X (cm)", "Y (cm)"];

/// Suggested file name for downloads.
pub const FILE_NAME: &str = "rectangle_points.csv";

/// Writes points as `index, x, y` rows, numbered from 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, layout: &PointLayout) -> Result<String, Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;

        for (index, point) in layout.points().iter().enumerate() {
            writer.write_record(&[
                (index + 1).to_string(),
                point.x().to_string(),
                point.y().to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| Error::Render(err.to_string()))?;
        debug!(rows = layout.points().len(); "CSV rendered");

        String::from_utf8(bytes).map_err(|err| Error::Render(err.to_string()))
    }
}
