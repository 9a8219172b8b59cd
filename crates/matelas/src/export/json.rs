//! JSON export in the `{"points": [[x, y], ...], "rectangle": {...}}` shape.

use super::{Error, Exporter};
use crate::PointLayout;

/// Serializes a layout with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Returns an exporter producing indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, layout: &PointLayout) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(layout)?
        } else {
            serde_json::to_string(layout)?
        };
        Ok(json)
    }
}
