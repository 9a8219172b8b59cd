//! SVG export of a layout, drawn like the web page canvas.
//!
//! The rectangle is scaled to fit an 800x600 drawing with 40 units of
//! padding, and the y axis is flipped so the layout origin sits at the
//! bottom-left corner.

use log::debug;
use svg::{
    Document,
    node::element::{Circle, Group, Rectangle, Text},
};

use matelas_core::{color::Color, geometry::Point};

use super::{Error, Exporter};
use crate::{PointLayout, config::StyleConfig};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;
const PADDING: f64 = 40.0;

/// Renders the rectangle outline, the inset guide and one marker per point.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    background: Option<Color>,
    outline: Color,
    point: Color,
    point_radius: f64,
    edge_distance: Option<f64>,
}

impl SvgExporter {
    /// Creates an exporter with the colors of `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when a configured color cannot be parsed.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            background: style.background_color().map_err(Error::Render)?,
            outline: style.outline_color().map_err(Error::Render)?,
            point: style.point_color().map_err(Error::Render)?,
            point_radius: style.point_radius(),
            edge_distance: None,
        })
    }

    /// Draws a dashed guide at the corner inset.
    pub fn with_edge_distance(mut self, edge_distance: f64) -> Self {
        self.edge_distance = Some(edge_distance);
        self
    }
}

/// Maps layout coordinates onto the drawing.
struct Viewport {
    scale: f64,
    height: f64,
}

impl Viewport {
    fn fit(width: f64, height: f64) -> Self {
        let scale_x = (CANVAS_WIDTH - 2.0 * PADDING) / width;
        let scale_y = (CANVAS_HEIGHT - 2.0 * PADDING) / height;
        Self {
            scale: scale_x.min(scale_y),
            height,
        }
    }

    fn project(&self, point: Point) -> (f64, f64) {
        (
            PADDING + point.x() * self.scale,
            PADDING + (self.height - point.y()) * self.scale,
        )
    }
}

impl Exporter for SvgExporter {
    fn export(&self, layout: &PointLayout) -> Result<String, Error> {
        let rect = layout.rectangle();
        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            return Err(Error::Render(format!(
                "cannot draw a {}x{} rectangle",
                rect.width(),
                rect.height()
            )));
        }

        let viewport = Viewport::fit(rect.width(), rect.height());
        let drawing_width = 2.0 * PADDING + rect.width() * viewport.scale;
        let drawing_height = 2.0 * PADDING + rect.height() * viewport.scale;

        let mut doc = Document::new()
            .set("viewBox", (0.0, 0.0, drawing_width, drawing_height))
            .set("width", drawing_width)
            .set("height", drawing_height);

        if let Some(background) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background),
            );
        }

        doc = doc.add(
            Rectangle::new()
                .set("x", PADDING)
                .set("y", PADDING)
                .set("width", rect.width() * viewport.scale)
                .set("height", rect.height() * viewport.scale)
                .set("fill", "none")
                .set("stroke", &self.outline)
                .set("stroke-width", 2),
        );

        if let Some(edge) = self.edge_distance {
            let inset = rect.inset(edge);
            let (x, y) = viewport.project(Point::new(inset.min_x(), inset.max_y()));
            doc = doc.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", inset.width().max(0.0) * viewport.scale)
                    .set("height", inset.height().max(0.0) * viewport.scale)
                    .set("fill", "none")
                    .set("stroke", &self.outline)
                    .set("stroke-opacity", 0.4)
                    .set("stroke-dasharray", "4 4"),
            );
        }

        let markers = layout
            .points()
            .iter()
            .fold(Group::new().set("fill", &self.point), |group, point| {
                let (cx, cy) = viewport.project(*point);
                group.add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", self.point_radius),
                )
            });
        doc = doc.add(markers);

        doc = doc.add(
            Text::new(format!(
                "{} x {} cm, {} points",
                rect.width(),
                rect.height(),
                layout.points().len()
            ))
            .set("x", PADDING)
            .set("y", drawing_height - PADDING / 3.0)
            .set("font-family", "sans-serif")
            .set("font-size", 14)
            .set("fill", &self.outline),
        );

        debug!(points_count = layout.points().len(); "SVG document rendered");
        Ok(doc.to_string())
    }
}
