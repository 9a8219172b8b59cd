//! Matelas - support point layouts for rectangular mattresses.
//!
//! Given the size of a rectangle and spacing constraints, Matelas places
//! load-bearing points with fixed anchors at the four corners and along the
//! top and bottom edges, and fills the interior with staggered or regular
//! rows. Layouts can be exported as JSON, CSV or SVG.

pub mod config;
pub mod export;
pub mod request;

mod error;

pub use matelas_core::{color, geometry, layout};

pub use error::MatelasError;

use log::{debug, info, trace};
use serde::Serialize;

use matelas_core::{
    geometry::{Point, RectangleSpec},
    layout::{LayoutParams, PointList},
};

use config::AppConfig;
use export::{CsvExporter, ExportFormat, Exporter, JsonExporter, SvgExporter};
use request::{LayoutInput, LayoutRequest};

/// A computed layout: the rectangle and its points in generation order.
///
/// Serializes to `{"points": [[x, y], ...], "rectangle": {"x": .., "y": ..}}`.
/// The parameters the points were computed with stay out of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLayout {
    points: PointList,
    rectangle: RectangleSpec,
    #[serde(skip)]
    params: LayoutParams,
}

impl PointLayout {
    /// Creates a layout from already computed points, with default parameters.
    pub fn new(rectangle: RectangleSpec, points: PointList) -> Self {
        Self {
            points,
            rectangle,
            params: LayoutParams::default(),
        }
    }

    /// Records the parameters the points were computed with.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn rectangle(&self) -> RectangleSpec {
        self.rectangle
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }
}

/// Entry point for resolving, computing and exporting layouts.
///
/// The service holds the application configuration and is shared read-only
/// between callers; it keeps no per-request state.
///
/// # Examples
///
/// ```rust
/// use matelas::{LayoutService, config::AppConfig, request::LayoutRequest};
///
/// let service = LayoutService::new(AppConfig::default());
///
/// let input = service
///     .resolve(&LayoutRequest::new(100.0, 100.0).with_min_dist_x(80.0).with_min_dist_y(80.0).with_edge_distance(10.0))
///     .expect("valid request");
/// let layout = service.compute(&input).expect("layout");
/// assert_eq!(layout.points().len(), 5);
///
/// let csv = service.render_csv(&layout).expect("csv");
/// assert!(csv.starts_with("Point #,X (cm),Y (cm)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutService {
    config: AppConfig,
}

impl LayoutService {
    /// Create a new layout service with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the service runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validates a request, fills in configured defaults and applies the
    /// density limit.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Input` for missing or malformed values,
    /// non-positive sizes or distances, and layouts above the point limit.
    pub fn resolve(&self, request: &LayoutRequest) -> Result<LayoutInput, MatelasError> {
        let layout_config = self.config.layout();
        let input = request.resolve(layout_config)?;
        input.check_density(layout_config.max_points())?;

        trace!(input:?; "Request resolved");
        Ok(input)
    }

    /// Computes the layout of a resolved input with the configured pattern.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Layout` if the engine cannot compute the
    /// layout. Inputs produced by [`resolve`](Self::resolve) always succeed.
    pub fn compute(&self, input: &LayoutInput) -> Result<PointLayout, MatelasError> {
        let pattern = self.config.layout().pattern();
        let rectangle = input.rectangle();
        info!(
            pattern:% = pattern,
            width = rectangle.width(),
            height = rectangle.height();
            "Computing layout"
        );

        let points = pattern.engine().compute(rectangle, input.params())?;
        debug!(points_count = points.len(); "Layout computed");

        Ok(PointLayout::new(rectangle, points).with_params(*input.params()))
    }

    /// Renders a layout in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Export` if rendering fails.
    pub fn render(&self, layout: &PointLayout, format: ExportFormat) -> Result<String, MatelasError> {
        match format {
            ExportFormat::Json => self.render_json(layout),
            ExportFormat::Csv => self.render_csv(layout),
            ExportFormat::Svg => self.render_svg(layout),
        }
    }

    /// Renders a layout as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Export` if serialization fails.
    pub fn render_json(&self, layout: &PointLayout) -> Result<String, MatelasError> {
        Ok(JsonExporter::pretty().export(layout)?)
    }

    /// Renders a layout as CSV with a `Point #, X (cm), Y (cm)` header.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Export` if the CSV writer fails.
    pub fn render_csv(&self, layout: &PointLayout) -> Result<String, MatelasError> {
        Ok(CsvExporter.export(layout)?)
    }

    /// Renders a layout as an SVG drawing using the configured style. The
    /// inset guide follows the edge distance the layout was computed with.
    ///
    /// # Errors
    ///
    /// Returns `MatelasError::Export` for invalid style colors or a
    /// rectangle that cannot be drawn.
    pub fn render_svg(&self, layout: &PointLayout) -> Result<String, MatelasError> {
        let exporter = SvgExporter::new(self.config.style())?
            .with_edge_distance(layout.params().edge_distance());
        let svg = exporter.export(layout)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
