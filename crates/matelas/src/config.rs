//! Configuration types for layout computation, rendering and serving.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Row pattern, default distances and the density limit.
//! - [`StyleConfig`] - Colors and point size of the SVG rendering.
//! - [`ServerConfig`] - Address and port of the HTTP service.
//!
//! # Example
//!
//! ```
//! # use matelas::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().min_dist_x(), 30.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use matelas_core::{
    color::Color,
    layout::{
        DEFAULT_EDGE_DISTANCE, DEFAULT_MIN_DIST_X, DEFAULT_MIN_DIST_Y, LayoutPattern,
    },
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// HTTP server configuration section.
    #[serde(default)]
    server: ServerConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, server: ServerConfig) -> Self {
        Self {
            layout,
            style,
            server,
        }
    }

    /// Replaces the layout section.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the server configuration.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Checks values that deserialization alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting: a
    /// non-positive default distance, a zero point limit, an unparseable
    /// color or a non-positive point radius.
    pub fn validate(&self) -> Result<(), String> {
        let layout = &self.layout;
        if layout.min_dist_x <= 0.0 || layout.min_dist_y <= 0.0 || layout.edge_distance <= 0.0 {
            return Err("layout distances must be positive".to_string());
        }
        if layout.max_points == 0 {
            return Err("layout.max_points must be at least 1".to_string());
        }

        self.style.background_color()?;
        self.style.outline_color()?;
        self.style.point_color()?;
        if self.style.point_radius() <= 0.0 {
            return Err("style.point_radius must be positive".to_string());
        }

        Ok(())
    }
}

/// Row pattern and default spacing used when a request omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Row scheme of computed layouts.
    #[serde(default)]
    pattern: LayoutPattern,

    #[serde(default = "default_min_dist_x")]
    min_dist_x: f64,

    #[serde(default = "default_min_dist_y")]
    min_dist_y: f64,

    #[serde(default = "default_edge_distance")]
    edge_distance: f64,

    /// Requests whose point estimate exceeds this limit are refused.
    #[serde(default = "default_max_points")]
    max_points: u64,
}

fn default_min_dist_x() -> f64 {
    DEFAULT_MIN_DIST_X
}

fn default_min_dist_y() -> f64 {
    DEFAULT_MIN_DIST_Y
}

fn default_edge_distance() -> f64 {
    DEFAULT_EDGE_DISTANCE
}

fn default_max_points() -> u64 {
    100_000
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pattern: LayoutPattern::default(),
            min_dist_x: default_min_dist_x(),
            min_dist_y: default_min_dist_y(),
            edge_distance: default_edge_distance(),
            max_points: default_max_points(),
        }
    }
}

impl LayoutConfig {
    /// Returns a copy using the given row pattern.
    pub fn with_pattern(mut self, pattern: LayoutPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Returns a copy with a different density limit.
    pub fn with_max_points(mut self, max_points: u64) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn pattern(&self) -> LayoutPattern {
        self.pattern
    }

    pub fn min_dist_x(&self) -> f64 {
        self.min_dist_x
    }

    pub fn min_dist_y(&self) -> f64 {
        self.min_dist_y
    }

    pub fn edge_distance(&self) -> f64 {
        self.edge_distance
    }

    pub fn max_points(&self) -> u64 {
        self.max_points
    }
}

/// Visual styling of the SVG rendering.
///
/// Fields that are not set fall back to the renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background fill, as a color string. Transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Stroke of the rectangle outline.
    #[serde(default)]
    outline_color: Option<String>,

    /// Fill of the point markers.
    #[serde(default)]
    point_color: Option<String>,

    /// Radius of the point markers, in layout units.
    #[serde(default)]
    point_radius: Option<f64>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the outline [`Color`], dark gray by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn outline_color(&self) -> Result<Color, String> {
        Color::new(self.outline_color.as_deref().unwrap_or("#333333"))
            .map_err(|err| format!("Invalid outline color in config: {err}"))
    }

    /// Returns the point [`Color`], red by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn point_color(&self) -> Result<Color, String> {
        Color::new(self.point_color.as_deref().unwrap_or("#d62728"))
            .map_err(|err| format!("Invalid point color in config: {err}"))
    }

    /// Returns the point marker radius.
    pub fn point_radius(&self) -> f64 {
        self.point_radius.unwrap_or(2.5)
    }
}

/// Listening address of the HTTP service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    bind: String,

    #[serde(default = "default_port")]
    port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Creates a server configuration.
    pub fn new(bind: impl Into<String>, port: u16) -> Self {
        Self {
            bind: bind.into(),
            port,
        }
    }

    pub fn bind(&self) -> &str {
        &self.bind
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns `bind:port`, suitable for a socket listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
