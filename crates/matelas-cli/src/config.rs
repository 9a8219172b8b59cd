//! Configuration file loading for the CLI
//!
//! Finds the TOML configuration in the usual locations (explicit path,
//! local directory, platform config directory) and validates it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use matelas::{MatelasError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for MatelasError {
    fn from(err: ConfigError) -> Self {
        MatelasError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (matelas/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MatelasError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("matelas/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "matelas", "matelas") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, MatelasError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content)?)
}

/// Parses and validates a TOML configuration.
fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use matelas::layout::LayoutPattern;

    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.layout().pattern(), LayoutPattern::Staggered);
        assert_eq!(config.layout().min_dist_x(), 30.0);
        assert_eq!(config.server().port(), 8000);
    }

    #[test]
    fn test_sections_are_read() {
        let config = parse_config(
            r##"
            [layout]
            pattern = "grid"
            min_dist_x = 25.0
            edge_distance = 10

            [style]
            point_color = "#0000ff"
            point_radius = 4.0

            [server]
            bind = "127.0.0.1"
            port = 9000
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().pattern(), LayoutPattern::Grid);
        assert_eq!(config.layout().min_dist_x(), 25.0);
        assert_eq!(config.layout().min_dist_y(), 40.0);
        assert_eq!(config.layout().edge_distance(), 10.0);
        assert_eq!(config.style().point_radius(), 4.0);
        assert_eq!(config.server().address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_config("[layout\npattern = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_pattern() {
        let err = parse_config("[layout]\npattern = \"spiral\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = parse_config("[layout]\nmin_dist_y = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = parse_config("[style]\npoint_color = \"not-a-color\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/nonexistent/matelas.toml")).unwrap_err();

        assert!(matches!(err, MatelasError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }
}
