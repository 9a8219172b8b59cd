//! Error types for Matelas operations.
//!
//! This module provides the main error type [`MatelasError`] which wraps
//! the error conditions that can occur while resolving, computing and
//! exporting a layout.

use std::io;

use thiserror::Error;

use matelas_core::error::LayoutError;

use crate::{export, request::InputError};

/// The main error type for Matelas operations.
#[derive(Debug, Error)]
pub enum MatelasError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
