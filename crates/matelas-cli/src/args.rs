//! Command-line argument definitions for the Matelas CLI.
//!
//! [`Args`] holds the options shared by every subcommand (configuration
//! file and logging verbosity); [`Command`] selects between computing a
//! single layout and running the HTTP server.

use clap::{Parser, Subcommand};

use matelas::{export::ExportFormat, layout::LayoutPattern};

/// Command-line arguments for the Matelas layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the support points of one rectangle
    Compute(ComputeArgs),

    /// Serve the web form and the JSON API
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
    /// Rectangle width in centimetres
    #[arg(long)]
    pub width: f64,

    /// Rectangle height in centimetres
    #[arg(long)]
    pub height: f64,

    /// Minimum horizontal spacing (defaults to the configured value)
    #[arg(long)]
    pub min_dist_x: Option<f64>,

    /// Minimum vertical spacing (defaults to the configured value)
    #[arg(long)]
    pub min_dist_y: Option<f64>,

    /// Inset of the corner points (defaults to the configured value)
    #[arg(long)]
    pub edge_distance: Option<f64>,

    /// Layout pattern (staggered, grid)
    #[arg(long)]
    pub pattern: Option<LayoutPattern>,

    /// Output format (json, csv, svg)
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (defaults to the configured value)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (defaults to the configured value)
    #[arg(short, long)]
    pub port: Option<u16>,
}
