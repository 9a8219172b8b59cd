//! CLI logic for the Matelas layout tool.
//!
//! `compute` resolves one rectangle and writes the layout in the selected
//! format; `serve` starts the HTTP service on a Tokio runtime.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, ComputeArgs, ServeArgs};

use std::{fs, io::Write, sync::Arc};

use log::info;

use matelas::{
    LayoutService, MatelasError,
    config::{AppConfig, ServerConfig},
    request::LayoutRequest,
};

/// Run the Matelas CLI application
///
/// # Errors
///
/// Returns `MatelasError` for:
/// - Configuration loading errors
/// - Rejected layout inputs
/// - Export errors
/// - File and socket I/O errors
pub fn run(args: &Args) -> Result<(), MatelasError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Compute(compute_args) => compute(app_config, compute_args),
        Command::Serve(serve_args) => serve(app_config, serve_args),
    }
}

fn compute(mut app_config: AppConfig, args: &ComputeArgs) -> Result<(), MatelasError> {
    if let Some(pattern) = args.pattern {
        let layout = app_config.layout().clone().with_pattern(pattern);
        app_config = app_config.with_layout(layout);
    }

    let mut request = LayoutRequest::new(args.width, args.height);
    if let Some(min_dist_x) = args.min_dist_x {
        request = request.with_min_dist_x(min_dist_x);
    }
    if let Some(min_dist_y) = args.min_dist_y {
        request = request.with_min_dist_y(min_dist_y);
    }
    if let Some(edge_distance) = args.edge_distance {
        request = request.with_edge_distance(edge_distance);
    }

    let service = LayoutService::new(app_config);
    let input = service.resolve(&request)?;
    let layout = service.compute(&input)?;
    let rendered = service.render(&layout, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(
                output_file = path.as_str(),
                format:% = args.format,
                points_count = layout.points().len();
                "Layout exported successfully"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn serve(app_config: AppConfig, args: &ServeArgs) -> Result<(), MatelasError> {
    let configured = app_config.server();
    let server_config = ServerConfig::new(
        args.bind.as_deref().unwrap_or(configured.bind()),
        args.port.unwrap_or(configured.port()),
    );

    let service = Arc::new(LayoutService::new(app_config));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(matelas_server::serve(service, &server_config))
}
